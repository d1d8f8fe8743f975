use crate::term::{Term, Var};
use std::collections::BTreeMap;
use std::fmt;

/// A partial, acyclic, idempotent map from variable to term. Built
/// incrementally by `unify::mgu`; this crate only owns the data and the
/// bookkeeping needed to keep the acyclicity/idempotence invariant, not
/// the unification algorithm itself.
///
/// A `BTreeMap` keeps iteration order deterministic by variable id, which
/// matters for §8 invariant 6 (determinism): two runs that build the same
/// substitution from the same inputs must apply it in the same order.
#[derive(Clone, Eq, PartialEq, Default)]
pub struct Substitution {
    bindings: BTreeMap<Var, Term>,
}

/// Returned by [`Substitution::bind`] when adding a binding would violate
/// acyclicity (an occurs-check failure) or rebind an already-bound
/// variable to a different term.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BindConflict;

impl Substitution {
    pub fn empty() -> Self {
        Substitution::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn get(&self, v: Var) -> Option<&Term> {
        self.bindings.get(&v)
    }

    pub fn contains(&self, v: Var) -> bool {
        self.bindings.contains_key(&v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Var, &Term)> {
        self.bindings.iter().map(|(v, t)| (*v, t))
    }

    /// Adds a binding `v -> t`, rejecting it if `v` occurs in `t` (occurs
    /// check, guarding acyclicity) or if `v` is already bound to a
    /// different term. Rebinding `v` to the exact same term is a no-op,
    /// not a conflict, since `mgu` may revisit the same pair twice while
    /// unifying argument lists.
    pub fn bind(&mut self, v: Var, t: Term) -> Result<(), BindConflict> {
        if let Term::Var(tv) = &t {
            if *tv == v {
                return Ok(()); // v -> v is trivially fine and adds nothing
            }
        }
        if occurs(v, &t, &self.bindings) {
            return Err(BindConflict);
        }
        match self.bindings.get(&v) {
            Some(existing) if existing != &t => Err(BindConflict),
            Some(_) => Ok(()),
            None => {
                self.bindings.insert(v, t);
                Ok(())
            }
        }
    }
}

fn occurs(v: Var, t: &Term, bindings: &BTreeMap<Var, Term>) -> bool {
    match t {
        Term::Const(_) => false,
        Term::Var(tv) if *tv == v => true,
        Term::Var(tv) => match bindings.get(tv) {
            Some(bound) => occurs(v, bound, bindings),
            None => false,
        },
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.bindings.iter()).finish()
    }
}
