use crate::term::{Inequality, Literal, Var};
use crate::types::TypeId;
use std::collections::HashMap;

/// Dense index into [`Domain`](crate::Domain)'s predicate table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct PredicateId(pub(crate) u32);

/// A predicate declaration: a name and an ordered list of argument types.
/// Arity is derived, never stored redundantly (`types.len()`).
#[derive(Clone, Debug)]
pub struct Predicate {
    pub name: String,
    pub arg_types: Vec<TypeId>,
}

impl Predicate {
    pub fn arity(&self) -> usize {
        self.arg_types.len()
    }
}

#[derive(Clone, Debug, Default)]
pub struct PredicateTable {
    predicates: Vec<Predicate>,
    by_name: HashMap<String, PredicateId>,
}

impl PredicateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, predicate: Predicate) -> PredicateId {
        let id = PredicateId(self.predicates.len() as u32);
        self.by_name.insert(predicate.name.clone(), id);
        self.predicates.push(predicate);
        id
    }

    pub fn get(&self, name: &str) -> Option<PredicateId> {
        self.by_name.get(name).copied()
    }

    pub fn resolve(&self, id: PredicateId) -> &Predicate {
        &self.predicates[id.0 as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (PredicateId, &Predicate)> {
        self.predicates
            .iter()
            .enumerate()
            .map(|(i, p)| (PredicateId(i as u32), p))
    }
}

/// One parameter of an action schema: a variable and its declared type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Parameter {
    pub var: Var,
    pub ty: TypeId,
}

/// The precondition of an action schema: a conjunction of literals plus a
/// set of pairwise inequality constraints between parameters.
#[derive(Clone, Debug, Default)]
pub struct Precondition {
    pub literals: Vec<Literal>,
    pub inequalities: Vec<Inequality>,
}

/// The effect of an action schema: disjoint add- and delete-sets of
/// literals over the schema's parameters. Per the original spec these are
/// unconditional STRIPS-style lists; no conditional effects (see
/// `SPEC_FULL.md` §9 open-question disposition).
#[derive(Clone, Debug, Default)]
pub struct Effect {
    pub add: Vec<Literal>,
    pub delete: Vec<Literal>,
}

/// A named, parameterised STRIPS action. Immutable after construction:
/// the parser bridge builds one of these per `:action` in the PDDL
/// domain and it is never mutated afterwards.
#[derive(Clone, Debug)]
pub struct ActionSchema {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub precondition: Precondition,
    pub effect: Effect,
}

impl ActionSchema {
    pub fn parameter_vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.parameters.iter().map(|p| p.var)
    }

    pub fn type_of(&self, v: Var) -> Option<TypeId> {
        self.parameters.iter().find(|p| p.var == v).map(|p| p.ty)
    }
}
