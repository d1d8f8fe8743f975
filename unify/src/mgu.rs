use crate::error::UnifyFail;
use ltlf_domain::{BindConflict, Literal, Substitution, Term, TypeId, Var};
use std::collections::BTreeMap;

/// Types of the free variables appearing on one side of a unification.
/// Goal literals carry their variables' types via the abstract state they
/// came from; action-schema literals carry them via the schema's
/// parameter declarations. Either side may leave a variable untyped
/// (`None`), in which case no type check is performed for it — this
/// happens for variables introduced by canonicalisation of a literal set
/// whose type is only implicitly constrained by the predicate signature.
pub type VarTypes = BTreeMap<Var, TypeId>;

fn type_of(term: &Term, types: &VarTypes) -> Option<TypeId> {
    match term {
        Term::Const(c) => Some(c.ty),
        Term::Var(v) => types.get(v).copied(),
    }
}

/// Follows `term` through `sub` until it reaches a constant or an
/// unbound variable. `Substitution::bind` guarantees this terminates
/// (acyclicity is enforced on every `bind`).
fn resolve(term: &Term, sub: &Substitution) -> Term {
    let mut current = term.clone();
    loop {
        match &current {
            Term::Const(_) => return current,
            Term::Var(v) => match sub.get(*v) {
                Some(next) => current = next.clone(),
                None => return current,
            },
        }
    }
}

/// Most general unifier of two literals, per §4.1. `l` and `m` must share
/// predicate name, arity and polarity or this fails immediately with
/// [`UnifyFail::ShapeMismatch`]. `types_l`/`types_m` supply the types of
/// any free variables appearing in each literal (see [`VarTypes`]).
pub fn mgu(l: &Literal, types_l: &VarTypes, m: &Literal, types_m: &VarTypes) -> Result<Substitution, UnifyFail> {
    if !l.matches_shape(m) {
        return Err(UnifyFail::ShapeMismatch);
    }
    let mut sub = Substitution::empty();
    for (a, b) in l.args.iter().zip(m.args.iter()) {
        unify_terms(a, types_l, b, types_m, &mut sub)?;
    }
    Ok(sub)
}

fn unify_terms(a: &Term, types_a: &VarTypes, b: &Term, types_b: &VarTypes, sub: &mut Substitution) -> Result<(), UnifyFail> {
    let ra = resolve(a, sub);
    let rb = resolve(b, sub);
    match (&ra, &rb) {
        (Term::Const(ca), Term::Const(cb)) => {
            if ca.name == cb.name {
                Ok(())
            } else {
                Err(UnifyFail::ConstantClash(ca.name.to_string(), cb.name.to_string()))
            }
        }
        (Term::Var(v), Term::Const(c)) | (Term::Const(c), Term::Var(v)) => {
            let var_ty = type_of(&Term::Var(*v), if ra.is_var() { types_a } else { types_b });
            if let Some(ty) = var_ty {
                if ty != c.ty {
                    return Err(UnifyFail::TypeMismatch);
                }
            }
            sub.bind(*v, Term::Const(c.clone())).map_err(bind_conflict)
        }
        (Term::Var(v1), Term::Var(v2)) => {
            if v1 == v2 {
                return Ok(());
            }
            let ty1 = type_of(&ra, types_a);
            let ty2 = type_of(&rb, types_b);
            if let (Some(t1), Some(t2)) = (ty1, ty2) {
                if t1 != t2 {
                    return Err(UnifyFail::TypeMismatch);
                }
            }
            sub.bind(*v1, Term::Var(*v2)).map_err(bind_conflict)
        }
    }
}

fn bind_conflict(_: BindConflict) -> UnifyFail {
    UnifyFail::OccursCheck
}

/// Applies `sub` to every argument of `literal`, returning a new literal
/// with all bound variables replaced (§4.1 `apply(σ, L)`). Polarity is
/// untouched: substitution only ever rewrites terms, never polarity.
pub fn apply(sub: &Substitution, literal: &Literal) -> Literal {
    Literal {
        predicate: literal.predicate.clone(),
        polarity: literal.polarity,
        args: literal.args.iter().map(|t| resolve(t, sub)).collect(),
    }
}
