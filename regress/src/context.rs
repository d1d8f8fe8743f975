use ltlf_domain::{Domain, Literal, Term};
use ltlf_unify::VarTypes;

/// Derives the type of every variable appearing in `literals` from the
/// predicate signatures they appear under. A variable used consistently
/// under the same predicate position always gets the same type; nothing
/// here detects an inconsistent typing (that is `domain`'s job at schema
/// construction time, not the regression engine's at search time).
pub fn infer_var_types(literals: &[Literal], domain: &Domain) -> VarTypes {
    let mut types = VarTypes::new();
    for literal in literals {
        if let Some(predicate) = domain.predicate_by_name(&literal.predicate) {
            for (term, ty) in literal.args.iter().zip(predicate.arg_types.iter()) {
                if let Term::Var(v) = term {
                    types.insert(*v, *ty);
                }
            }
        }
    }
    types
}

/// The smallest variable id guaranteed not to collide with any variable
/// already appearing in `literals` (§9: a regression call alpha-renames
/// the schema it applies to fresh variables before unifying). Callers
/// reset this per regression call rather than threading one counter
/// across an entire search, so that canonical forms stay reproducible
/// regardless of exploration order (§9).
pub fn next_fresh_var(literals: &[Literal]) -> u32 {
    literals
        .iter()
        .flat_map(|l| l.args.iter())
        .filter_map(|t| t.as_var())
        .map(|v| v.0)
        .max()
        .map_or(0, |m| m + 1)
}
