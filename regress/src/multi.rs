use crate::context::{infer_var_types, next_fresh_var};
use crate::engine::RegressionRecord;
use crate::rename::rename_schema;
use ltlf_domain::{Domain, Inequality, Literal, Substitution, Term};
use ltlf_mutex::{is_mutex_free, MutexPattern};
use ltlf_unify::{apply, mgu, VarTypes};

/// `regress_state_multi` (SPEC_FULL §4.3a): a schema application that
/// simultaneously discharges two literals of `state` under one
/// substitution, tried before the strict one-literal-at-a-time
/// `regress_state`. Only pairs are attempted (not larger subsets) — a
/// deliberate simplification over the original prototype's unbounded
/// search, kept bounded since a single schema rarely has more than a
/// couple of add/delete literals to spread across.
///
/// Never returns a successor `regress_state` alone could not eventually
/// reach via two single-literal steps; it only shortens the path, so
/// property tests that assume strictly one discharged literal per edge
/// (§8 invariant 3) exercise `regress_state`/`regress` instead and leave
/// this mode unused, as the specification requires.
pub fn regress_state_multi(state: &[Literal], domain: &Domain, patterns: &[MutexPattern]) -> Vec<(Vec<Literal>, RegressionRecord)> {
    let state_types = infer_var_types(state, domain);
    let mut out = Vec::new();

    for schema in &domain.actions {
        for i in 0..state.len() {
            for j in (i + 1)..state.len() {
                let mut next_var = next_fresh_var(state);
                let renamed = rename_schema(schema, &mut next_var);

                let Some(sigma) = joint_unify(&state[i], &state[j], &state_types, &renamed.add, &renamed.delete, &renamed.var_types) else {
                    continue;
                };
                if any_inequality_trivial(&renamed.inequalities, &sigma) {
                    continue;
                }
                let precondition_part: Vec<Literal> = renamed.precondition.iter().map(|l| apply(&sigma, l)).collect();
                if !is_mutex_free(&precondition_part, patterns) {
                    continue;
                }

                let mut predecessor = Vec::with_capacity(state.len() + precondition_part.len());
                for (k, other) in state.iter().enumerate() {
                    if k == i || k == j {
                        continue;
                    }
                    predecessor.push(apply(&sigma, other));
                }
                for lit in &precondition_part {
                    if !predecessor.contains(lit) {
                        predecessor.push(lit.clone());
                    }
                }
                if is_mutex_free(&predecessor, patterns) {
                    out.push((
                        predecessor,
                        RegressionRecord {
                            predecessor: precondition_part,
                            schema: schema.name.clone(),
                            substitution: sigma,
                            target: state[i].clone(),
                        },
                    ));
                }
            }
        }
    }
    out
}

fn any_inequality_trivial(inequalities: &[Inequality], sigma: &Substitution) -> bool {
    inequalities.iter().any(|ineq| {
        let bound_left = sigma.get(ineq.0).cloned().unwrap_or(Term::Var(ineq.0));
        let bound_right = sigma.get(ineq.1).cloned().unwrap_or(Term::Var(ineq.1));
        ineq.reduces_to_self_equality(&bound_left, &bound_right)
    })
}

/// Finds a single substitution unifying `a` against some literal of
/// `effects_a` and, after applying that partial substitution, `b`
/// against some literal of `effects_b` — i.e. one schema invocation
/// discharging both `a` and `b` at once. Returns the first consistent
/// pairing found, in declaration order of both effect lists.
fn joint_unify(a: &Literal, b: &Literal, types: &VarTypes, add: &[Literal], delete: &[Literal], schema_types: &VarTypes) -> Option<Substitution> {
    let effects_a: &[Literal] = if a.is_positive() { add } else { delete };
    let effects_b: &[Literal] = if b.is_positive() { add } else { delete };

    for effect_a in effects_a {
        let Ok(sigma_a) = mgu(a, types, effect_a, schema_types) else { continue };
        let b_partial = apply(&sigma_a, b);
        for effect_b in effects_b {
            let effect_b_partial = apply(&sigma_a, effect_b);
            if let Ok(sigma_b) = mgu(&b_partial, types, &effect_b_partial, schema_types) {
                if let Some(combined) = compose(&sigma_a, &sigma_b) {
                    return Some(combined);
                }
            }
        }
    }
    None
}

fn compose(first: &Substitution, second: &Substitution) -> Option<Substitution> {
    let mut combined = Substitution::empty();
    for (v, t) in first.iter() {
        combined.bind(v, t.clone()).ok()?;
    }
    for (v, t) in second.iter() {
        combined.bind(v, t.clone()).ok()?;
    }
    Some(combined)
}
