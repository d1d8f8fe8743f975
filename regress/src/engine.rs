use crate::context::{infer_var_types, next_fresh_var};
use crate::rename::rename_schema;
use ltlf_domain::{ActionSchema, Domain, Inequality, Literal, Substitution, Term};
use ltlf_mutex::{is_mutex_free, MutexPattern};
use ltlf_unify::{apply, mgu, VarTypes};

/// One regression step (§4.3 step 6): the predecessor state reached by
/// applying `schema` under `substitution` to achieve `target`.
#[derive(Clone, Debug)]
pub struct RegressionRecord {
    pub predecessor: Vec<Literal>,
    pub schema: String,
    pub substitution: Substitution,
    pub target: Literal,
}

fn any_inequality_trivial(inequalities: &[Inequality], sigma: &Substitution) -> bool {
    inequalities.iter().any(|ineq| {
        let bound_left = sigma.get(ineq.0).cloned().unwrap_or(Term::Var(ineq.0));
        let bound_right = sigma.get(ineq.1).cloned().unwrap_or(Term::Var(ineq.1));
        ineq.reduces_to_self_equality(&bound_left, &bound_right)
    })
}

/// `regress(L, a)` (§4.3): the set of lifted predecessor states reached
/// by one backward application of `schema` to achieve `target`. Tries
/// every add-effect literal (if `target` is positive) or delete-effect
/// literal (if negative) in declaration order, matching §4.3's "tie
/// breaking ... by enumerating them in declaration order; the engine
/// returns all successors." The schema is alpha-renamed starting past
/// every variable already used in `target` (§9); callers regressing a
/// literal that is part of a larger context (e.g. `regress_state`)
/// should use [`regress_in_context`] instead, which avoids the whole
/// context's variables rather than just the target's.
pub fn regress(target: &Literal, target_types: &VarTypes, schema: &ActionSchema, patterns: &[MutexPattern]) -> Vec<RegressionRecord> {
    regress_in_context(target, target_types, schema, patterns, std::slice::from_ref(target))
}

/// Like [`regress`] but alpha-renames the schema past every variable
/// used anywhere in `context`, not just in `target` — required when the
/// target is one literal drawn from a larger state whose other literals
/// will later be merged with this regression's substitution applied.
pub fn regress_in_context(target: &Literal, target_types: &VarTypes, schema: &ActionSchema, patterns: &[MutexPattern], context: &[Literal]) -> Vec<RegressionRecord> {
    let _span = ltlf_instrument::regression_span(&target.to_string(), &schema.name).entered();
    let mut next_var = next_fresh_var(context);
    let renamed = rename_schema(schema, &mut next_var);
    let effects: &[Literal] = if target.is_positive() { &renamed.add } else { &renamed.delete };

    let mut out = Vec::new();
    for effect_literal in effects {
        let sigma = match mgu(target, target_types, effect_literal, &renamed.var_types) {
            Ok(sigma) => sigma,
            Err(_) => continue,
        };
        if any_inequality_trivial(&renamed.inequalities, &sigma) {
            continue;
        }
        let predecessor: Vec<Literal> = renamed.precondition.iter().map(|l| apply(&sigma, l)).collect();
        if !is_mutex_free(&predecessor, patterns) {
            continue;
        }
        out.push(RegressionRecord {
            predecessor,
            schema: schema.name.clone(),
            substitution: sigma,
            target: target.clone(),
        });
    }
    out
}

/// `regress-state(S)` (§4.3): regresses each literal of `S` in turn
/// against every action schema, returning, for every literal and every
/// applicable schema, the full predecessor state formed by removing the
/// regressed literal, substituting `σ` into the remainder, and unioning
/// in the schema's (substituted) precondition literals — mutex-checked
/// on the union, since a literal drawn from the remainder of `S` might
/// conflict with one freshly introduced by the precondition even when
/// neither conflicted with the target alone.
///
/// Variable ids in `state` are never reused by a renamed schema: each
/// (literal, schema) pair alpha-renames the schema starting at the
/// first id past every variable already used in `state`, per §9.
pub fn regress_state(state: &[Literal], domain: &Domain, patterns: &[MutexPattern]) -> Vec<(Vec<Literal>, RegressionRecord)> {
    let state_types = infer_var_types(state, domain);
    let mut out = Vec::new();

    for (idx, literal) in state.iter().enumerate() {
        for schema in &domain.actions {
            for record in regress_in_context(literal, &state_types, schema, patterns, state) {
                let mut predecessor = Vec::with_capacity(state.len() + record.predecessor.len());
                for (j, other) in state.iter().enumerate() {
                    if j == idx {
                        continue;
                    }
                    predecessor.push(apply(&record.substitution, other));
                }
                for lit in &record.predecessor {
                    if !predecessor.contains(lit) {
                        predecessor.push(lit.clone());
                    }
                }
                if is_mutex_free(&predecessor, patterns) {
                    out.push((predecessor, record));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ltlf_domain::{Effect, Parameter, Precondition, Var};
    use proptest::prelude::*;

    fn block() -> ltlf_domain::TypeId {
        ltlf_domain::TypeId::from_u32(0)
    }

    fn stack_schema() -> ActionSchema {
        let x = Var(0);
        let y = Var(1);
        ActionSchema {
            name: "stack".into(),
            parameters: vec![Parameter { var: x, ty: block() }, Parameter { var: y, ty: block() }],
            precondition: Precondition {
                literals: vec![
                    Literal::positive("holding", vec![Term::Var(x)]),
                    Literal::positive("clear", vec![Term::Var(y)]),
                ],
                inequalities: vec![Inequality(x, y)],
            },
            effect: Effect {
                add: vec![
                    Literal::positive("on", vec![Term::Var(x), Term::Var(y)]),
                    Literal::positive("clear", vec![Term::Var(x)]),
                    Literal::positive("handempty", vec![]),
                ],
                delete: vec![
                    Literal::positive("holding", vec![Term::Var(x)]),
                    Literal::positive("clear", vec![Term::Var(y)]),
                ],
            },
        }
    }

    #[test]
    fn regress_on_via_stack_yields_holding_and_clear() {
        let schema = stack_schema();
        let a = ltlf_domain::Constant::new("a", block());
        let b = ltlf_domain::Constant::new("b", block());
        let target = Literal::positive("on", vec![Term::Const(a.clone()), Term::Const(b.clone())]);
        let records = regress(&target, &VarTypes::new(), &schema, &[]);
        assert_eq!(records.len(), 1);
        let predecessor = &records[0].predecessor;
        assert!(predecessor.contains(&Literal::positive("holding", vec![Term::Const(a)])));
        assert!(predecessor.contains(&Literal::positive("clear", vec![Term::Const(b)])));
    }

    #[test]
    fn regress_on_xx_is_pruned_by_inequality() {
        let schema = stack_schema();
        let x = Var(7);
        let target = Literal::positive("on", vec![Term::Var(x), Term::Var(x)]);
        let types: VarTypes = [(x, block())].into_iter().collect();
        let records = regress(&target, &types, &schema, &[]);
        assert!(records.is_empty());
    }

    #[test]
    fn regress_negative_literal_matches_delete_effect() {
        let schema = stack_schema();
        let target = Literal::negative("holding", vec![Term::Var(Var(3))]);
        let types: VarTypes = [(Var(3), block())].into_iter().collect();
        let records = regress(&target, &types, &schema, &[]);
        assert_eq!(records.len(), 1);
    }

    proptest! {
        // Invariant 3: every predecessor P emitted by regress(L, a) satisfies
        // "applying a's effect to P under sigma yields a state containing L" —
        // checked directly against the schema's own renamed effect set rather
        // than just relying on unifier soundness, since that's the literal
        // claim §8 invariant 3 makes.
        #[test]
        fn regress_soundness(obj_x in 0usize..3, obj_y in 0usize..3) {
            let names = ["a", "b", "c"];
            let schema = stack_schema();
            let x = ltlf_domain::Constant::new(names[obj_x], block());
            let y = ltlf_domain::Constant::new(names[obj_y], block());
            let target = Literal::positive("on", vec![Term::Const(x), Term::Const(y)]);
            let records = regress(&target, &VarTypes::new(), &schema, &[]);

            for record in &records {
                let mut next_var = next_fresh_var(std::slice::from_ref(&target));
                let renamed = crate::rename::rename_schema(&schema, &mut next_var);
                let achieved: Vec<Literal> = renamed.add.iter().map(|l| apply(&record.substitution, l)).collect();
                prop_assert!(achieved.contains(&target));
            }
        }
    }

    #[test]
    fn regress_state_discharges_one_literal_at_a_time() {
        let domain = {
            let mut types = ltlf_domain::TypeTable::new();
            let block = types.intern("block");
            let mut predicates = ltlf_domain::PredicateTable::new();
            predicates.declare(ltlf_domain::Predicate {
                name: "on".into(),
                arg_types: vec![block, block],
            });
            predicates.declare(ltlf_domain::Predicate {
                name: "clear".into(),
                arg_types: vec![block],
            });
            predicates.declare(ltlf_domain::Predicate {
                name: "holding".into(),
                arg_types: vec![block],
            });
            predicates.declare(ltlf_domain::Predicate {
                name: "handempty".into(),
                arg_types: vec![],
            });
            Domain::build("bw", types, predicates, vec![stack_schema()]).unwrap()
        };
        let a = ltlf_domain::Constant::new("a", block());
        let b = ltlf_domain::Constant::new("b", block());
        let goal = vec![Literal::positive("on", vec![Term::Const(a), Term::Const(b)])];
        let results = regress_state(&goal, &domain, &[]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1.schema, "stack");
    }
}
