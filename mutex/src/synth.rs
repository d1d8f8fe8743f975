use crate::check::violating_pair;
use crate::pattern::MutexPattern;
use ltlf_domain::{ActionSchema, Domain, Literal, Predicate, PredicateId};

/// Derives [`MutexPattern`]s from a domain's action schemas without
/// grounding (§4.2). Two families of candidate are proposed and then
/// each is kept only if no schema's effect can produce a state
/// violating it:
///
/// - **same-predicate candidates**: for a predicate `p` and a position
///   `i`, the claim that two instances of `p` agreeing everywhere except
///   `i` are mutex. Covers both the "single-argument exclusion" example
///   (`holding(?x)` vs `holding(?y)`, arity 1) and the "functional key"
///   example (`on(?x,?y)` vs `on(?x,?z)`, arity 2) from §4.2 — they are
///   the same structural shape at different arities, so one generator
///   produces both.
/// - **cross-predicate candidates**: for two distinct, equal-arity
///   predicates `p`/`q`, the claim that `p(x̄)` and `q(x̄)` (same
///   arguments, same order) are mutex.
///
/// A candidate is accepted iff no action schema's own `effect.add` set
/// contains two literals that simultaneously satisfy the candidate's
/// shared/differing-position relation: since `Domain::build` already
/// rejects a schema whose add-set and delete-set overlap, any such pair
/// would genuinely coexist in the state produced by applying that
/// schema, refuting the candidate. This is sound for the STRIPS-style
/// domains described in §1 (no conditional effects) but, as the
/// specification allows, may under-generate patterns whose violation
/// would only be reachable through a *chain* of actions rather than a
/// single one — a domain-specific invariant-synthesis algorithm (e.g.
/// TIM/Discoplan-style fixpoint analysis) would find more; this
/// generator only needs to be sound, not complete (§4.2, §9).
pub fn synthesize(domain: &Domain) -> Vec<MutexPattern> {
    let mut candidates = Vec::new();
    candidates.extend(same_predicate_candidates(domain));
    candidates.extend(cross_predicate_candidates(domain));

    candidates.retain(|candidate| verify(candidate, &domain.actions));
    candidates
}

fn same_predicate_candidates(domain: &Domain) -> Vec<MutexPattern> {
    let mut out = Vec::new();
    for (_, predicate) in domain.predicates.iter() {
        if predicate.arity() == 0 {
            continue;
        }
        if !predicate_ever_added(domain, predicate) {
            continue;
        }
        for diff_pos in 0..predicate.arity() {
            let shared: Vec<(usize, usize)> = (0..predicate.arity())
                .filter(|&i| i != diff_pos)
                .map(|i| (i, i))
                .collect();
            out.push(MutexPattern {
                pred_a: predicate.name.clone(),
                arity_a: predicate.arity(),
                pred_b: predicate.name.clone(),
                arity_b: predicate.arity(),
                shared,
                different: vec![(diff_pos, diff_pos)],
            });
        }
    }
    out
}

fn cross_predicate_candidates(domain: &Domain) -> Vec<MutexPattern> {
    let mut out = Vec::new();
    let predicates: Vec<(PredicateId, &Predicate)> = domain.predicates.iter().collect();
    for (i, (_, p)) in predicates.iter().enumerate() {
        if p.arity() == 0 || !predicate_ever_added(domain, p) {
            continue;
        }
        for (_, q) in &predicates[i + 1..] {
            if q.arity() != p.arity() || p.name == q.name || !predicate_ever_added(domain, q) {
                continue;
            }
            // a cross-predicate pattern needs at least one differing
            // position to be falsifiable at all; aligning every argument
            // and requiring none to differ would claim p and q can never
            // share *any* instantiation, which is far stronger than the
            // domain evidence below can support, so this generator
            // always designates the last argument as the differing one
            // and the rest as shared. Domains where the true invariant
            // needs a different split are outside what this generator
            // proposes (§4.2 allows incompleteness).
            let diff_pos = p.arity() - 1;
            let shared: Vec<(usize, usize)> = (0..p.arity()).filter(|&k| k != diff_pos).map(|k| (k, k)).collect();
            out.push(MutexPattern {
                pred_a: p.name.clone(),
                arity_a: p.arity(),
                pred_b: q.name.clone(),
                arity_b: q.arity(),
                shared,
                different: vec![(diff_pos, diff_pos)],
            });
        }
    }
    out
}

fn predicate_ever_added(domain: &Domain, predicate: &Predicate) -> bool {
    domain
        .actions
        .iter()
        .any(|a| a.effect.add.iter().any(|l| l.is_positive() && l.predicate == predicate.name))
}

/// Rejects `candidate` if any schema's own add-effect set contains a
/// violating pair of literals under it (see module docs for why this is
/// the verification the synthesiser performs).
fn verify(candidate: &MutexPattern, actions: &[ActionSchema]) -> bool {
    actions.iter().all(|action| !schema_violates(candidate, action))
}

fn schema_violates(candidate: &MutexPattern, action: &ActionSchema) -> bool {
    let adds: Vec<&Literal> = action.effect.add.iter().filter(|l| l.is_positive()).collect();
    for (i, a) in adds.iter().enumerate() {
        for (j, b) in adds.iter().enumerate() {
            if i == j {
                continue;
            }
            if violating_pair(&[(*a).clone(), (*b).clone()], std::slice::from_ref(candidate)).is_some() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use ltlf_domain::{Effect, Inequality, Parameter, Precondition, PredicateTable, Term, TypeTable, Var};

    fn blocksworld() -> Domain {
        let mut types = TypeTable::new();
        let block = types.intern("block");
        let mut predicates = PredicateTable::new();
        predicates.declare(Predicate {
            name: "on".into(),
            arg_types: vec![block, block],
        });
        predicates.declare(Predicate {
            name: "clear".into(),
            arg_types: vec![block],
        });
        predicates.declare(Predicate {
            name: "holding".into(),
            arg_types: vec![block],
        });
        predicates.declare(Predicate {
            name: "ontable".into(),
            arg_types: vec![block],
        });
        predicates.declare(Predicate {
            name: "handempty".into(),
            arg_types: vec![],
        });

        let x = Var(0);
        let y = Var(1);

        let pick_up = ActionSchema {
            name: "pick-up".into(),
            parameters: vec![Parameter { var: x, ty: block }],
            precondition: Precondition {
                literals: vec![
                    Literal::positive("clear", vec![Term::Var(x)]),
                    Literal::positive("ontable", vec![Term::Var(x)]),
                    Literal::positive("handempty", vec![]),
                ],
                inequalities: vec![],
            },
            effect: Effect {
                add: vec![Literal::positive("holding", vec![Term::Var(x)])],
                delete: vec![
                    Literal::positive("clear", vec![Term::Var(x)]),
                    Literal::positive("ontable", vec![Term::Var(x)]),
                    Literal::positive("handempty", vec![]),
                ],
            },
        };
        let put_down = ActionSchema {
            name: "put-down".into(),
            parameters: vec![Parameter { var: x, ty: block }],
            precondition: Precondition {
                literals: vec![Literal::positive("holding", vec![Term::Var(x)])],
                inequalities: vec![],
            },
            effect: Effect {
                add: vec![
                    Literal::positive("clear", vec![Term::Var(x)]),
                    Literal::positive("ontable", vec![Term::Var(x)]),
                    Literal::positive("handempty", vec![]),
                ],
                delete: vec![Literal::positive("holding", vec![Term::Var(x)])],
            },
        };
        let stack = ActionSchema {
            name: "stack".into(),
            parameters: vec![Parameter { var: x, ty: block }, Parameter { var: y, ty: block }],
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
        };
        let unstack = ActionSchema {
            name: "unstack".into(),
            parameters: vec![Parameter { var: x, ty: block }, Parameter { var: y, ty: block }],
            precondition: Precondition {
                literals: vec![
                    Literal::positive("on", vec![Term::Var(x), Term::Var(y)]),
                    Literal::positive("clear", vec![Term::Var(x)]),
                    Literal::positive("handempty", vec![]),
                ],
                inequalities: vec![Inequality(x, y)],
            },
            effect: Effect {
                add: vec![Literal::positive("holding", vec![Term::Var(x)]), Literal::positive("clear", vec![Term::Var(y)])],
                delete: vec![Literal::positive("on", vec![Term::Var(x), Term::Var(y)]), Literal::positive("handempty", vec![])],
            },
        };

        Domain::build("blocksworld", types, predicates, vec![pick_up, put_down, stack, unstack]).unwrap()
    }

    #[test]
    fn holding_self_exclusion_is_derived() {
        let domain = blocksworld();
        let patterns = synthesize(&domain);
        assert!(patterns
            .iter()
            .any(|p| p.pred_a == "holding" && p.pred_b == "holding" && p.different == vec![(0, 0)]));
    }

    #[test]
    fn on_functional_key_is_derived() {
        let domain = blocksworld();
        let patterns = synthesize(&domain);
        assert!(patterns
            .iter()
            .any(|p| p.pred_a == "on" && p.pred_b == "on" && p.shared == vec![(0, 0)] && p.different == vec![(1, 1)]));
    }

    #[test]
    fn handempty_has_no_same_predicate_candidate() {
        // arity 0 is skipped entirely by the same-predicate generator.
        let domain = blocksworld();
        let patterns = synthesize(&domain);
        assert!(!patterns.iter().any(|p| p.pred_a == "handempty"));
    }
}
