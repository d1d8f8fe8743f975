//! Plan-library emitter (§2 item 7, §4.7 by cross-reference in the
//! glossary): renders a [`StateGraph`] into a set of parameterised
//! reactive plans. Specified at interface level only — rendering a
//! `PlanLibrary` to a specific downstream BDI runtime's source syntax
//! stays externally owned (§1 Non-goals).

use ltlf_domain::{Literal, Substitution};
use ltlf_goalgraph::StateGraph;

/// One parameterised reactive plan: triggered by achieving `trigger`,
/// its body first achieves `preconditions` (recursively, via the same
/// plan library) then invokes `schema` under `substitution`.
#[derive(Clone, Debug)]
pub struct ReactivePlan {
    pub trigger: Literal,
    pub preconditions: Vec<Literal>,
    pub schema: String,
    pub substitution: Substitution,
}

/// The emitter's output: one plan per graph edge, without any
/// commitment to a runtime's plan-body syntax.
#[derive(Clone, Debug, Default)]
pub struct PlanLibrary {
    pub plans: Vec<ReactivePlan>,
}

/// Implemented by anything that turns a [`StateGraph`] into a
/// [`PlanLibrary`]; the core ships one reference implementation
/// ([`GraphPlanEmitter`]) and leaves room for a host to render plans
/// differently (e.g. grouping by schema, deduplicating triggers).
pub trait PlanLibraryEmitter {
    fn emit(&self, graph: &StateGraph) -> PlanLibrary;
}

/// The reference emitter: one [`ReactivePlan`] per [`GraphEdge`],
/// triggered by the literal the edge's schema application achieves,
/// with the predecessor state's literals as the preconditions to
/// achieve first (§1 "achieve-preconditions then invoke action
/// schema").
pub struct GraphPlanEmitter;

impl PlanLibraryEmitter for GraphPlanEmitter {
    fn emit(&self, graph: &StateGraph) -> PlanLibrary {
        let plans = graph
            .edges
            .iter()
            .map(|edge| ReactivePlan {
                trigger: edge.target.clone(),
                preconditions: graph.node(edge.predecessor).literals.clone(),
                schema: edge.schema.clone(),
                substitution: edge.substitution.clone(),
            })
            .collect();
        PlanLibrary { plans }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ltlf_goalgraph::{build_graph, ConstructOptions};
    use ltlf_domain::{ActionSchema, Domain, Effect, Inequality, Parameter, Precondition, Predicate, PredicateTable, Term, TypeTable, Var};

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
            name: "handempty".into(),
            arg_types: vec![],
        });
        let x = Var(0);
        let y = Var(1);
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
        Domain::build("bw", types, predicates, vec![stack]).unwrap()
    }

    #[test]
    fn emits_one_plan_per_edge() {
        let domain = blocksworld();
        let goal = vec![Literal::positive("on", vec![Term::Var(Var(0)), Term::Var(Var(1))])];
        let graph = build_graph(goal, &domain, &[], ConstructOptions::default());

        let library = GraphPlanEmitter.emit(&graph);
        assert_eq!(library.plans.len(), graph.edges.len());
        assert!(!library.plans.is_empty());
        assert_eq!(library.plans[0].schema, "stack");
    }
}
