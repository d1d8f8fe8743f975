//! Property test for invariant 6 (§8): two constructions over the same
//! domain and goal produce identical graphs — same nodes (literals,
//! depth) in the same order, same edges (schema, substitution, target)
//! in the same order.

use ltlf_domain::{ActionSchema, Domain, Effect, Inequality, Literal, Parameter, Precondition, Predicate, PredicateTable, Term, TypeTable, Var};
use ltlf_goalgraph::{build_graph, ConstructOptions};
use proptest::prelude::*;

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

fn graphs_equal(a: &ltlf_goalgraph::StateGraph, b: &ltlf_goalgraph::StateGraph) -> bool {
    if a.nodes.len() != b.nodes.len() || a.edges.len() != b.edges.len() || a.truncated != b.truncated {
        return false;
    }
    for (na, nb) in a.nodes.iter().zip(&b.nodes) {
        if na.literals != nb.literals || na.depth != nb.depth {
            return false;
        }
    }
    for (ea, eb) in a.edges.iter().zip(&b.edges) {
        if ea.predecessor.0 != eb.predecessor.0 || ea.successor.0 != eb.successor.0 || ea.schema != eb.schema || ea.target != eb.target {
            return false;
        }
    }
    true
}

proptest! {
    #[test]
    fn same_domain_and_goal_produce_identical_graphs(var_id in 0u32..4) {
        let domain = blocksworld();
        let goal = vec![Literal::positive("on", vec![Term::Var(Var(var_id)), Term::Var(Var(var_id + 10))])];

        let first = build_graph(goal.clone(), &domain, &[], ConstructOptions::default());
        let second = build_graph(goal, &domain, &[], ConstructOptions::default());

        prop_assert!(graphs_equal(&first, &second));
    }
}
