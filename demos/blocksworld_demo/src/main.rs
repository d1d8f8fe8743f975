//! Drives the lifted backward state-space constructor over a small
//! hand-built blocksworld domain and DFA, standing in for the "host
//! program" the specification describes but does not itself ship.

use anyhow::Context;
use ltlf_dfa::{parse_guard, Dfa, GroundingMap, ObjectTable};
use ltlf_domain::{ActionSchema, Domain, Effect, Inequality, Literal, Parameter, Precondition, Predicate, PredicateTable, Term, TypeTable, Var};
use ltlf_driver::{run_reporting, GraphPlanEmitter, PlanLibraryEmitter};
use ltlf_goalgraph::GoalCache;

fn blocksworld_domain() -> anyhow::Result<Domain> {
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
            add: vec![
                Literal::positive("holding", vec![Term::Var(x)]),
                Literal::positive("clear", vec![Term::Var(y)]),
            ],
            delete: vec![
                Literal::positive("on", vec![Term::Var(x), Term::Var(y)]),
                Literal::positive("clear", vec![Term::Var(x)]),
                Literal::positive("handempty", vec![]),
            ],
        },
    };

    let pick_up = ActionSchema {
        name: "pick-up".into(),
        parameters: vec![Parameter { var: x, ty: block }],
        precondition: Precondition {
            literals: vec![
                Literal::positive("ontable", vec![Term::Var(x)]),
                Literal::positive("clear", vec![Term::Var(x)]),
                Literal::positive("handempty", vec![]),
            ],
            inequalities: vec![],
        },
        effect: Effect {
            add: vec![Literal::positive("holding", vec![Term::Var(x)])],
            delete: vec![
                Literal::positive("ontable", vec![Term::Var(x)]),
                Literal::positive("clear", vec![Term::Var(x)]),
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
                Literal::positive("ontable", vec![Term::Var(x)]),
                Literal::positive("clear", vec![Term::Var(x)]),
                Literal::positive("handempty", vec![]),
            ],
            delete: vec![Literal::positive("holding", vec![Term::Var(x)])],
        },
    };

    Domain::build("blocksworld", types, predicates, vec![stack, unstack, pick_up, put_down]).context("building blocksworld domain")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let domain = blocksworld_domain()?;
    let block = domain.types.get("block").context("domain is missing its own `block` type")?;

    let mut objects = ObjectTable::new();
    objects.declare("a", block);
    objects.declare("b", block);
    objects.declare("c", block);

    let mut grounding = GroundingMap::new();
    grounding.add_atom("on_a_b", "on", vec!["a".into(), "b".into()])?;
    grounding.add_atom("on_b_a", "on", vec!["b".into(), "a".into()])?;
    grounding.add_atom("clear_c", "clear", vec!["c".into()])?;

    // q0 --on_a_b--> q1, q1 --on_b_a | (clear_c & on_b_a)--> q2 (accepting):
    // the second transition's guard exercises the disjunctive §4.5a
    // grammar and the cache-sharing behaviour of §4.4 (`on_a_b` and
    // `on_b_a` canonicalise to the same goal skeleton).
    let mut dfa = Dfa::new("q0");
    dfa.add_state("q1");
    dfa.mark_accepting("q2");
    dfa.add_transition("q0", "q1", parse_guard("on_a_b").unwrap());
    dfa.add_transition("q1", "q2", parse_guard("on_b_a | (clear_c & on_b_a)").unwrap());

    let mut cache = GoalCache::new();
    let outcomes = run_reporting(&domain, &dfa, &grounding, &objects, &mut cache)?;

    for outcome in &outcomes {
        tracing::info!(from = %outcome.from, to = %outcome.to, disjuncts = outcome.disjuncts.len(), unreachable = outcome.unreachable_from_arbitrary_state, "drove transition");
        for disjunct in &outcome.disjuncts {
            let library = GraphPlanEmitter.emit(&disjunct.graph);
            println!(
                "{} -> {}: {} node(s), {} plan(s), cache_hit={}",
                outcome.from,
                outcome.to,
                disjunct.graph.nodes.len(),
                library.plans.len(),
                disjunct.cache_hit
            );
        }
    }

    let dump = cache.dump();
    println!("{}", serde_json::to_string_pretty(&dump)?);

    Ok(())
}
