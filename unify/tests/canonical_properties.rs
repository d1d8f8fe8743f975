//! Property tests for invariants 1 and 2 (§8): canonical idempotence
//! and unifier soundness, over randomly generated small literal sets
//! that exercise repeated variables and mixed constant/variable
//! arguments the fixed example tests under-sample.

use ltlf_domain::{Constant, Literal, Polarity, Term, TypeId, Var};
use ltlf_unify::{apply, canonicalise, mgu, VarTypes};
use proptest::prelude::*;

const PREDICATES: &[&str] = &["on", "clear", "holding"];
const CONSTANTS: &[&str] = &["a", "b", "c"];

fn block() -> TypeId {
    TypeId::from_u32(0)
}

fn term_strategy() -> impl Strategy<Value = Term> {
    prop_oneof![
        (0u32..4).prop_map(|id| Term::Var(Var(id))),
        (0..CONSTANTS.len()).prop_map(|i| Term::Const(Constant::new(CONSTANTS[i], block()))),
    ]
}

fn literal_strategy(arity: usize) -> impl Strategy<Value = Literal> {
    (0..PREDICATES.len(), any::<bool>(), proptest::collection::vec(term_strategy(), arity)).prop_map(|(pred_idx, positive, args)| Literal {
        predicate: PREDICATES[pred_idx].to_string(),
        polarity: if positive { Polarity::Positive } else { Polarity::Negative },
        args,
    })
}

fn literal_set_strategy() -> impl Strategy<Value = Vec<Literal>> {
    proptest::collection::vec(literal_strategy(2), 0..5)
}

proptest! {
    // Invariant 1: canonicalise(canonicalise(S).state) == canonicalise(S).state
    #[test]
    fn canonicalise_is_idempotent(state in literal_set_strategy()) {
        let once = canonicalise(&state, &VarTypes::new());
        let twice = canonicalise(&once.literals, &VarTypes::new());
        prop_assert_eq!(once.literals, twice.literals);
    }

    // Invariant 1 corollary: the canonical key is stable under re-canonicalising.
    #[test]
    fn canonical_key_is_stable(state in literal_set_strategy()) {
        let once = canonicalise(&state, &VarTypes::new());
        let twice = canonicalise(&once.literals, &VarTypes::new());
        prop_assert_eq!(once.key(), twice.key());
    }

    // Invariant 2: if mgu(L, M) = sigma, then apply(sigma, L) == apply(sigma, M).
    #[test]
    fn unifier_soundness(x in 0u32..3, y in 0u32..3) {
        let l = Literal::positive("on", vec![Term::Var(Var(x)), Term::Var(Var(y))]);
        let m = Literal::positive("on", vec![Term::Var(Var(y)), Term::Var(Var(x))]);
        if let Ok(sigma) = mgu(&l, &VarTypes::new(), &m, &VarTypes::new()) {
            prop_assert_eq!(apply(&sigma, &l), apply(&sigma, &m));
        }
    }
}
