//! The DFA model (§1, §4.5): states, an initial state, accepting states
//! and guarded transitions. This crate only holds the model the driver
//! consumes — constructing a DFA from an LTLf formula is out of scope
//! (spec.md Non-goals, carried forward unchanged by SPEC_FULL §1).

use crate::guard::GuardExpr;
use std::collections::BTreeSet;

/// One guarded transition between two named DFA states.
#[derive(Clone, Debug)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub guard: GuardExpr,
}

/// A deterministic finite automaton over the domain's grounded atoms,
/// as handed to the driver by whatever upstream component translated
/// an LTLf formula into a DFA (out of scope here).
#[derive(Clone, Debug)]
pub struct Dfa {
    pub states: BTreeSet<String>,
    pub initial: String,
    pub accepting: BTreeSet<String>,
    pub transitions: Vec<Transition>,
}

impl Dfa {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        let mut states = BTreeSet::new();
        states.insert(initial.clone());
        Dfa {
            states,
            initial,
            accepting: BTreeSet::new(),
            transitions: Vec::new(),
        }
    }

    pub fn add_state(&mut self, name: impl Into<String>) {
        self.states.insert(name.into());
    }

    pub fn mark_accepting(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.states.insert(name.clone());
        self.accepting.insert(name);
    }

    pub fn add_transition(&mut self, from: impl Into<String>, to: impl Into<String>, guard: GuardExpr) {
        let from = from.into();
        let to = to.into();
        self.states.insert(from.clone());
        self.states.insert(to.clone());
        self.transitions.push(Transition { from, to, guard });
    }

    /// Transitions leaving `state`, in declaration order (stable, so the
    /// driver's per-transition output is reproducible across runs).
    pub fn transitions_from<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting.contains(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::parse_guard;

    #[test]
    fn transitions_from_filters_by_source_state() {
        let mut dfa = Dfa::new("q0");
        dfa.mark_accepting("q1");
        dfa.add_transition("q0", "q1", parse_guard("on_a_b").unwrap());
        dfa.add_transition("q1", "q1", parse_guard("true").unwrap());

        let from_q0: Vec<_> = dfa.transitions_from("q0").collect();
        assert_eq!(from_q0.len(), 1);
        assert_eq!(from_q0[0].to, "q1");
        assert!(dfa.is_accepting("q1"));
        assert!(!dfa.is_accepting("q0"));
    }
}
