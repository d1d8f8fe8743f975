use ltlf_domain::Literal;
use ltlf_goalgraph::StateGraph;
use std::rc::Rc;

/// One DNF disjunct of a transition's guard, resolved to a lifted goal
/// and its constructed graph (§4.5 steps 2-3).
pub struct DisjunctResult {
    pub goal: Vec<Literal>,
    pub graph: Rc<StateGraph>,
    pub cache_hit: bool,
}

/// The full result of driving one DFA transition (§4.5): one
/// [`DisjunctResult`] per disjunct of the guard's DNF, plus the
/// advisory *unreachable-from-arbitrary-state* flag (§4.5 step 4, §9
/// open question — suppression policy is left to the caller).
pub struct TransitionOutcome {
    pub from: String,
    pub to: String,
    pub disjuncts: Vec<DisjunctResult>,
    pub unreachable_from_arbitrary_state: bool,
}

impl TransitionOutcome {
    /// `true` iff every disjunct's graph found at least one abstract
    /// predecessor — i.e. this transition is not flagged advisory
    /// unreachable.
    pub fn has_any_predecessor(&self) -> bool {
        !self.unreachable_from_arbitrary_state
    }
}
