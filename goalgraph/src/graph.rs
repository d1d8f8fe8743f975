use ltlf_domain::{Literal, Substitution};

/// Dense index into a [`StateGraph`]'s node table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct NodeId(pub usize);

/// An abstract state (§3): a canonicalised conjunction of literals at a
/// known depth from the goal root. Never mutated after being pushed
/// into a [`StateGraph`] — identity is its canonical form, which is why
/// this type carries no parent pointer of its own; that information
/// lives on the [`GraphEdge`]s pointing at it.
#[derive(Clone, Debug)]
pub struct AbstractState {
    pub literals: Vec<Literal>,
    pub depth: usize,
}

/// A labelled edge (§3 `StateGraph.edges`): applying `schema` under
/// `substitution` to the literal `target` in `successor` explains one
/// way to reach `successor` from `predecessor`. "Predecessor" and
/// "successor" name backward-search roles, not graph direction:
/// `predecessor` is the newly regressed (deeper, farther from the goal)
/// state, `successor` is the state being regressed (shallower, closer
/// to the goal) — i.e. `predecessor --schema--> successor` is the
/// forward-time action application the emitted plan will eventually
/// perform.
#[derive(Clone, Debug)]
pub struct GraphEdge {
    pub predecessor: NodeId,
    pub successor: NodeId,
    pub schema: String,
    pub substitution: Substitution,
    pub target: Literal,
}

/// The graph built by one goal-graph construction (§3 `StateGraph`,
/// §4.4). `root` is always depth 0 and equals the canonicalised goal
/// literal set this graph was built for. `truncated` is set when
/// `max_states`/`max_depth` stopped exploration before it reached a
/// fixed point (§4.4 "Termination").
#[derive(Clone, Debug)]
pub struct StateGraph {
    pub root: NodeId,
    pub nodes: Vec<AbstractState>,
    pub edges: Vec<GraphEdge>,
    pub truncated: bool,
}

impl StateGraph {
    pub fn node(&self, id: NodeId) -> &AbstractState {
        &self.nodes[id.0]
    }

    pub fn root_state(&self) -> &AbstractState {
        self.node(self.root)
    }

    /// Edges whose `successor` is `id` — the ways to regress backward
    /// *from* this state, i.e. the outgoing edges of a backward search
    /// rooted at `id`.
    pub fn edges_into(&self, id: NodeId) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |e| e.successor == id)
    }

    /// `true` iff this graph has no edges at all — the constructor found
    /// no abstract predecessor for the root (§4.5 step 4: "the root has
    /// no incoming edges").
    pub fn is_root_only(&self) -> bool {
        self.edges.is_empty()
    }
}
