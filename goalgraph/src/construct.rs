use crate::graph::{AbstractState, GraphEdge, NodeId, StateGraph};
use ltlf_domain::{Domain, Literal};
use ltlf_mutex::{is_mutex_free, MutexPattern};
use ltlf_regress::{infer_var_types, regress_state, regress_state_multi};
use ltlf_unify::canonicalise;
use std::collections::{HashMap, VecDeque};

/// Search bounds for one goal-graph construction (§4.4 inputs). The
/// original spec's `max_depth` is optional; `max_states` always bounds
/// the explored set, since an unbounded search has no other termination
/// guarantee in a domain whose lifted state space is infinite (§4.4
/// "Termination").
#[derive(Copy, Clone, Debug)]
pub struct ConstructOptions {
    pub max_states: usize,
    pub max_depth: Option<usize>,
    /// Enables the ADDED `regress_state_multi` mode (SPEC_FULL §4.3a)
    /// alongside strict one-literal-at-a-time regression.
    pub multi: bool,
}

impl Default for ConstructOptions {
    fn default() -> Self {
        ConstructOptions {
            max_states: 10_000,
            max_depth: None,
            multi: false,
        }
    }
}

/// Builds a [`StateGraph`] by BFS from `root_literals` (already
/// canonicalised by the caller — see `cache::GoalCache`), per §4.4 steps
/// 2–4. Declaration order of `domain.actions` and of each schema's
/// effect literals is preserved throughout, which is what makes the
/// resulting graph reproducible across runs for the same inputs (§5,
/// §8 invariant 6).
pub fn build_graph(root_literals: Vec<Literal>, domain: &Domain, patterns: &[MutexPattern], options: ConstructOptions) -> StateGraph {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut index: HashMap<String, NodeId> = HashMap::new();

    let root_key = canonical_key(&root_literals, domain);
    let root_id = NodeId(nodes.len());
    nodes.push(AbstractState {
        literals: root_literals,
        depth: 0,
    });
    index.insert(root_key, root_id);

    let mut queue = VecDeque::new();
    // A root that already violates a mutex pattern (e.g. `{+holding(?v_0),
    // +holding(?v_1)}`) names an impossible abstract state: there is
    // nothing to regress from, so the graph stays root-only (§8 S2).
    if is_mutex_free(&nodes[root_id.0].literals, patterns) {
        queue.push_back(root_id);
    }
    let mut truncated = false;

    while let Some(current_id) = queue.pop_front() {
        if index.len() >= options.max_states {
            truncated = true;
            break;
        }
        let current_state = nodes[current_id.0].literals.clone();
        let current_depth = nodes[current_id.0].depth;

        let mut successors = regress_state(&current_state, domain, patterns);
        if options.multi {
            successors.extend(regress_state_multi(&current_state, domain, patterns));
        }

        for (predecessor_literals, record) in successors {
            let key = canonical_key(&predecessor_literals, domain);

            if let Some(&existing_id) = index.get(&key) {
                edges.push(GraphEdge {
                    predecessor: existing_id,
                    successor: current_id,
                    schema: record.schema,
                    substitution: record.substitution,
                    target: record.target,
                });
                continue;
            }

            let new_depth = current_depth + 1;
            if let Some(max_depth) = options.max_depth {
                if new_depth > max_depth {
                    truncated = true;
                    continue;
                }
            }
            if index.len() >= options.max_states {
                truncated = true;
                continue;
            }

            let canonical_literals = canonicalise(&predecessor_literals, &infer_var_types(&predecessor_literals, domain)).literals;
            let new_id = NodeId(nodes.len());
            nodes.push(AbstractState {
                literals: canonical_literals,
                depth: new_depth,
            });
            index.insert(key, new_id);
            edges.push(GraphEdge {
                predecessor: new_id,
                successor: current_id,
                schema: record.schema,
                substitution: record.substitution,
                target: record.target,
            });
            queue.push_back(new_id);
        }
    }

    StateGraph {
        root: root_id,
        nodes,
        edges,
        truncated,
    }
}

fn canonical_key(literals: &[Literal], domain: &Domain) -> String {
    canonicalise(literals, &infer_var_types(literals, domain)).key()
}
