use crate::construct::{build_graph, ConstructOptions};
use crate::graph::StateGraph;
use ltlf_domain::{Constant, Domain, Literal, Var};
use ltlf_mutex::MutexPattern;
use ltlf_regress::infer_var_types;
use ltlf_unify::{canonicalise, invert, lift_constants};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// Search-bound defaults, overridable per call but otherwise read from
/// the environment the same way the rest of the solver's tuning knobs
/// are (SPEC_FULL §1 ADDED ambient scope).
static MAX_STATES: ltlf_env_param::EnvParam<usize> = ltlf_env_param::EnvParam::new("LTLF_GOALGRAPH_MAX_STATES", "10000");
static MAX_DEPTH: ltlf_env_param::EnvParam<usize> = ltlf_env_param::EnvParam::new("LTLF_GOALGRAPH_MAX_DEPTH", "64");

/// Per-entry diagnostics (§6 "A `GoalCache` dump for diagnostics").
/// Serialisable so a host can persist or transmit construction
/// statistics without the core crate depending on any particular
/// sink — the demonstration binary is the one that calls
/// `serde_json::to_string` on a [`GoalCache::dump`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct CacheEntryStats {
    pub nodes: usize,
    pub edges: usize,
    pub depth: usize,
    pub truncated: bool,
    pub construction_micros: u64,
}

/// The result of one [`GoalCache::get_or_construct`] call: the graph
/// (freshly built, or reused from a previous call with a
/// variable-renamed but structurally identical goal), the mapping from
/// the graph's canonical variables back into the caller's own variable
/// namespace, and whether this call was a cache hit.
pub struct Lookup {
    pub graph: Rc<StateGraph>,
    pub canonical_to_caller: BTreeMap<Var, Var>,
    /// Ground objects lifted out of the goal before keying (§4.4), keyed
    /// by the canonical variable standing in for each — pass to
    /// `ltlf_unify::rename_with_constants` together with
    /// `canonical_to_caller` to restore a graph state to the caller's
    /// own ground/variable mix.
    pub lifted_constants: BTreeMap<Var, Constant>,
    pub hit: bool,
}

/// The variable-level goal cache (§4.4, §5): single-writer,
/// single-reader during one driver run, keyed by canonical goal rather
/// than by the DFA guard it came from, so `on(a,b)` and `on(b,a)` share
/// one entry. Entries are never evicted or mutated once inserted (§4.4
/// "Cache semantics").
#[derive(Default)]
pub struct GoalCache {
    graphs: HashMap<String, Rc<StateGraph>>,
    stats: HashMap<String, CacheEntryStats>,
}

impl GoalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up or builds the graph for `goal`, per §4.4 step 1: "look up
    /// the canonical key in the goal cache. If present, return the
    /// cached graph (renamed back via the inverse of the canonicalisation
    /// substitution)." Bounds default to the environment-tunable knobs
    /// above unless `options` overrides them.
    pub fn get_or_construct(&mut self, goal: &[Literal], domain: &Domain, patterns: &[MutexPattern], options: Option<ConstructOptions>) -> Lookup {
        let var_types = infer_var_types(goal, domain);
        // Ground objects are abstracted away before keying, not by
        // `canonicalise` itself (which other callers — e.g. a goal graph
        // built directly from a still-ground goal — rely on leaving
        // constants alone), but by this cache's own pre-processing step:
        // `on(a,b)` and `on(b,a)` must land on one entry (§4.4).
        let (lifted_goal, placeholder_constants, lifted_types) = lift_constants(goal, &var_types);
        let canonical = canonicalise(&lifted_goal, &lifted_types);
        let key = canonical.key();
        let canonical_to_caller = invert(&canonical.renaming);
        let lifted_constants: BTreeMap<Var, Constant> = placeholder_constants
            .iter()
            .map(|(placeholder, constant)| (*canonical.renaming.get(placeholder).unwrap_or(placeholder), constant.clone()))
            .collect();

        if let Some(graph) = self.graphs.get(&key) {
            // The stored root is itself already canonical (it was inserted
            // under `canonical.literals` on the miss that built it), so
            // re-canonicalising it must reproduce the same key exactly —
            // a mismatch here means the cache handed back a graph for the
            // wrong goal, the `InternalInvariant` §7 requires aborting on.
            let root_types = infer_var_types(&graph.root_state().literals, domain);
            let root_key = canonicalise(&graph.root_state().literals, &root_types).key();
            if root_key != key {
                let invariant = ltlf_unify::InternalInvariant::CacheKeyMismatch {
                    expected: key,
                    actual: root_key,
                };
                panic!("internal invariant violated: {invariant}");
            }
            return Lookup {
                graph: Rc::clone(graph),
                canonical_to_caller,
                lifted_constants,
                hit: true,
            };
        }

        let options = options.unwrap_or_else(|| ConstructOptions {
            max_states: MAX_STATES.get(),
            max_depth: Some(MAX_DEPTH.get()),
            multi: false,
        });

        let stopwatch = ltlf_instrument::Stopwatch::start();
        let _span = ltlf_instrument::construction_span(&key).entered();
        let graph = build_graph(canonical.literals, domain, patterns, options);
        let construction_micros = stopwatch.elapsed_micros();

        self.stats.insert(
            key.clone(),
            CacheEntryStats {
                nodes: graph.nodes.len(),
                edges: graph.edges.len(),
                depth: graph.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
                truncated: graph.truncated,
                construction_micros,
            },
        );
        let graph = Rc::new(graph);
        self.graphs.insert(key, Rc::clone(&graph));

        Lookup {
            graph,
            canonical_to_caller,
            lifted_constants,
            hit: false,
        }
    }

    /// A `canonical key -> stats` snapshot for diagnostics (§6).
    pub fn dump(&self) -> BTreeMap<String, CacheEntryStats> {
        self.stats.clone().into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}
