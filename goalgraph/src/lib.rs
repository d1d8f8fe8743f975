//! Goal-graph constructor with a variable-level cache (§4.4): builds a
//! finite graph of abstract states reachable backward from a lifted
//! goal, memoised by canonical goal skeleton so that `on(a,b)` and
//! `on(b,a)` share one exploration.

mod cache;
mod construct;
mod graph;

pub use cache::{CacheEntryStats, GoalCache, Lookup};
pub use construct::{build_graph, ConstructOptions};
pub use graph::{AbstractState, GraphEdge, NodeId, StateGraph};
