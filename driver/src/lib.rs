//! DFA guard driver (§4.5): orchestrates the whole pipeline for one
//! DFA — normalise each transition's guard to DNF, resolve every
//! disjunct to a lifted goal via the grounding map, invoke the
//! goal-graph constructor, and attach the resulting graphs to the
//! transition — plus the plan-library emitter of §2 item 7.

mod emit;
mod error;
mod run;
mod transition;

pub use emit::{GraphPlanEmitter, PlanLibrary, PlanLibraryEmitter, ReactivePlan};
pub use error::DriverError;
pub use run::{run, run_reporting, run_with_patterns};
pub use transition::{DisjunctResult, TransitionOutcome};
