//! Lifted mutex patterns (§4.2): pairs of predicate templates that can
//! never simultaneously hold, derived once from the domain's action
//! schemas without grounding, then used by `regress` and `goalgraph` to
//! prune abstract states that violate a domain invariant.

mod check;
mod pattern;
mod synth;

pub use check::{is_mutex_free, violating_pair};
pub use pattern::MutexPattern;
pub use synth::synthesize;
