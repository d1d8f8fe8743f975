//! DFA model, guard grammar and the grounding map between DFA atoms and
//! lifted literals (§4.5): the pieces the driver needs to turn one
//! guarded transition into a set of lifted goals.

mod error;
mod grounding;
mod guard;
mod model;

pub use error::{GroundingMapError, GuardParseError};
pub use grounding::{GroundingMap, ObjectTable};
pub use guard::{parse_guard, to_dnf, Conjunction, GuardExpr};
pub use model::{Dfa, Transition};
