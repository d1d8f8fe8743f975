//! Backward regression (§4.3): given a goal literal and an action
//! schema, compute the lifted predecessor state(s) from which one
//! application of the schema achieves that literal.

mod context;
mod engine;
mod multi;
mod rename;

pub use context::{infer_var_types, next_fresh_var};
pub use engine::{regress, regress_in_context, regress_state, RegressionRecord};
pub use multi::regress_state_multi;
