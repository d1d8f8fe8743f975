use thiserror::Error;

/// Fatal errors raised while building or validating a [`crate::Domain`].
/// Per §7 of the specification these propagate to the caller with enough
/// context (predicate/schema name) to localise the problem; nothing here
/// is retried, since domain construction is a one-shot, deterministic
/// step with no I/O of its own.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum DomainStructureError {
    #[error("action `{action}` references unknown predicate `{predicate}`")]
    UnknownPredicate { action: String, predicate: String },

    #[error("action `{action}` uses predicate `{predicate}` with arity {found}, expected {expected}")]
    ArityMismatch {
        action: String,
        predicate: String,
        expected: usize,
        found: usize,
    },

    #[error("action `{action}` parameter `{var}` has type `{param_type}` but is used at a position of type `{required_type}`")]
    IllTypedParameter {
        action: String,
        var: String,
        param_type: String,
        required_type: String,
    },

    #[error("action `{action}` precondition/effect references undeclared variable `{var}`")]
    UndeclaredVariable { action: String, var: String },

    #[error("inequality constraint in action `{action}` relates the same variable `{var}` to itself")]
    TrivialInequality { action: String, var: String },

    #[error("action `{action}` effect adds and deletes the same literal `{literal}`")]
    OverlappingEffect { action: String, literal: String },
}
