use thiserror::Error;

/// Unification failure. Per §4.6 of the specification this is *not* an
/// error condition at the pipeline level — it is the normal "these two
/// literals don't unify" signal, reflected by `regress` simply producing
/// no successor for this (literal, schema) pair. It is only an `Error` in
/// the Rust sense (implements `std::error::Error` so `?` works inside
/// functions that also need to report genuine failures).
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum UnifyFail {
    #[error("literals do not share predicate name, arity or polarity")]
    ShapeMismatch,
    #[error("distinct constants `{0}` and `{1}` cannot unify")]
    ConstantClash(String, String),
    #[error("variable and constant have incompatible types")]
    TypeMismatch,
    #[error("binding would create a cyclic substitution")]
    OccursCheck,
}

/// A canonical-round-trip or cache-consistency failure: the kind of bug
/// that §7 calls `InternalInvariant` and says must abort rather than
/// produce a silently wrong graph.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum InternalInvariant {
    #[error("canonicalise(canonicalise(S)) != canonicalise(S) for state {0:?}")]
    CanonicalNotIdempotent(Vec<String>),
    #[error("cache returned a graph for key `{expected}` that does not match recomputation under key `{actual}`")]
    CacheKeyMismatch { expected: String, actual: String },
}
