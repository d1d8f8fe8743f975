use thiserror::Error;

/// Fatal errors raised while parsing a DFA guard or resolving an atom
/// through the grounding map (§7). Both propagate to the caller with
/// enough context (the guard text, or the missing atom) to localise the
/// problem; neither is retried, since guard parsing and grounding-map
/// lookup are deterministic, I/O-free steps.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum GuardParseError {
    #[error("unexpected end of guard expression `{guard}`")]
    UnexpectedEnd { guard: String },

    #[error("unexpected token `{found}` in guard expression `{guard}`")]
    UnexpectedToken { guard: String, found: String },

    #[error("unmatched closing parenthesis in guard expression `{guard}`")]
    UnmatchedParen { guard: String },

    #[error("trailing tokens after a complete expression in guard `{guard}`")]
    TrailingTokens { guard: String },
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum GroundingMapError {
    #[error("DFA atom `{atom}` has no grounding map entry")]
    Missing { atom: String },

    #[error("atom identifier `{atom}` is already bound to a different (predicate, arguments) pair")]
    DuplicateAtom { atom: String },

    #[error("predicate instance `{predicate}({args:?})` is already bound to a different atom identifier")]
    DuplicateGrounding { predicate: String, args: Vec<String> },
}
