//! Tracing spans and a small stopwatch shared by `regress`, `goalgraph` and
//! `driver`, so instrumentation is written once rather than duplicated per
//! crate. The core itself never chooses a subscriber; a host wires one up
//! (see `demos/blocksworld_demo`).

use std::time::Instant;

/// Span entered for one `regress`/`regress-state` call. Kept as a function
/// rather than a macro so call sites stay readable.
pub fn regression_span(literal: &str, schema: &str) -> tracing::Span {
    tracing::debug_span!("regress", literal = literal, schema = schema)
}

/// Span entered for one goal-graph construction (a single cache miss).
pub fn construction_span(goal_key: &str) -> tracing::Span {
    tracing::info_span!("construct_goal_graph", goal = goal_key)
}

/// Span entered once per DFA transition processed by the driver.
pub fn transition_span(from: &str, to: &str) -> tracing::Span {
    tracing::info_span!("dfa_transition", from = from, to = to)
}

/// Wall-clock stopwatch used to fill in `CacheEntryStats::construction_micros`.
/// A thin wrapper so call sites read `Stopwatch::start()` / `.elapsed_micros()`
/// instead of reaching for `std::time::Instant` directly everywhere.
pub struct Stopwatch(Instant);

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch(Instant::now())
    }

    pub fn elapsed_micros(&self) -> u64 {
        self.0.elapsed().as_micros() as u64
    }
}
