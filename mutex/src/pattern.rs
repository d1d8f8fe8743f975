use ltlf_domain::Literal;

/// A lifted mutex pattern (§3 `MutexPattern`): two predicate templates
/// (name + arity) plus a set of argument positions that must unify
/// (`shared`) and a set that must not (`different`), such that any two
/// ground atoms matching the templates under those constraints cannot
/// both be true in any reachable state.
///
/// `different` is never empty: a pattern with no differing position
/// would claim the two templates are globally incompatible regardless of
/// arguments, which the synthesiser never proposes (see
/// [`crate::synthesize`]).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MutexPattern {
    pub pred_a: String,
    pub arity_a: usize,
    pub pred_b: String,
    pub arity_b: usize,
    /// Argument position pairs `(position in a, position in b)` whose
    /// terms must unify for the pattern to match.
    pub shared: Vec<(usize, usize)>,
    /// Argument position pairs that must *not* unify for the pattern to
    /// match (§4.2: "cannot simultaneously hold ... with x≠y").
    pub different: Vec<(usize, usize)>,
}

impl MutexPattern {
    /// True iff `a` could be the first template of this pattern and `b`
    /// the second (predicate name and arity match). The pattern's
    /// position pairs are always expressed a-then-b; a self-pattern
    /// (`pred_a == pred_b`) matches either literal in either role.
    pub fn shape_matches(&self, a: &Literal, b: &Literal) -> bool {
        a.is_positive()
            && b.is_positive()
            && a.predicate == self.pred_a
            && a.arity() == self.arity_a
            && b.predicate == self.pred_b
            && b.arity() == self.arity_b
    }

    /// Every position referenced by `shared`/`different` that the caller
    /// can rely on being in-bounds for literals matching this pattern.
    pub fn max_position_a(&self) -> usize {
        self.shared
            .iter()
            .map(|(i, _)| *i)
            .chain(self.different.iter().map(|(i, _)| *i))
            .max()
            .unwrap_or(0)
    }

    pub fn max_position_b(&self) -> usize {
        self.shared
            .iter()
            .map(|(_, j)| *j)
            .chain(self.different.iter().map(|(_, j)| *j))
            .max()
            .unwrap_or(0)
    }
}

impl std::fmt::Display for MutexPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} \u{2295} {}/{} (shared={:?}, diff={:?})",
            self.pred_a, self.arity_a, self.pred_b, self.arity_b, self.shared, self.different
        )
    }
}
