use crate::pattern::MutexPattern;
use ltlf_domain::Literal;

/// Checks whether `literal_a`/`literal_b` violate `pattern`: the shared
/// positions must unify (same term) and the differing positions must
/// not (different term). Two distinct variables are treated as
/// possibly-distinct and therefore satisfy a differing-position
/// constraint — the sound direction per §4.2, since two syntactically
/// distinct variables in one abstract state are never implicitly
/// unified by anything upstream of this check.
fn pair_violates(literal_a: &Literal, literal_b: &Literal, pattern: &MutexPattern) -> bool {
    if !pattern.shape_matches(literal_a, literal_b) {
        return false;
    }
    if literal_a.arity() <= pattern.max_position_a() || literal_b.arity() <= pattern.max_position_b() {
        return false;
    }
    let shared_ok = pattern
        .shared
        .iter()
        .all(|&(i, j)| literal_a.args[i] == literal_b.args[j]);
    let diff_ok = pattern
        .different
        .iter()
        .all(|&(i, j)| literal_a.args[i] != literal_b.args[j]);
    shared_ok && diff_ok
}

/// Finds the first ordered pair of positive literals in `state` that
/// violates some pattern in `patterns` (§4.2 `Check-mutex`). Returns the
/// indices (into `state`) and the violated pattern, or `None` if the
/// state is mutex-free. Ordered-pair iteration (i, j) with i != j
/// matches the spec's "every ordered pair of positive literals"; a
/// self-pattern (`pred_a == pred_b`) is checked against both orderings
/// of the same two literals, which is exactly what ordered iteration
/// already does.
pub fn violating_pair<'a>(state: &'a [Literal], patterns: &'a [MutexPattern]) -> Option<(usize, usize, &'a MutexPattern)> {
    for (i, a) in state.iter().enumerate() {
        if !a.is_positive() {
            continue;
        }
        for (j, b) in state.iter().enumerate() {
            if i == j || !b.is_positive() {
                continue;
            }
            for pattern in patterns {
                if pair_violates(a, b, pattern) {
                    return Some((i, j, pattern));
                }
            }
        }
    }
    None
}

/// `true` iff no pattern is violated. The common-case call from
/// `regress`/`goalgraph`, which only need the boolean and not the
/// witness.
pub fn is_mutex_free(state: &[Literal], patterns: &[MutexPattern]) -> bool {
    violating_pair(state, patterns).is_none()
}
