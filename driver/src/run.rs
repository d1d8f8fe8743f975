use crate::error::DriverError;
use crate::transition::{DisjunctResult, TransitionOutcome};
use ltlf_dfa::{to_dnf, Dfa, GroundingMap, ObjectTable};
use ltlf_domain::{Domain, Literal};
use ltlf_goalgraph::GoalCache;
use ltlf_mutex::MutexPattern;

/// Resolves one DNF conjunction (a set of possibly-negated atom names)
/// to a lifted goal literal set via the grounding map (§4.5 step 2).
fn resolve_conjunction(conjunction: &[(String, bool)], grounding: &GroundingMap, objects: &ObjectTable) -> Result<Vec<Literal>, DriverError> {
    let mut goal = Vec::with_capacity(conjunction.len());
    for (atom, positive) in conjunction {
        goal.push(grounding.resolve(atom, *positive, objects)?);
    }
    Ok(goal)
}

/// Asserts the canonical-idempotence invariant (§7 `InternalInvariant`,
/// §8 invariant 1) on a freshly resolved goal before handing it to the
/// cache. A failure here means a bug in `unify::canonicalise`, not a
/// planning failure, so it aborts rather than propagating as a
/// `DriverError`.
fn assert_canonical_idempotent(goal: &[Literal], domain: &Domain) {
    let var_types = ltlf_regress::infer_var_types(goal, domain);
    let once = ltlf_unify::canonicalise(goal, &var_types);
    let twice = ltlf_unify::canonicalise(&once.literals, &once.var_types);
    if once.literals != twice.literals {
        let invariant = ltlf_unify::InternalInvariant::CanonicalNotIdempotent(once.literals.iter().map(|l| l.to_string()).collect());
        panic!("internal invariant violated: {invariant}");
    }
}

/// Drives every transition of `dfa` end to end (§4.5): normalises each
/// guard to DNF, resolves every disjunct through the grounding map,
/// invokes the goal-graph constructor (via the shared `cache`) for
/// each, and attaches the resulting graphs to the transition. Mutex
/// patterns are synthesised once from `domain` and reused across every
/// transition and disjunct, matching §5 ("computed once at
/// initialisation and thereafter read-only").
pub fn run(domain: &Domain, dfa: &Dfa, grounding: &GroundingMap, objects: &ObjectTable, cache: &mut GoalCache) -> Result<Vec<TransitionOutcome>, DriverError> {
    let patterns = ltlf_mutex::synthesize(domain);
    run_with_patterns(domain, dfa, grounding, objects, cache, &patterns)
}

/// As [`run`], but with a caller-supplied mutex pattern set — useful
/// for tests and for hosts that want to synthesise patterns once and
/// drive several DFAs against the same domain.
pub fn run_with_patterns(
    domain: &Domain,
    dfa: &Dfa,
    grounding: &GroundingMap,
    objects: &ObjectTable,
    cache: &mut GoalCache,
    patterns: &[MutexPattern],
) -> Result<Vec<TransitionOutcome>, DriverError> {
    let mut outcomes = Vec::with_capacity(dfa.transitions.len());

    for transition in &dfa.transitions {
        let _span = ltlf_instrument::transition_span(&transition.from, &transition.to).entered();
        let dnf = to_dnf(&transition.guard);

        let mut disjuncts = Vec::with_capacity(dnf.len());
        for conjunction in &dnf {
            let goal = resolve_conjunction(conjunction, grounding, objects)?;
            assert_canonical_idempotent(&goal, domain);

            let lookup = cache.get_or_construct(&goal, domain, patterns, None);
            disjuncts.push(DisjunctResult {
                goal,
                graph: lookup.graph,
                cache_hit: lookup.hit,
            });
        }

        let unreachable_from_arbitrary_state = disjuncts.iter().any(|d| d.graph.is_root_only() && !d.goal.is_empty());

        outcomes.push(TransitionOutcome {
            from: transition.from.clone(),
            to: transition.to.clone(),
            disjuncts,
            unreachable_from_arbitrary_state,
        });
    }

    Ok(outcomes)
}

/// The driver's public, host-facing entry point (SPEC_FULL §1 ADDED
/// ambient scope): composes [`DriverError`] under `anyhow`, attaching
/// enough context to localise a fatal failure, the way a host program
/// consumes the core rather than matching on its typed error enum.
pub fn run_reporting(domain: &Domain, dfa: &Dfa, grounding: &GroundingMap, objects: &ObjectTable, cache: &mut GoalCache) -> anyhow::Result<Vec<TransitionOutcome>> {
    run(domain, dfa, grounding, objects, cache).map_err(|err| anyhow::Error::new(err).context("driving DFA transitions"))
}
