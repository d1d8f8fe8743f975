use ltlf_dfa::{GroundingMapError, GuardParseError};
use ltlf_domain::DomainStructureError;
use thiserror::Error;

/// The driver's own error taxonomy (§7): everything here is fatal and
/// propagates to the caller with enough context to localise it.
/// `Unsat`/`Truncated` are deliberately *not* variants — they are
/// reflected as ordinary values (absence of an edge, a `truncated`
/// flag) rather than errors, per §4.6.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Domain(#[from] DomainStructureError),

    #[error(transparent)]
    Grounding(#[from] GroundingMapError),

    #[error(transparent)]
    Guard(#[from] GuardParseError),
}
