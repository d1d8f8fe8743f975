//! Literal algebra: the canonical representation of lifted literals,
//! substitution application, most-general unification, and
//! alpha-renaming to canonical variable order (§4.1).

mod canonical;
mod error;
mod mgu;

pub use canonical::{canonicalise, invert, lift_constants, rename, rename_with_constants, Canonical};
pub use error::{InternalInvariant, UnifyFail};
pub use mgu::{apply, mgu, VarTypes};
