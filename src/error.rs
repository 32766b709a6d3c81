#[cfg(doc)]
use crate::prelude::*;

/// Errors produced by the nonce stores in this crate.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Thrown when a revocation targets a nonce whose bit is already set for
    /// that owner, e.g. [`NonceBitmap::revoke`] called twice with the same
    /// arguments. The rejected call leaves the bitmap untouched.
    #[cfg_attr(feature = "std", error("Nonce already used"))]
    NonceAlreadyUsed,
}
