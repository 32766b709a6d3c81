//! ## Unordered Nonce Registry
//! [`UnorderedNonceRegistry`] is the shared store that tracks, per owner,
//! which owner-chosen nonces have been consumed, and rejects reuse.

use crate::prelude::*;
use alloy_primitives::{Address, U256};
use dashmap::DashMap;
use log::{debug, trace};

/// A concurrent `(owner, word) → bitmap` store enforcing at-most-once
/// consumption of owner-chosen nonces.
///
/// Nonces are free-form rather than sequential: an owner may consume any of
/// the 2^256 values in any order, and tracking costs one bit per consumed
/// nonce, grouped 256 to a word slot. Word slots materialize lazily, so an
/// untouched `(owner, word)` pair reads as zero and costs nothing.
///
/// The registry is one stateful instance shared by reference among callers
/// (typically behind an `Arc`). Every read-modify-write in [`Self::revoke`]
/// happens under the slot's entry guard, so calls racing on one slot
/// serialize; there is no blocking beyond that slot-level contention.
#[derive(Debug)]
pub struct UnorderedNonceRegistry<I: NonceIndex = U256> {
    bitmaps: DashMap<(Address, I), U256>,
}

impl<I: NonceIndex> UnorderedNonceRegistry<I> {
    /// Creates an empty registry; every slot is logically zero.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            bitmaps: DashMap::new(),
        }
    }

    /// Creates an empty registry sized for roughly `capacity` live word
    /// slots.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bitmaps: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the consumption bitmap of `owner` at `word`, zero for a slot
    /// never revoked into. Side-effect free and infallible.
    #[inline]
    pub fn get_word(&self, owner: Address, word: I) -> U256 {
        self.bitmaps
            .get(&(owner, word))
            .map(|slot| *slot)
            .unwrap_or(U256::ZERO)
    }

    /// Marks `nonce` as consumed for `owner`, the sole mutating operation.
    ///
    /// Fails with [`Error::NonceAlreadyUsed`], without writing, when the
    /// nonce was consumed before. The check-and-set runs under the slot's
    /// entry guard: of two calls racing on the same bit exactly one
    /// succeeds, and concurrent writes to distinct bits of one word are
    /// never lost. Consumption is permanent for the lifetime of the
    /// registry.
    pub fn revoke(&self, owner: Address, nonce: I) -> Result<(), Error> {
        let (word, bit) = nonce.position();
        let mask = bit_mask(bit);
        let mut slot = self.bitmaps.entry((owner, word)).or_insert(U256::ZERO);
        if *slot & mask != U256::ZERO {
            debug!(
                "Rejecting reused nonce for {} at word {:?} bit {}",
                owner, word, bit
            );
            return Err(Error::NonceAlreadyUsed);
        }
        *slot |= mask;
        trace!("Revoked nonce for {} at word {:?} bit {}", owner, word, bit);
        Ok(())
    }
}

impl<I: NonceIndex> Default for UnorderedNonceRegistry<I> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I: NonceIndex> NonceBitmapProvider for UnorderedNonceRegistry<I> {
    type Index = I;

    #[inline]
    fn get_word(&self, owner: Address, word: I) -> Result<U256, Error> {
        // the inherent read, not a recursive call
        Ok(self.get_word(owner, word))
    }
}
