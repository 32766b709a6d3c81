//! ## Nonce Bitmap
//! [`NonceBitmap`] tracks consumed nonces in a plain hashmap, for callers
//! whose store is reached by one writer at a time.

use crate::prelude::*;
use alloy_primitives::{map::HashMap, Address, U256};
use derive_more::{Deref, From};

/// A sparse `(owner, word) → bitmap` store without interior synchronization.
///
/// Suited to single-writer embeddings (state replayed from a serialized
/// ledger, or a store behind the caller's own lock) where external ordering
/// already makes the read-modify-write in [`Self::revoke`] atomic. For a
/// store shared across threads use
/// [`UnorderedNonceRegistry`](crate::registry::UnorderedNonceRegistry).
///
/// Word slots materialize lazily: an untouched `(owner, word)` pair reads as
/// zero and costs nothing. `Deref` exposes the underlying map read-only, so
/// consumption stays monotonic; `From` admits a previously captured snapshot.
#[derive(Clone, Debug, Default, Deref, From)]
pub struct NonceBitmap<I = U256>(HashMap<(Address, I), U256>);

impl<I: NonceIndex> NonceBitmap<I> {
    /// Creates an empty store; every slot is logically zero.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::default())
    }

    /// Marks `nonce` as consumed for `owner`.
    ///
    /// Fails with [`Error::NonceAlreadyUsed`], leaving the slot untouched, if
    /// that nonce was consumed before. Consumption is permanent: no operation
    /// clears a bit for the lifetime of the store.
    #[inline]
    pub fn revoke(&mut self, owner: Address, nonce: I) -> Result<(), Error> {
        let (word, bit) = nonce.position();
        let mask = bit_mask(bit);
        let slot = self.0.entry((owner, word)).or_insert(U256::ZERO);
        if *slot & mask != U256::ZERO {
            return Err(Error::NonceAlreadyUsed);
        }
        *slot |= mask;
        Ok(())
    }
}

impl<I: NonceIndex> NonceBitmapProvider for NonceBitmap<I> {
    type Index = I;

    #[inline]
    fn get_word(&self, owner: Address, word: I) -> Result<U256, Error> {
        Ok(self.0.get(&(owner, word)).copied().unwrap_or(U256::ZERO))
    }
}
