//! ## Nonce Bitmap Provider
//! The [`NonceBitmapProvider`] trait provides nonce queries for any store that
//! implements [`NonceBitmapProvider::get_word`].

use crate::prelude::*;
use alloy_primitives::{Address, U256};

/// Read access to the per-owner nonce consumption bitmaps.
///
/// Bit `b` of the word at index `w` is set iff the nonce `w * 256 + b` has
/// been consumed by that owner. In-memory stores never fail these calls; the
/// `Result` is the seam through which an externally backed store would
/// surface its transport errors.
pub trait NonceBitmapProvider {
    type Index: NonceIndex;

    /// Get the consumption bitmap of `owner` at a specific word index, zero
    /// for a slot that was never touched.
    fn get_word(&self, owner: Address, word: Self::Index) -> Result<U256, Error>;

    /// Whether `nonce` has already been consumed for `owner`.
    #[inline]
    fn is_nonce_used(&self, owner: Address, nonce: Self::Index) -> Result<bool, Error> {
        let (word, bit) = nonce.position();
        Ok(is_bit_set(self.get_word(owner, word)?, bit))
    }

    /// The lowest unconsumed nonce within one word of `owner`'s bitmap, or
    /// `None` once all 256 nonces of that word are used. Callers picking a
    /// fresh nonce to sign with can scan a word slot without walking the
    /// 256-bit space themselves.
    #[inline]
    fn next_unused_nonce_within_one_word(
        &self,
        owner: Address,
        word: Self::Index,
    ) -> Result<Option<Self::Index>, Error> {
        let bitmap = self.get_word(owner, word)?;
        Ok(lowest_unset_bit(bitmap).map(|bit| Self::Index::from_position(word, bit)))
    }
}
