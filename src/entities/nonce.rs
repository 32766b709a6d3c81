#[cfg(doc)]
use crate::prelude::*;

use alloy_primitives::Uint;
use core::{
    fmt::Debug,
    hash::Hash,
    ops::{BitAnd, BitOr, Shl, Shr},
};

/// The trait for nonce values used across [`NonceBitmap`], the
/// [`NonceBitmapProvider`] seam, and the registry.
///
/// A nonce is an owner-chosen unsigned integer; its consumption flag lives at
/// bit `nonce & 0xff` of the 256-bit word indexed by `nonce >> 8`.
///
/// Implemented for [`u64`] and [`Uint`], with [`U256`](alloy_primitives::U256)
/// covering the full 256-bit nonce space.
pub trait NonceIndex:
    Copy
    + Debug
    + Default
    + Hash
    + Ord
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shl<u8, Output = Self>
    + Shr<u8, Output = Self>
    + TryFrom<u8, Error: Debug>
    + TryInto<u8, Error: Debug>
    + Send
    + Sync
{
    const ZERO: Self;
    const ONE: Self;

    /// Splits a nonce into the index of its bitmap word (`self >> 8`) and its
    /// bit position within that word (`self & 0xff`).
    #[inline]
    fn position(self) -> (Self, u8) {
        (
            self >> 8,
            (self & Self::try_from(0xff).unwrap()).try_into().unwrap(),
        )
    }

    /// Recomposes the nonce tracked at bit `bit` of the word at `word`,
    /// inverting [`Self::position`].
    #[inline]
    fn from_position(word: Self, bit: u8) -> Self {
        (word << 8) | Self::try_from(bit).unwrap()
    }
}

impl NonceIndex for u64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

impl<const BITS: usize, const LIMBS: usize> NonceIndex for Uint<BITS, LIMBS> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
}
