//! ## Bitmap Word Math
//!
//! Helpers over a 256-bit word used as a set of 256 consumption flags. The
//! scan logic follows the Solidity [BitMath library](https://github.com/uniswap/v3-core/blob/main/contracts/libraries/BitMath.sol),
//! restricted to what a nonce bitmap needs.

use alloy_primitives::{uint, U256};

/// Returns the single-bit mask `1 << bit` selecting one flag within a word.
#[inline]
#[must_use]
pub fn bit_mask(bit: u8) -> U256 {
    uint!(1_U256) << bit
}

/// Returns whether the flag at `bit` is set in `word`.
#[inline]
#[must_use]
pub fn is_bit_set(word: U256, bit: u8) -> bool {
    word.bit(bit as usize)
}

/// Returns the position of the least significant zero flag in `word`, or
/// `None` once all 256 flags are set.
#[inline]
#[must_use]
pub fn lowest_unset_bit(word: U256) -> Option<u8> {
    if word == U256::MAX {
        None
    } else {
        Some((!word).trailing_zeros() as u8)
    }
}
