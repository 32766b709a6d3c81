//! # unordered-nonce
//!
//! A Rust implementation of the unordered-nonce replay-protection scheme:
//! owner-chosen 256-bit nonces, tracked one bit apiece in sparse 256-bit
//! bitmap words, with at-most-once consumption semantics.
//!
//! ## Features
//!
//! - Nonces are free-form rather than sequential: an owner may consume any
//!   of the 2^256 values in any order, at O(1) cost per nonce, instead of
//!   being serialized through an incrementing counter
//! - Usage of [alloy-rs](https://github.com/alloy-rs) types
//! - A thread-safe [`registry`](./src/registry.rs) whose check-and-set is
//!   linearizable per bitmap slot, and a single-writer
//!   [`NonceBitmap`](./src/entities/nonce_bitmap.rs) for externally
//!   serialized stores, sharing one query seam
//!   ([`NonceBitmapProvider`](./src/entities/nonce_bitmap_provider.rs))
//! - `no_std` core; the `std` feature (on by default) unlocks the concurrent
//!   registry

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod entities;
pub mod error;
#[cfg(feature = "std")]
pub mod registry;
pub mod utils;


pub mod prelude {
    pub use crate::{entities::*, error::*, utils::*};

    #[cfg(feature = "std")]
    pub use crate::registry::*;
}
