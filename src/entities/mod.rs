pub mod nonce;
pub mod nonce_bitmap;
pub mod nonce_bitmap_provider;

pub use nonce::NonceIndex;
pub use nonce_bitmap::NonceBitmap;
pub use nonce_bitmap_provider::NonceBitmapProvider;
