mod bit_math;
pub use bit_math::*;
