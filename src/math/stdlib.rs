//! Absolute value through `f64::abs`.
//!
//! Round-trips the input through an `f64`, so only magnitudes up to
//! [`F64_EXACT_LIMIT`] survive exactly. Above that the result is rounded to
//! the nearest representable double, and anything that rounds to 2^63
//! (including `i64::MIN`) saturates to `i64::MAX` on the way back.

/// Largest magnitude below which every integer is exact in an `f64` (2^53).
pub const F64_EXACT_LIMIT: i64 = 1 << 53;

#[inline(always)]
pub fn with_std_lib(n: i64) -> i64 {
    (n as f64).abs() as i64
}
