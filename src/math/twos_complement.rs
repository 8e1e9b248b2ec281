//! Branch-free absolute value (Hacker's Delight, section 2-4).
//!
//! `n >> 63` is all ones for negative `n` and zero otherwise. XOR with the
//! mask flips the bits of a negative input and subtracting the mask adds one
//! back, which is two's-complement negation. `i64::MIN` maps to itself.

#[inline(always)]
pub fn with_twos_complement(n: i64) -> i64 {
    let y = n >> 63;
    (n ^ y).wrapping_sub(y)
}
