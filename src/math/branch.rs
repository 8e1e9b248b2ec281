//! Branching absolute value.
//!
//! Negates when the sign is set. `i64::MIN` has no positive counterpart, so
//! the negation wraps and the input comes back unchanged.

#[inline(always)]
pub fn with_branch(n: i64) -> i64 {
    if n < 0 { n.wrapping_neg() } else { n }
}
