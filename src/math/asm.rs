//! The two's-complement trick as inline assembly.
//!
//! Uses the kernels in `arch` on x86_64 and aarch64. Other targets, the
//! `portable` feature and the Kani verifier get
//! [`with_twos_complement`](super::with_twos_complement),
//! which computes the same bits.

#[cfg(not(all(
    any(target_arch = "x86_64", target_arch = "aarch64"),
    not(feature = "portable"),
    not(kani)
)))]
use super::with_twos_complement;

#[cfg(all(
    any(target_arch = "x86_64", target_arch = "aarch64"),
    not(feature = "portable"),
    not(kani)
))]
#[inline(always)]
pub fn with_asm(n: i64) -> i64 {
    super::arch::abs_hw(n)
}

#[cfg(not(all(
    any(target_arch = "x86_64", target_arch = "aarch64"),
    not(feature = "portable"),
    not(kani)
)))]
#[inline(always)]
pub fn with_asm(n: i64) -> i64 {
    with_twos_complement(n)
}
