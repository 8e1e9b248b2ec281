//! Absolute value of an `i64`, four ways.
//!
//! Every variant shares the signature `fn(i64) -> i64` and differs only in
//! technique. The exact variants agree on the full domain, including
//! `i64::MIN`, which wraps to itself.

#[cfg(all(not(feature = "portable"), not(kani)))]
mod arch;
mod asm;
mod branch;
mod stdlib;
mod twos_complement;

pub use asm::with_asm;
pub use branch::with_branch;
pub use stdlib::{F64_EXACT_LIMIT, with_std_lib};
pub use twos_complement::with_twos_complement;

/// True when [`with_asm`] runs hand-written assembly rather than the
/// portable fallback.
pub const HAS_ASM: bool = !cfg!(feature = "portable")
    && !cfg!(kani)
    && cfg!(any(target_arch = "x86_64", target_arch = "aarch64"));
