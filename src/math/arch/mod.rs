// Architecture-specific kernels (inline assembly abs).

#[cfg(target_arch = "x86_64")]
mod x86;
#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(target_arch = "x86_64")]
pub(crate) use x86::abs_hw;

#[cfg(target_arch = "aarch64")]
pub(crate) use aarch64::abs_hw;
