#![no_std]

#[cfg(test)]
extern crate std;

pub mod harness;
pub mod math;
pub mod variants;

pub use harness::{FIXTURES, MAX_INT, MIN_INT, Mismatch, check, check_all};
pub use math::{
    F64_EXACT_LIMIT, HAS_ASM, with_asm, with_branch, with_std_lib, with_twos_complement,
};
pub use variants::{AbsFn, VARIANTS, Variant, variant};

// Run with `cargo kani`.
#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_branch_matches_twos_complement() {
        let n: i64 = kani::any();
        assert_eq!(with_branch(n), with_twos_complement(n));
    }

    #[kani::proof]
    fn verify_non_negative() {
        let n: i64 = kani::any();
        kani::assume(n != i64::MIN);
        assert!(with_branch(n) >= 0);
        assert!(with_twos_complement(n) >= 0);
    }

    #[kani::proof]
    fn verify_idempotent() {
        let n: i64 = kani::any();
        let once = with_twos_complement(n);
        assert_eq!(with_twos_complement(once), once);
    }

    #[kani::proof]
    fn verify_std_lib_exact_within_limit() {
        let n: i64 = kani::any();
        kani::assume(n >= -F64_EXACT_LIMIT && n <= F64_EXACT_LIMIT);
        assert_eq!(with_std_lib(n), with_twos_complement(n));
    }
}
