//! Named table of the absolute-value variants.
//!
//! Tests and benchmarks label their groups from here instead of recovering a
//! name from a function pointer.

use crate::math::{with_asm, with_branch, with_std_lib, with_twos_complement};

/// An absolute-value function.
pub type AbsFn = fn(i64) -> i64;

#[derive(Clone, Copy, Debug)]
pub struct Variant {
    pub name: &'static str,
    pub func: AbsFn,
    /// False when the variant is known to lose precision on large inputs.
    pub exact: bool,
}

impl Variant {
    #[inline(always)]
    pub fn call(&self, n: i64) -> i64 {
        (self.func)(n)
    }
}

pub static VARIANTS: [Variant; 4] = [
    Variant {
        name: "with_branch",
        func: with_branch,
        exact: true,
    },
    Variant {
        name: "with_std_lib",
        func: with_std_lib,
        exact: false,
    },
    Variant {
        name: "with_twos_complement",
        func: with_twos_complement,
        exact: true,
    },
    Variant {
        name: "with_asm",
        func: with_asm,
        exact: true,
    },
];

/// Looks a variant up by its exact name.
pub fn variant(name: &str) -> Option<&'static Variant> {
    VARIANTS.iter().find(|v| v.name == name)
}
