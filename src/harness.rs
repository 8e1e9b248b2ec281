//! Fixture table and checker shared by the tests and benchmarks.
//!
//! `i64::MIN` is deliberately absent from [`FIXTURES`]: it has no positive
//! counterpart, and the boundary is tested on its own.

use core::fmt;

use crate::variants::{VARIANTS, Variant};

pub const MAX_INT: i64 = i64::MAX;
pub const MIN_INT: i64 = i64::MIN;

/// `(input, expected)` pairs.
pub const FIXTURES: [(i64, i64); 8] = [
    (MIN_INT + 1, MAX_INT),
    (MIN_INT + 2, MAX_INT - 1),
    (-1, 1),
    (0, 0),
    (1, 1),
    (2, 2),
    (MAX_INT - 1, MAX_INT - 1),
    (MAX_INT, MAX_INT),
];

/// First fixture a variant got wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    pub variant: &'static str,
    pub input: i64,
    pub expected: i64,
    pub actual: i64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}({})", self.variant, self.input)?;
        writeln!(f, "\tinput:\t\t{:064b} ({})", self.input as u64, self.input)?;
        writeln!(
            f,
            "\texpected:\t{:064b} ({})",
            self.expected as u64, self.expected
        )?;
        write!(f, "\tactual:\t\t{:064b} ({})", self.actual as u64, self.actual)
    }
}

impl core::error::Error for Mismatch {}

/// Runs `variant` over [`FIXTURES`] in order.
pub fn check(variant: &Variant) -> Result<(), Mismatch> {
    for &(input, expected) in &FIXTURES {
        let actual = variant.call(input);
        if actual != expected {
            return Err(Mismatch {
                variant: variant.name,
                input,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

pub fn check_all() -> impl Iterator<Item = (&'static Variant, Result<(), Mismatch>)> {
    VARIANTS.iter().map(|v| (v, check(v)))
}
