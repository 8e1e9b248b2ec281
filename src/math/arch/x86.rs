/// `sar` smears the sign bit into a mask; `xor` then `sub` apply it.
#[inline(always)]
pub(crate) fn abs_hw(n: i64) -> i64 {
    let out: i64;
    unsafe {
        core::arch::asm!(
            "mov {y}, {n}",
            "sar {y}, 63",
            "xor {n}, {y}",
            "sub {n}, {y}",
            n = inout(reg) n => out,
            y = out(reg) _,
            options(pure, nomem, nostack)
        );
    }
    out
}
