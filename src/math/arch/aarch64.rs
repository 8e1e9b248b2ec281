#[inline(always)]
pub(crate) fn abs_hw(n: i64) -> i64 {
    let out: i64;
    unsafe {
        core::arch::asm!(
            "asr {y}, {n}, #63",
            "eor {out}, {n}, {y}",
            "sub {out}, {out}, {y}",
            n = in(reg) n,
            y = out(reg) _,
            out = lateout(reg) out,
            options(pure, nomem, nostack)
        );
    }
    out
}
