use criterion::Criterion;
use fastabs::{FIXTURES, VARIANTS};

use bench_util::{
    bench_inputs, configure_criterion, filter_from, gen_inputs, glibc_llabs, has_glibc,
};

const MAX_INPUTS: usize = 10_000;

fn bench_only() -> Option<String> {
    filter_from(
        std::env::var("FASTABS_BENCH_ONLY").ok(),
        std::env::args().skip(1),
    )
}

fn bench_enabled(filter: &Option<String>, name: &str) -> bool {
    match filter {
        Some(filter) => name.contains(filter.as_str()),
        None => true,
    }
}

fn bench_abs(c: &mut Criterion) {
    let filter = bench_only();
    let smoke: Vec<i64> = FIXTURES.iter().map(|&(input, _)| input).collect();
    let common = gen_inputs(MAX_INPUTS, 0x2a2a);

    for (label, inputs) in [("abs/smoke", &smoke), ("abs/common", &common)] {
        let mut group = c.benchmark_group(label);
        for v in &VARIANTS {
            if bench_enabled(&filter, v.name) {
                bench_inputs(&mut group, inputs, v.name, v.func);
            }
        }
        if bench_enabled(&filter, "glibc") && has_glibc() {
            bench_inputs(&mut group, inputs, "glibc", glibc_llabs);
        }
        group.finish();
    }
}

fn main() {
    let mut c = configure_criterion();
    bench_abs(&mut c);
    c.final_summary();
}
