#[macro_use]
extern crate bencher;

use bencher::Bencher;

use setcard::cardinality::{direct_union_size, inclusion_exclusion_union_size};
use setcard::simulation::generate_integer_sets;

// harness-overhead control, the counterpart of a constant-cost baseline
fn bench_baseline(bench: &mut Bencher) {
    bench.iter(|| 0i64)
}

fn bench_direct_union(bench: &mut Bencher) {
    let sets = generate_integer_sets(0, 10, 10, 100).unwrap();
    bench.iter(|| direct_union_size(&sets))
}

fn bench_inclusion_exclusion(bench: &mut Bencher) {
    let sets = generate_integer_sets(0, 10, 10, 100).unwrap();
    bench.iter(|| inclusion_exclusion_union_size(&sets))
}

// the exponential blow-up only takes a few more sets to dominate
fn bench_inclusion_exclusion_15_sets(bench: &mut Bencher) {
    let sets = generate_integer_sets(0, 15, 10, 100).unwrap();
    bench.iter(|| inclusion_exclusion_union_size(&sets))
}

benchmark_group!(
    benches,
    bench_baseline,
    bench_direct_union,
    bench_inclusion_exclusion,
    bench_inclusion_exclusion_15_sets
);
benchmark_main!(benches);
