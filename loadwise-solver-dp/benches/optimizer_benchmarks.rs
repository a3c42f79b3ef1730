//! Criterion benchmarks for the bitmask optimiser.
//!
//! Work doubles with every added order, so the sizes bracket the largest
//! lane the optimiser accepts.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package loadwise-solver-dp
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use loadwise_core::{LoadOptimizer, MAX_ORDERS, Order};
use loadwise_solver_dp::BitmaskOptimizer;


use bench_support::{BENCHMARK_CAPACITY, BENCHMARK_SEED, generate_lane};

/// Lane sizes to benchmark.
const LANE_SIZES: &[usize] = &[16, 20, MAX_ORDERS];

fn bench_optimise(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimise_lane");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));

    let optimizer = BitmaskOptimizer::new();
    for &size in LANE_SIZES {
        let orders = generate_lane(size, BENCHMARK_SEED);
        let refs: Vec<&Order> = orders.iter().collect();

        let subsets = 1_u64 << size;
        group.throughput(Throughput::Elements(subsets));
        group.bench_with_input(BenchmarkId::new("orders", size), &refs, |b, refs| {
            b.iter(|| optimizer.optimise(BENCHMARK_CAPACITY, refs));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_optimise);
criterion_main!(benches);
