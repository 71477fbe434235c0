//! Benchmark for composition: compose!, Pipeline, and Maybe chains.
//!
//! Compares the statically composed closure with the runtime `Pipeline` fold.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use functorial::compose;
use functorial::compose::Pipeline;
use functorial::control::Maybe;
use std::hint::black_box;

// =============================================================================
// Composition Benchmarks
// =============================================================================

fn benchmark_compose_vs_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose_vs_pipeline");

    let add_one = |n: u64| n.wrapping_add(1);
    let double = |n: u64| n.wrapping_mul(2);
    let rotate = |n: u64| n.rotate_left(7);

    let composed = compose!(add_one, double, rotate);
    group.bench_function("compose_macro", |bencher| {
        bencher.iter(|| black_box(composed(black_box(42))));
    });

    let pipeline = Pipeline::new().then(add_one).then(double).then(rotate);
    group.bench_function("pipeline", |bencher| {
        bencher.iter(|| black_box(pipeline.apply(black_box(42))));
    });

    group.finish();
}

fn benchmark_pipeline_length(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline_length");

    for length in [1_u64, 4, 16, 64] {
        let stages = (0..length).map(|step| move |n: u64| n.wrapping_add(step));
        let pipeline = Pipeline::try_from_stages(stages).expect("at least one stage");
        group.bench_with_input(
            BenchmarkId::new("stages", length),
            &pipeline,
            |bencher, pipeline| {
                bencher.iter(|| black_box(pipeline.apply(black_box(0))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Maybe Benchmarks
// =============================================================================

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    for (name, input) in [("present", Some(7_i64)), ("absent", None)] {
        group.bench_function(name, |bencher| {
            bencher.iter(|| {
                let result = Maybe::of_nullable(black_box(input))
                    .map(|n| n + 1)
                    .chain(|n| Maybe::of_nullable(n.checked_mul(3)))
                    .map(|n| n - 2);
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_compose_vs_pipeline,
    benchmark_pipeline_length,
    benchmark_maybe_chain
);
criterion_main!(benches);
