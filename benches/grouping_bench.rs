//! Criterion benchmarks for u-grouping.
//!
//! Measures model construction and assignment checking only; solver time
//! depends on the backend and is not benchmarked here.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_grouping::grouping::{build_model, check_assignment, Assignment, GroupingConfig};

// ===========================================================================
// Model construction
// ===========================================================================

fn bench_build_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_model");
    group.sample_size(20);

    for &(people, size, days) in &[(12, 3, 4), (24, 6, 6), (32, 4, 8)] {
        let config = GroupingConfig::new(people, size, days, 2);
        group.bench_with_input(
            BenchmarkId::new(format!("n{people}_s{size}"), days),
            &config,
            |b, cfg| b.iter(|| black_box(build_model(black_box(cfg)))),
        );
    }
    group.finish();
}

// ===========================================================================
// Checker on a round-robin layout
// ===========================================================================

fn round_robin(config: &GroupingConfig) -> Assignment {
    let groups = config.num_groups() as usize;
    let days = (0..config.num_days as usize)
        .map(|d| {
            let mut day = vec![Vec::new(); groups];
            for p in 1..=config.num_people {
                day[(p as usize - 1 + d) % groups].push(p);
            }
            day
        })
        .collect();
    Assignment::new(days)
}

fn bench_check_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_assignment");

    for &people in &[24, 64, 128] {
        // Unlimited repeats so the round-robin layout passes.
        let config = GroupingConfig::new(people, 4, 8, 8);
        let assignment = round_robin(&config);
        group.bench_with_input(
            BenchmarkId::from_parameter(people),
            &(config, assignment),
            |b, (cfg, a)| b.iter(|| black_box(check_assignment(black_box(cfg), black_box(a)))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_build_model, bench_check_assignment);
criterion_main!(benches);
