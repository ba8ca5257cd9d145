// ABOUTME: Criterion benchmarks for wellness scoring and routine progress
// ABOUTME: Measures score computation, distance conversion, and progress aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the dashboard's pure computations.
//!
//! These run on every summary request, so they should stay in the
//! nanosecond range.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use you360::routines::RoutineTracker;
use you360_core::models::{TimeOfDay, WellnessSample};
use you360_intelligence::{steps_from_distance, Distance, DistanceUnit, WellnessScorer};

/// Samples spanning the clamped, neutral, and saturated regions
fn samples() -> Vec<WellnessSample> {
    (0..100_u32)
        .map(|i| {
            WellnessSample::new(
                f64::from(i % 12),
                u64::from(i) * 250,
                80.0 + f64::from(i % 60) * 2.0,
            )
        })
        .collect()
}

fn tracker_with(routine_count: usize) -> RoutineTracker {
    let mut tracker = RoutineTracker::with_defaults();
    for index in 0..routine_count {
        tracker
            .add_routine(
                &format!("Routine {index}"),
                TimeOfDay::ALL[index % TimeOfDay::ALL.len()],
                vec!["Stretch".to_owned(), "Hydrate".to_owned(), "Walk".to_owned()],
            )
            .unwrap();
        let id = tracker.routines().last().unwrap().id;
        if index % 2 == 0 {
            tracker.toggle_task(id, 0).unwrap();
        }
    }
    tracker
}

fn bench_wellness_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("wellness_score");
    let samples = samples();

    group.bench_function("single_sample", |b| {
        let sample = WellnessSample::new(8.0, 9000, 105.0);
        b.iter(|| WellnessScorer::compute(black_box(&sample)));
    });

    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("batch_100_samples", |b| {
        b.iter(|| {
            samples
                .iter()
                .map(|sample| u32::from(WellnessScorer::compute(sample).value()))
                .sum::<u32>()
        });
    });

    group.bench_function("breakdown", |b| {
        let sample = WellnessSample::new(6.5, 4200, 140.0);
        b.iter(|| WellnessScorer::breakdown(black_box(&sample)));
    });

    group.finish();
}

fn bench_step_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_conversion");

    for unit in [DistanceUnit::Km, DistanceUnit::M] {
        let distance = Distance::new(5.0, unit);
        group.bench_with_input(
            BenchmarkId::new("steps_from_distance", unit.as_str()),
            &distance,
            |b, distance| b.iter(|| steps_from_distance(black_box(distance))),
        );
    }

    group.finish();
}

fn bench_routine_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("routine_progress");

    for routine_count in [4_usize, 50, 500] {
        let tracker = tracker_with(routine_count);
        group.throughput(Throughput::Elements(tracker.routines().len() as u64));
        group.bench_with_input(
            BenchmarkId::new("overall_progress", routine_count),
            &tracker,
            |b, tracker| b.iter(|| black_box(tracker).overall_progress()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_wellness_score,
    bench_step_conversion,
    bench_routine_progress
);
criterion_main!(benches);
