// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `viewfinder_easing`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use viewfinder_easing::{CameraEasing, ShotPreset, validate_easing};

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing/evaluate");

    group.bench_function("tripod_fluid", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..=100 {
                acc += CameraEasing::TripodFluid.evaluate(f64::from(i) / 100.0);
            }
            black_box(acc)
        })
    });

    group.bench_function("handheld_natural", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..=100 {
                acc += CameraEasing::HandheldNatural.evaluate(f64::from(i) / 100.0);
            }
            black_box(acc)
        })
    });

    group.bench_function("handheld_natural_with_rng", |b| {
        let mut rng = SmallRng::seed_from_u64(7);
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..=100 {
                acc += CameraEasing::HandheldNatural.evaluate_with(f64::from(i) / 100.0, &mut rng);
            }
            black_box(acc)
        })
    });

    group.bench_function("all_curves_midpoint", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for easing in CameraEasing::ALL {
                acc += easing.evaluate(0.5);
            }
            black_box(acc)
        })
    });

    group.finish();

    let mut group = c.benchmark_group("easing/presets");

    group.bench_function("focus_breathing", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..=100 {
                acc += ShotPreset::FocusBreathing.evaluate(f64::from(i) / 100.0);
            }
            black_box(acc)
        })
    });

    group.finish();

    let mut group = c.benchmark_group("easing/validate");

    for samples in [16_usize, 64, 256] {
        group.bench_function(BenchmarkId::new("tripod_fluid", samples), |b| {
            b.iter(|| {
                black_box(validate_easing(
                    |t| CameraEasing::TripodFluid.evaluate(t),
                    samples,
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_easing);
criterion_main!(benches);
