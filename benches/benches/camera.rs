// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `viewfinder_camera` and the quality loop around it.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use viewfinder_camera::{
    FrameOptions, Movement, compute_frames, dolly_zoom_frames, match_cut_frames, validate_frames,
};
use viewfinder_quality::{PerformanceMonitor, QualityManager, SectionCuller, ViewportSize};
use viewfinder_spatial::{CanvasPosition, SectionMap};

fn bench_camera(c: &mut Criterion) {
    let from = CanvasPosition::new(0.0, -100.0, 1.0);
    let to = CanvasPosition::new(400.0, 50.0, 1.2);

    let mut group = c.benchmark_group("camera/frames");

    for duration_ms in [600.0, 1200.0, 2000.0] {
        group.bench_function(BenchmarkId::new("compute", duration_ms as u64), |b| {
            let options = FrameOptions {
                duration_ms,
                curve: Movement::PanTilt.default_curve(),
                ..FrameOptions::default()
            };
            b.iter(|| black_box(compute_frames(from, to, &options)))
        });
    }

    group.bench_function("compute_optimized_2000ms", |b| {
        let options = FrameOptions {
            duration_ms: 2000.0,
            enable_optimization: true,
            ..FrameOptions::default()
        };
        b.iter(|| black_box(compute_frames(from, to, &options)))
    });

    group.bench_function("dolly_zoom_1200ms", |b| {
        b.iter(|| black_box(dolly_zoom_frames(from, to, 0.5, None)))
    });

    group.bench_function("match_cut_1000ms", |b| {
        let anchor = CanvasPosition::new(200.0, 0.0, 1.1);
        b.iter(|| black_box(match_cut_frames(from, to, anchor, None)))
    });

    group.bench_function("validate", |b| {
        let options = FrameOptions {
            duration_ms: 1200.0,
            ..FrameOptions::default()
        };
        let sequence = compute_frames(from, to, &options);
        b.iter(|| black_box(validate_frames(&sequence, None)))
    });

    group.finish();

    let mut group = c.benchmark_group("camera/quality_loop");

    group.bench_function("record_and_check", |b| {
        let mut monitor = PerformanceMonitor::new();
        monitor.start();
        let mut manager = QualityManager::new();
        let mut now = 0.0;
        b.iter(|| {
            now += 16.7;
            monitor.record_frame(16.7, now);
            manager.check_thresholds(&monitor, now);
            black_box(manager.level())
        })
    });

    group.bench_function("cull_uncached", |b| {
        let map = SectionMap::portfolio();
        let mut culler = SectionCuller::new();
        let viewport = ViewportSize::new(1280.0, 800.0);
        let camera = map.section_position("frame");
        let mut now = 0.0;
        b.iter(|| {
            // Step past the throttle so every call recomputes.
            now += 150.0;
            black_box(culler.cull(camera, viewport, &map, now).len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_camera);
criterion_main!(benches);
