// Copyright 2025 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `viewfinder_spatial`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use viewfinder_spatial::{
    CanvasPosition, PathEasing, SectionMap, DEFAULT_SECTION_TOLERANCE, transition_path,
};

fn bench_spatial(c: &mut Criterion) {
    let map = SectionMap::portfolio();

    let mut group = c.benchmark_group("spatial/map");

    group.bench_function("scroll_to_canvas_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..=200 {
                let position = map.scroll_to_canvas(f64::from(i) / 2.0);
                acc += position.point.x + position.scale;
            }
            black_box(acc)
        })
    });

    group.bench_function("canvas_to_scroll", |b| {
        let position = CanvasPosition::new(150.0, -75.0, 1.1);
        b.iter(|| black_box(map.canvas_to_scroll(position)))
    });

    group.bench_function("section_at", |b| {
        let position = map.section_position("frame");
        b.iter(|| black_box(map.section_at(position, DEFAULT_SECTION_TOLERANCE)))
    });

    group.finish();

    let mut group = c.benchmark_group("spatial/path");

    let from = map.section_position("capture");
    let to = map.section_position("develop");
    for steps in [10_usize, 60, 240] {
        group.bench_function(BenchmarkId::new("transition_path", steps), |b| {
            b.iter(|| black_box(transition_path(from, to, steps, PathEasing::EaseInOut)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spatial);
criterion_main!(benches);
