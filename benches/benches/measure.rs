// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_progress::{Offset, Offsets, ProgressOptions, TrackingMode, measure};

fn scroll_path(steps: usize) -> Vec<Rect> {
    (0..steps)
        .map(|i| {
            let y = -1500.0 + 3000.0 * (i as f64) / (steps as f64);
            Rect::new(100.0, y, 200.0, y + 100.0)
        })
        .collect()
}

fn bench_measure_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress/measure");
    let viewport = Size::new(1000.0, 1000.0);
    let path = scroll_path(1_024);
    group.throughput(Throughput::Elements(path.len() as u64));

    for mode in [TrackingMode::Entering, TrackingMode::Contained] {
        let offsets = Offsets::symmetric(0.0, 100.0);
        group.bench_with_input(
            BenchmarkId::new(format!("{mode:?}"), path.len()),
            &path,
            |b, path| {
                b.iter(|| {
                    for &rect in path {
                        black_box(measure(rect, viewport, &offsets, mode, 4));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_dynamic_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress/offsets");
    let viewport = Size::new(1000.0, 1000.0);
    let path = scroll_path(1_024);
    group.throughput(Throughput::Elements(path.len() as u64));

    let fixed = ProgressOptions {
        offsets: Offsets::uniform(250.0),
        ..ProgressOptions::default()
    };
    let dynamic = ProgressOptions {
        offsets: Offsets {
            top: Offset::dynamic(|| 250.0),
            right: Offset::dynamic(|| 250.0),
            bottom: Offset::dynamic(|| 250.0),
            left: Offset::dynamic(|| 250.0),
        },
        ..ProgressOptions::default()
    };

    for (name, options) in [("fixed", &fixed), ("dynamic", &dynamic)] {
        group.bench_with_input(BenchmarkId::new(name, path.len()), &path, |b, path| {
            b.iter(|| {
                for &rect in path {
                    black_box(options.measure(rect, viewport));
                }
            });
        });
    }

    group.finish();
}

fn bench_decimals(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress/decimals");
    let viewport = Size::new(1000.0, 1000.0);
    let rect = Rect::new(100.0, 300.0, 200.0, 400.0);
    let offsets = Offsets::default();

    for decimals in [0_u32, 2, 10, 15] {
        group.bench_with_input(
            BenchmarkId::from_parameter(decimals),
            &decimals,
            |b, &decimals| {
                b.iter(|| {
                    measure(
                        black_box(rect),
                        viewport,
                        &offsets,
                        TrackingMode::Entering,
                        decimals,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_measure_modes,
    bench_dynamic_offsets,
    bench_decimals
);
criterion_main!(benches);
