// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_progress::{Progress, TrackingMode};
use understory_progress_tracker::dispatch::Latch;
use understory_progress_tracker::{
    Callbacks, EventHub, HeadlessElement, HubOptions, TrackerConfig, tracker,
};

fn bench_latch(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker/latch");

    // Alternates in-bounds and single-axis exits so every branch is taken.
    let records: Vec<Progress> = (0..256)
        .map(|i| {
            let y = -0.5 + 2.0 * f64::from(i) / 256.0;
            Progress::new(1.0 - y, 0.5, y, 0.5, 4)
        })
        .collect();
    group.throughput(Throughput::Elements(records.len() as u64));

    group.bench_function("resolve", |b| {
        b.iter_batched(
            Latch::default,
            |mut latch| {
                let mut fired = 0_usize;
                for p in &records {
                    fired += usize::from(latch.resolve(p).is_some());
                }
                fired
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_hub_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker/dispatch");
    let viewport = Size::new(1000.0, 1000.0);

    // One scroll event fanned out to `n` trackers sharing a hub.
    for n in [1_usize, 16, 128] {
        let hub = EventHub::new(HubOptions {
            throttle_ms: 0,
            limit: n + 1,
        });
        let hits = Rc::new(Cell::new(0_u64));
        let mut trackers = Vec::with_capacity(n);
        for i in 0..n {
            let counter = hits.clone();
            let config = TrackerConfig {
                mode: TrackingMode::Entering,
                decimals: 4,
                callbacks: Callbacks::new().on_progress(move |_| counter.set(counter.get() + 1)),
                ..TrackerConfig::default()
            };
            let y = (i % 10) as f64 * 90.0;
            let element = HeadlessElement::new(Rect::new(100.0, y, 200.0, y + 100.0));
            let mut t = tracker(config, viewport, hub.clone());
            if t.init(element).is_ok() {
                trackers.push(t);
            }
        }
        group.throughput(Throughput::Elements(n as u64));

        let mut now = 0_u64;
        group.bench_with_input(BenchmarkId::new("scroll", n), &n, |b, _| {
            b.iter(|| {
                now += 1;
                hub.emit("scroll", now)
            });
        });
        drop(trackers);
    }

    group.finish();
}

criterion_group!(benches, bench_latch, bench_hub_dispatch);
criterion_main!(benches);
