// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throttled delivery.
//!
//! A burst of scroll events inside one throttle window collapses into the
//! first delivery plus a trailing one flushed by `poll`, so the tracker
//! always sees the final position.
//!
//! Run:
//! - `cargo run -p understory_demos --example throttled_scroll`

use kurbo::{Rect, Size};
use understory_demos::ScrollPage;
use understory_progress::Offsets;
use understory_progress_tracker::{Callbacks, TrackerConfig, tracker};

fn main() {
    env_logger::init();

    let mut page = ScrollPage::new(Size::new(1000.0, 1000.0), 50);
    let element = page.place(Rect::new(100.0, 400.0, 200.0, 500.0));

    let config = TrackerConfig {
        decimals: 3,
        // Track against the middle half of the viewport.
        offsets: Offsets::symmetric(0.0, 250.0),
        callbacks: Callbacks::new()
            .on_progress(|p| println!("  progress {p}"))
            .on_top(|| println!("  out through the top")),
        ..TrackerConfig::default()
    };
    let mut t = tracker(config, page.viewport.clone(), page.hub.clone());
    if let Err(err) = t.init(element) {
        eprintln!("init: {err}");
        return;
    }

    for step in 1..=8 {
        let y = f64::from(step) * 40.0;
        let ran = page.scroll_to(y, 5);
        println!("scroll to {y}: {ran} handler(s) ran");
    }
    let flushed = page.settle(50);
    println!(
        "settled at {}: {flushed} trailing handler(s) ran",
        page.scroll_y()
    );
}
