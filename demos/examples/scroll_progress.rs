// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll progress basics.
//!
//! Scroll a page past two tracked elements and print each progress record
//! and edge crossing. Set `RUST_LOG=debug` (or `trace`) to see the tracker's
//! lifecycle and skipped dispatches.
//!
//! Run:
//! - `cargo run -p understory_demos --example scroll_progress`

use kurbo::{Rect, Size};
use understory_demos::ScrollPage;
use understory_progress::TrackingMode;
use understory_progress_tracker::{Callbacks, TrackerConfig, tracker};

fn callbacks(name: &'static str) -> Callbacks {
    Callbacks::new()
        .on_progress(move |p| println!("  {name}: {p}"))
        .on_top(move || println!("  {name}: left through the top"))
        .on_bottom(move || println!("  {name}: left through the bottom"))
}

fn main() {
    env_logger::init();

    let mut page = ScrollPage::new(Size::new(800.0, 600.0), 0);
    let hero = page.place(Rect::new(100.0, 200.0, 700.0, 500.0));
    let card = page.place(Rect::new(250.0, 1200.0, 550.0, 1400.0));

    let mut hero_tracker = tracker(
        TrackerConfig {
            decimals: 2,
            callbacks: callbacks("hero"),
            ..TrackerConfig::default()
        },
        page.viewport.clone(),
        page.hub.clone(),
    );
    let mut card_tracker = tracker(
        TrackerConfig {
            mode: TrackingMode::Contained,
            decimals: 2,
            callbacks: callbacks("card"),
            ..TrackerConfig::default()
        },
        page.viewport.clone(),
        page.hub.clone(),
    );

    println!("init");
    if let Err(err) = hero_tracker.init(hero.clone()) {
        eprintln!("hero: {err}");
    }
    if let Err(err) = card_tracker.init(card.clone()) {
        eprintln!("card: {err}");
    }

    for step in 1..=12 {
        let y = f64::from(step) * 150.0;
        println!("scroll to {y}");
        page.scroll_to(y, 16);
        println!(
            "  classes: hero {:?}, card {:?}",
            hero.classes(),
            card.classes()
        );
    }

    println!("resize to 800x1200");
    page.resize(Size::new(800.0, 1200.0), 16);

    if let Err(err) = hero_tracker.destroy() {
        eprintln!("hero: {err}");
    }
    if let Err(err) = card_tracker.destroy() {
        eprintln!("card: {err}");
    }
    println!("destroyed; hero classes {:?}", hero.classes());
}
