// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `understory_progress_tracker`.
//!
//! A 100x100 headless element scrolls through a 1000x1000 headless viewport
//! while an unthrottled hub delivers synthetic `scroll`/`resize` events. A
//! recorder captures every callback in order.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Rect, Size};
use understory_progress::{Edge, Offset, Offsets, Progress, TrackingMode};
use understory_progress_tracker::{
    Callbacks, ClassNames, Element, EventHub, HeadlessElement, HeadlessViewport, HubOptions,
    Tracker, TrackerConfig, Viewport, tracker,
};

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Progress(Progress),
    Edge(Edge),
}

type Log = Rc<RefCell<Vec<Call>>>;

fn recording_callbacks(log: &Log) -> Callbacks {
    let mut callbacks = {
        let log = log.clone();
        Callbacks::new().on_progress(move |p| log.borrow_mut().push(Call::Progress(*p)))
    };
    for edge in Edge::ALL {
        let log = log.clone();
        callbacks = callbacks.on_edge(edge, move || log.borrow_mut().push(Call::Edge(edge)));
    }
    callbacks
}

fn unthrottled() -> EventHub {
    EventHub::new(HubOptions {
        throttle_ms: 0,
        ..HubOptions::default()
    })
}

fn at(top: f64, left: f64) -> Rect {
    Rect::new(left, top, left + 100.0, top + 100.0)
}

struct Harness {
    hub: EventHub,
    element: HeadlessElement,
    log: Log,
    tracker: Tracker<HeadlessElement, HeadlessViewport, EventHub>,
    viewport: HeadlessViewport,
    now: u64,
}

impl Harness {
    fn new(config: TrackerConfig, start: Rect) -> Self {
        let hub = unthrottled();
        let viewport = HeadlessViewport::new(Size::new(1000.0, 1000.0));
        let log: Log = Rc::default();
        let config = TrackerConfig {
            callbacks: recording_callbacks(&log),
            ..config
        };
        let mut tracker = tracker(config, viewport.clone(), hub.clone());
        let element = HeadlessElement::new(start);
        tracker.init(element.clone()).unwrap();
        Self {
            hub,
            element,
            log,
            tracker,
            viewport,
            now: 0,
        }
    }

    fn scroll_to(&mut self, rect: Rect) {
        self.element.set_rect(rect);
        self.now += 16;
        self.hub.emit("scroll", self.now);
    }

    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.log.borrow_mut())
    }
}

fn two_decimals() -> TrackerConfig {
    TrackerConfig {
        decimals: 2,
        ..TrackerConfig::default()
    }
}

#[test]
fn init_marks_element_and_reports_initial_progress() {
    let h = Harness::new(two_decimals(), at(100.0, 100.0));

    assert_eq!(
        h.element.classes(),
        ["pluginLoaded", "visible-x", "visible-y"]
    );
    let calls = h.take();
    assert_eq!(calls.len(), 1);
    let Call::Progress(p) = calls[0] else {
        panic!("expected progress, got {:?}", calls[0]);
    };
    assert_eq!(p.top(), 0.82);
    assert!((p.top() + p.bottom() - 1.0).abs() <= 0.01);
    assert!((p.left() + p.right() - 1.0).abs() <= 0.01);
}

#[test]
fn element_above_viewport_fires_top_once_per_crossing() {
    let mut h = Harness::new(two_decimals(), at(100.0, 100.0));
    h.take();

    // Far above the viewport, over many scroll ticks.
    for step in 0..10 {
        h.scroll_to(at(-2000.0 - f64::from(step) * 10.0, 100.0));
    }
    assert_eq!(h.take(), [Call::Edge(Edge::Top)]);
    assert!(!h.element.has_class("visible-y"));
    assert!(h.element.has_class("visible-x"));

    // Back in view re-arms the latch, and the next crossing fires again.
    h.scroll_to(at(400.0, 100.0));
    h.scroll_to(at(-2000.0, 100.0));
    h.scroll_to(at(-2100.0, 100.0));
    let calls = h.take();
    assert!(matches!(calls[0], Call::Progress(_)));
    assert_eq!(calls[1..], [Call::Edge(Edge::Top)]);
}

#[test]
fn leaving_bottom_then_top_without_returning_fires_both() {
    let mut h = Harness::new(two_decimals(), at(400.0, 100.0));
    h.take();

    h.scroll_to(at(1500.0, 100.0));
    h.scroll_to(at(-1500.0, 100.0));
    h.scroll_to(at(-1600.0, 100.0));
    assert_eq!(h.take(), [Call::Edge(Edge::Bottom), Call::Edge(Edge::Top)]);
}

#[test]
fn horizontal_crossings_fire_left_and_right() {
    let mut h = Harness::new(two_decimals(), at(400.0, 400.0));
    h.take();

    h.scroll_to(at(400.0, -500.0));
    h.scroll_to(at(400.0, -600.0));
    h.scroll_to(at(400.0, 1500.0));
    assert_eq!(h.take(), [Call::Edge(Edge::Left), Call::Edge(Edge::Right)]);
    assert!(!h.element.has_class("visible-x"));
    assert!(h.element.has_class("visible-y"));
}

#[test]
fn corner_positions_fire_nothing() {
    let mut h = Harness::new(two_decimals(), at(400.0, 400.0));
    h.take();

    h.scroll_to(at(-2000.0, -2000.0));
    h.scroll_to(at(3000.0, 3000.0));
    assert!(h.take().is_empty());
    assert_eq!(h.element.classes(), ["pluginLoaded"]);
}

#[test]
fn each_dispatch_fires_at_most_one_callback() {
    let mut h = Harness::new(two_decimals(), at(100.0, 100.0));
    h.take();

    let path = [
        at(500.0, 100.0),
        at(-900.0, 100.0),
        at(-950.0, 100.0),
        at(200.0, 300.0),
        at(200.0, 1200.0),
        at(200.0, 1300.0),
        at(1200.0, 200.0),
        at(-3000.0, -3000.0),
    ];
    for rect in path {
        h.scroll_to(rect);
        let calls = h.take();
        assert!(calls.len() <= 1, "{rect:?} fired {calls:?}");
    }
}

#[test]
fn combined_progress_is_always_clamped() {
    let config = TrackerConfig {
        decimals: 4,
        ..TrackerConfig::default()
    };
    let mut h = Harness::new(config, at(0.0, 0.0));
    for step in -25..=25 {
        let pos = f64::from(step) * 45.0;
        h.scroll_to(at(pos, 450.0));
    }
    for call in h.take() {
        if let Call::Progress(p) = call {
            for edge in Edge::ALL {
                let v = p.get(edge);
                assert!((0.0..=1.0).contains(&v), "{edge:?} = {v}");
            }
        }
    }
}

#[test]
fn contained_mode_only_reports_full_containment() {
    let config = TrackerConfig {
        mode: TrackingMode::Contained,
        decimals: 2,
        ..TrackerConfig::default()
    };
    let mut h = Harness::new(config, at(0.0, 0.0));
    let calls = h.take();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], Call::Progress(p) if p.top() == 1.0));

    // Partially above the viewport: not contained any more.
    h.scroll_to(at(-50.0, 0.0));
    assert_eq!(h.take(), [Call::Edge(Edge::Top)]);
}

#[test]
fn negative_offsets_grow_the_window() {
    let config = TrackerConfig {
        mode: TrackingMode::Contained,
        decimals: 4,
        offsets: Offsets {
            top: Offset::Fixed(-200.0),
            bottom: Offset::Fixed(-200.0),
            ..Offsets::default()
        },
        ..TrackerConfig::default()
    };
    let h = Harness::new(config, at(0.0, 0.0));
    let calls = h.take();
    assert!(matches!(calls[0], Call::Progress(p) if p.top() == 0.8462));
}

#[test]
fn dynamic_offsets_track_the_viewport() {
    let viewport = HeadlessViewport::new(Size::new(1000.0, 1000.0));
    let source = viewport.clone();
    let half = move || source.size().height / 2.0;
    let config = TrackerConfig {
        decimals: 2,
        offsets: Offsets {
            bottom: Offset::dynamic(half),
            ..Offsets::default()
        },
        ..TrackerConfig::default()
    };
    let hub = unthrottled();
    let log: Log = Rc::default();
    let mut t = tracker(
        TrackerConfig {
            callbacks: recording_callbacks(&log),
            ..config
        },
        viewport.clone(),
        hub.clone(),
    );
    // Below the top half of the viewport: out through the bottom.
    let element = HeadlessElement::new(at(700.0, 100.0));
    t.init(element.clone()).unwrap();
    assert_eq!(log.borrow().as_slice(), [Call::Edge(Edge::Bottom)]);

    // Growing the viewport moves the window edge past the element.
    viewport.resize(Size::new(1000.0, 2000.0));
    hub.emit("resize", 0);
    assert!(matches!(log.borrow().last(), Some(Call::Progress(_))));
}

#[test]
fn half_step_exit_through_the_top_still_fires() {
    let mut h = Harness::new(two_decimals(), at(100.0, 100.0));
    h.take();

    // Bottom rounds onto the out-of-range sentinel here.
    h.scroll_to(Rect::new(0.0, -105.5, 100.0, -5.5));
    assert_eq!(h.take(), [Call::Edge(Edge::Top)]);
    assert!(!h.element.has_class("visible-y"));
}

#[test]
fn trigger_raised_inside_a_callback_does_not_consume_the_crossing() {
    let hub = unthrottled();
    let element = HeadlessElement::new(at(400.0, 100.0));
    let progress_calls = Rc::new(RefCell::new(0_u32));
    let top_calls = Rc::new(RefCell::new(0_u32));

    let moved = Rc::new(RefCell::new(false));
    let callbacks = {
        let hub = hub.clone();
        let element = element.clone();
        let progress_calls = progress_calls.clone();
        let moved = moved.clone();
        let top_calls = top_calls.clone();
        Callbacks::new()
            .on_progress(move |_| {
                *progress_calls.borrow_mut() += 1;
                // The second in-view report scrolls the page away from
                // inside the callback.
                if *progress_calls.borrow() == 2 && !*moved.borrow() {
                    *moved.borrow_mut() = true;
                    element.set_rect(at(-2000.0, 100.0));
                    hub.emit("scroll", 1);
                }
            })
            .on_top(move || *top_calls.borrow_mut() += 1)
    };
    let config = TrackerConfig {
        decimals: 2,
        callbacks,
        ..TrackerConfig::default()
    };
    let mut t = tracker(config, Size::new(1000.0, 1000.0), hub.clone());
    t.init(element.clone()).unwrap();

    hub.emit("scroll", 0);
    assert!(*moved.borrow());
    // The nested trigger was dropped before measuring.
    assert_eq!(*top_calls.borrow(), 0);
    assert!(element.has_class("visible-y"));

    for now in 2..6 {
        hub.emit("scroll", now);
    }
    assert_eq!(*progress_calls.borrow(), 2);
    assert_eq!(*top_calls.borrow(), 1);
    assert_eq!(element.classes(), ["pluginLoaded", "visible-x"]);
}

#[test]
fn detached_element_skips_dispatch() {
    let mut h = Harness::new(two_decimals(), at(100.0, 100.0));
    h.take();

    h.element.detach();
    h.now += 16;
    h.hub.emit("scroll", h.now);
    assert!(h.take().is_empty());

    h.scroll_to(at(200.0, 100.0));
    assert_eq!(h.take().len(), 1);
}

#[test]
fn destroy_strips_classes_and_silences_events() {
    let config = TrackerConfig {
        class_names: ClassNames {
            visible_x: "in-x".into(),
            visible_y: "in-y".into(),
            plugin_loaded: "tracked".into(),
        },
        ..two_decimals()
    };
    let mut h = Harness::new(config, at(100.0, 100.0));
    h.element.add_class("unrelated");
    assert!(h.element.has_class("tracked"));
    h.take();

    h.tracker.destroy().unwrap();
    assert_eq!(h.element.classes(), ["unrelated"]);
    assert!(h.hub.registered_events().is_empty());

    h.scroll_to(at(-2000.0, 100.0));
    h.viewport.resize(Size::new(10.0, 10.0));
    h.hub.emit("resize", h.now + 100);
    assert!(h.take().is_empty());
    assert_eq!(h.element.classes(), ["unrelated"]);
}

#[test]
fn trackers_share_one_hub_channel() {
    let hub = unthrottled();
    let viewport = Size::new(1000.0, 1000.0);
    let a = HeadlessElement::new(at(100.0, 100.0));
    let b = HeadlessElement::new(at(600.0, 100.0));

    let mut ta = tracker(TrackerConfig::default(), viewport, hub.clone());
    let mut tb = tracker(TrackerConfig::default(), viewport, hub.clone());
    ta.init(a.clone()).unwrap();
    tb.init(b.clone()).unwrap();
    assert_eq!(hub.listener_count("scroll"), 2);
    assert_eq!(hub.emit("scroll", 0), 2);

    ta.destroy().unwrap();
    assert_eq!(hub.listener_count("scroll"), 1);
    assert!(b.has_class("pluginLoaded"));
    assert!(!a.has_class("pluginLoaded"));
}

#[test]
fn throttled_hub_delivers_trailing_position() {
    let hub = EventHub::default();
    let log: Log = Rc::default();
    let config = TrackerConfig {
        decimals: 2,
        callbacks: recording_callbacks(&log),
        ..TrackerConfig::default()
    };
    let element = HeadlessElement::new(at(400.0, 100.0));
    let mut t = tracker(config, Size::new(1000.0, 1000.0), hub.clone());
    t.init(element.clone()).unwrap();
    log.borrow_mut().clear();

    hub.emit("scroll", 1_000);
    element.set_rect(at(-2000.0, 100.0));
    hub.emit("scroll", 1_010);
    hub.emit("scroll", 1_020);
    assert_eq!(log.borrow().len(), 1);

    hub.poll(1_050);
    assert_eq!(log.borrow().last(), Some(&Call::Edge(Edge::Top)));
}
