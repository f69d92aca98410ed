// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_progress_tracker --heading-base-level=0

//! Understory Progress Tracker: scroll-driven progress callbacks for one element.
//!
//! A [`Tracker`] binds one [`Element`] and re-measures it through
//! `understory_progress` every time one of its trigger events fires (by
//! default `scroll` and `resize`). Each measurement:
//!
//! - toggles the `visible_x` / `visible_y` [`ClassNames`] on the element,
//! - calls the combined `on_progress` callback with a record clamped into
//!   `[0, 1]` while the element is in bounds on both axes,
//! - or, when it is out of bounds on exactly one axis, calls the matching
//!   directional callback (`on_top`, `on_right`, `on_bottom`, `on_left`)
//!   **once** per crossing. A per-edge latch suppresses repeats until the
//!   element is back in bounds.
//!
//! The crate does not talk to a browser. Hosts plug in through three seams:
//!
//! - [`Element`]: bounding box and class list.
//! - [`Viewport`]: current viewport size.
//! - [`EventSource`]: named event subscription. [`EventHub`] is a shared,
//!   per-event throttled implementation with caller-supplied timestamps.
//!
//! [`HeadlessElement`] and [`HeadlessViewport`] implement the first two in
//! memory.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Rect, Size, Vec2};
//! use understory_progress_tracker::{
//!     Callbacks, EventHub, HeadlessElement, HubOptions, TrackerConfig, tracker,
//! };
//!
//! let hub = EventHub::new(HubOptions { throttle_ms: 0, ..HubOptions::default() });
//! let exits = Rc::new(Cell::new(0));
//! let counter = exits.clone();
//!
//! let config = TrackerConfig {
//!     decimals: 2,
//!     callbacks: Callbacks::new().on_top(move || counter.set(counter.get() + 1)),
//!     ..TrackerConfig::default()
//! };
//! let mut t = tracker(config, Size::new(1000.0, 1000.0), hub.clone());
//!
//! let element = HeadlessElement::new(Rect::new(0.0, 100.0, 100.0, 200.0));
//! t.init(element.clone()).unwrap();
//! assert!(element.has_class("pluginLoaded"));
//!
//! // Scroll the element out through the top; repeated scroll ticks fire once.
//! for now in 0..3 {
//!     element.translate(Vec2::new(0.0, -300.0));
//!     hub.emit("scroll", now);
//! }
//! assert_eq!(exits.get(), 1);
//!
//! t.destroy().unwrap();
//! assert!(element.classes().is_empty());
//! ```
//!
//! ## Failure handling
//!
//! Measurement failures (a detached element, degenerate geometry) are logged
//! at `debug` level through the `log` facade and the dispatch is skipped; use
//! [`measure_element`] directly to observe them as a [`MeasurementError`].
//! Lifecycle misuse never panics; see [`LifecycleError`].
//!
//! All state is single-threaded (`Rc`/`RefCell`). This crate is `no_std` and
//! uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
pub mod dispatch;
mod error;
mod events;
mod host;
pub mod hub;
mod tracker;

pub use config::{Callbacks, ClassNames, TrackerConfig};
pub use error::{LifecycleError, MeasurementError};
pub use events::EventSource;
pub use host::{Element, HeadlessElement, HeadlessViewport, Viewport};
pub use hub::{EventHub, HubOptions, SubscriptionId};
pub use tracker::{Tracker, measure_element, tracker};
