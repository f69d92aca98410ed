// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the progress tracker demos.
//!
//! [`ScrollPage`] stands in for a scrolling document: it owns a viewport, a
//! hub, and an event clock, and moves headless elements as the page scrolls.

use kurbo::{Rect, Size, Vec2};
use understory_progress_tracker::{EventHub, HeadlessElement, HeadlessViewport, HubOptions};

/// A headless page that scrolls vertically.
#[derive(Debug)]
pub struct ScrollPage {
    /// Viewport the trackers measure against.
    pub viewport: HeadlessViewport,
    /// Hub trackers subscribe to.
    pub hub: EventHub,
    scroll_y: f64,
    now_ms: u64,
    elements: Vec<(HeadlessElement, Rect)>,
}

impl ScrollPage {
    /// Creates a page showing `size` with the given hub throttle.
    pub fn new(size: Size, throttle_ms: u64) -> Self {
        Self {
            viewport: HeadlessViewport::new(size),
            hub: EventHub::new(HubOptions {
                throttle_ms,
                ..HubOptions::default()
            }),
            scroll_y: 0.0,
            now_ms: 0,
            elements: Vec::new(),
        }
    }

    /// Places an element at `rect` in document coordinates.
    pub fn place(&mut self, rect: Rect) -> HeadlessElement {
        let element = HeadlessElement::new(rect - Vec2::new(0.0, self.scroll_y));
        self.elements.push((element.clone(), rect));
        element
    }

    /// Current scroll position.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Scrolls to `y`, advancing the clock by `dt_ms`, and emits `scroll`.
    ///
    /// Returns the number of handlers that ran.
    pub fn scroll_to(&mut self, y: f64, dt_ms: u64) -> usize {
        self.scroll_y = y;
        for (element, doc) in &self.elements {
            element.set_rect(*doc - Vec2::new(0.0, y));
        }
        self.now_ms += dt_ms;
        log::trace!("page scrolled to {y} at {}ms", self.now_ms);
        self.hub.emit("scroll", self.now_ms)
    }

    /// Resizes the viewport and emits `resize`.
    pub fn resize(&mut self, size: Size, dt_ms: u64) -> usize {
        self.viewport.resize(size);
        self.now_ms += dt_ms;
        self.hub.emit("resize", self.now_ms)
    }

    /// Lets the clock run forward and flushes any throttled events.
    pub fn settle(&mut self, dt_ms: u64) -> usize {
        self.now_ms += dt_ms;
        self.hub.poll(self.now_ms)
    }
}
