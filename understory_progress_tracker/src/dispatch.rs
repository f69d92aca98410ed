// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Threshold dispatch: decide which callback, if any, a measurement fires.
//!
//! - In bounds on both axes: fire the combined callback with the clamped
//!   record and reset every latch.
//! - Out of bounds on exactly one axis: fire that axis' edge callback once,
//!   then latch it until the element is back in bounds.
//! - Out of bounds on both axes: fire nothing.

use understory_progress::{Edge, Progress};

/// What a single dispatch should invoke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// The combined callback, with values clamped into `[0, 1]`.
    Progress(Progress),
    /// The directional callback for an edge.
    Edge(Edge),
}

/// Per-edge "already fired" flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latch {
    fired: [bool; 4],
}

impl Latch {
    /// Returns `true` if `edge` has fired since the last reset.
    #[must_use]
    pub fn is_set(&self, edge: Edge) -> bool {
        self.fired[edge.index()]
    }

    /// Clears every flag.
    pub fn reset(&mut self) {
        self.fired = [false; 4];
    }

    /// Decides the action for `progress` and updates the flags.
    pub fn resolve(&mut self, progress: &Progress) -> Option<Action> {
        match (progress.in_bounds_x(), progress.in_bounds_y()) {
            (true, true) => {
                self.reset();
                Some(Action::Progress(progress.clamped()))
            }
            (true, false) => self.fire_once(progress.top(), Edge::Top, Edge::Bottom),
            (false, true) => self.fire_once(progress.left(), Edge::Left, Edge::Right),
            (false, false) => {
                log::trace!("out of bounds on both axes; no callback ({progress})");
                None
            }
        }
    }

    /// `value` is the progress on the `past` edge: above one means the
    /// element has left through `past`, below zero through `before`.
    fn fire_once(&mut self, value: f64, past: Edge, before: Edge) -> Option<Action> {
        let edge = if value > 1.0 && !self.is_set(past) {
            past
        } else if value < 0.0 && !self.is_set(before) {
            before
        } else {
            return None;
        };
        self.fired[edge.index()] = true;
        Some(Action::Edge(edge))
    }
}
