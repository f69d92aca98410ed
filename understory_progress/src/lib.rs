// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_progress --heading-base-level=0

//! Understory Progress: how far an element has travelled through the viewport.
//!
//! This crate is the pure geometry half of scroll-progress tracking. Given an
//! element's bounding box, the viewport size, and a set of per-edge
//! [`Offsets`] that inset a *tracking window* into the viewport, [`measure`]
//! returns a [`Progress`] record with one normalized value per edge.
//!
//! - [`TrackingMode::Entering`] reports progress continuously from the moment
//!   the element starts entering the window until it has fully left through
//!   the opposite side.
//! - [`TrackingMode::Contained`] reports progress only while the element fits
//!   entirely inside the window.
//!
//! Values are rounded to a configurable number of decimals `d` and clamped
//! into the tolerance window `[-10^-d, 1 + 10^-d]`. The two padding values are
//! sentinels meaning "out of range on this axis"; see [`bounds`].
//!
//! The crate owns no state and performs no I/O. Subscribing measurements to
//! scroll/resize events and dispatching callbacks is left to a controller such
//! as `understory_progress_tracker`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_progress::{Edge, Offsets, ProgressOptions, TrackingMode};
//!
//! // 100x100 element with its top-left corner at (0, 0) in a 1000x1000 viewport.
//! let element = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let viewport = Size::new(1000.0, 1000.0);
//!
//! let options = ProgressOptions {
//!     offsets: Offsets::symmetric(0.0, -200.0),
//!     mode: TrackingMode::Contained,
//!     decimals: 4,
//! };
//! let progress = options.measure(element, viewport);
//! assert_eq!(progress.fixed(Edge::Top).to_string(), "0.8462");
//! ```
//!
//! Degenerate geometry (a zero-length denominator on an axis) yields `NaN` on
//! that axis rather than panicking; callers check [`Progress::is_finite`].
//!
//! This crate is `no_std` and uses `alloc` for dynamic offsets.

#![no_std]

extern crate alloc;

pub mod bounds;
mod measure;
mod offset;
mod progress;

pub use measure::{ProgressOptions, TrackingMode, measure, tracking_window};
pub use offset::{Offset, Offsets};
pub use progress::{Axis, Edge, Fixed, Progress};
