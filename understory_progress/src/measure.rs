// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Rect, Size};

use crate::bounds::{MAX_DECIMALS, min_max, round_to, tolerance};
use crate::offset::Offsets;
use crate::progress::Progress;

/// How progress is tracked relative to the tracking window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrackingMode {
    /// Track while the element is entering, inside, and leaving the window.
    ///
    /// Progress is `0` when the element's trailing edge touches the window's
    /// leading edge and `1` when its leading edge reaches the window's
    /// trailing edge.
    #[default]
    Entering,
    /// Track only while the element is fully contained in the window.
    ///
    /// Outside of full containment the raw fraction leaves `[0, 1]` and is
    /// clamped to the out-of-range sentinels.
    Contained,
}

impl TrackingMode {
    /// Maps an "entering" flag onto a mode.
    #[must_use]
    pub fn from_entering(entering: bool) -> Self {
        if entering {
            Self::Entering
        } else {
            Self::Contained
        }
    }

    /// Returns `true` for [`TrackingMode::Entering`].
    #[must_use]
    pub fn is_entering(self) -> bool {
        self == Self::Entering
    }
}

/// Bundled measurement settings.
#[derive(Clone, Debug)]
pub struct ProgressOptions {
    /// Tracking window insets.
    pub offsets: Offsets,
    /// Tracking mode.
    pub mode: TrackingMode,
    /// Decimal places of the reported values (capped at
    /// [`MAX_DECIMALS`](crate::bounds::MAX_DECIMALS)).
    pub decimals: u32,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            offsets: Offsets::default(),
            mode: TrackingMode::Entering,
            decimals: 10,
        }
    }
}

impl ProgressOptions {
    /// Measures `element` against `viewport` with these options.
    #[must_use]
    pub fn measure(&self, element: Rect, viewport: Size) -> Progress {
        measure(element, viewport, &self.offsets, self.mode, self.decimals)
    }
}

/// Returns the tracking window: the viewport rectangle (origin at zero)
/// shrunk by `insets`.
///
/// The result is not normalized; insets larger than the viewport produce a
/// negative extent.
#[must_use]
pub fn tracking_window(viewport: Size, insets: Insets) -> Rect {
    Rect::new(
        insets.x0,
        insets.y0,
        viewport.width - insets.x1,
        viewport.height - insets.y1,
    )
}

/// Measures the per-edge progress of `element` through the tracking window.
///
/// `element` is the element's bounding box in viewport coordinates (what a
/// browser reports from `getBoundingClientRect`). Offsets are resolved once,
/// dynamic ones included.
///
/// A zero denominator (a degenerate element/window pair) yields `NaN` on the
/// affected axis; check [`Progress::is_finite`].
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_progress::{Offsets, TrackingMode, measure};
///
/// let element = Rect::new(100.0, 100.0, 200.0, 200.0);
/// let viewport = Size::new(1000.0, 1000.0);
/// let p = measure(element, viewport, &Offsets::default(), TrackingMode::Entering, 2);
/// assert_eq!(p.top(), 0.82);
/// assert_eq!(p.bottom(), 0.18);
/// ```
#[must_use]
pub fn measure(
    element: Rect,
    viewport: Size,
    offsets: &Offsets,
    mode: TrackingMode,
    decimals: u32,
) -> Progress {
    let decimals = decimals.min(MAX_DECIMALS);
    let window = tracking_window(viewport, offsets.resolve());

    let element_width = element.x1 - element.x0;
    let element_height = element.y1 - element.y0;
    let rel_left = element.x0 - window.x0;
    let rel_top = element.y0 - window.y0;
    let window_width = window.x1 - window.x0;
    let window_height = window.y1 - window.y0;

    let (x, y) = match mode {
        TrackingMode::Entering => (
            fraction(rel_left + element_width, window_width + element_width),
            fraction(rel_top + element_height, window_height + element_height),
        ),
        TrackingMode::Contained => (
            fraction(rel_left, window_width - element_width),
            fraction(rel_top, window_height - element_height),
        ),
    };

    let eps = tolerance(decimals);
    let x = round_to(min_max(x, -eps, 1.0 + eps), decimals);
    let y = round_to(min_max(y, -eps, 1.0 + eps), decimals);

    // Complements are taken after rounding so each pair lands on the same
    // side of the tolerance window.
    Progress::new(
        round_to(1.0 - y, decimals),
        x,
        y,
        round_to(1.0 - x, decimals),
        decimals,
    )
}

fn fraction(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return f64::NAN;
    }
    numerator / denominator
}
