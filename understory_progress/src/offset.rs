// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::fmt;

use kurbo::Insets;

/// One side of the tracking window inset.
///
/// A fixed inset is a plain pixel value. A dynamic inset is evaluated again
/// on every measurement, which allows offsets that follow the viewport or the
/// element (for example "half the viewport height").
#[derive(Clone)]
pub enum Offset {
    /// A constant inset in pixels.
    Fixed(f64),
    /// An inset computed at measurement time.
    Dynamic(Rc<dyn Fn() -> f64>),
}

impl Offset {
    /// Creates a dynamic offset from a closure.
    pub fn dynamic(f: impl Fn() -> f64 + 'static) -> Self {
        Self::Dynamic(Rc::new(f))
    }

    /// Resolves the offset to pixels, calling the closure for dynamic offsets.
    #[must_use]
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Fixed(v) => *v,
            Self::Dynamic(f) => f(),
        }
    }

    /// Returns `true` if this offset is re-evaluated per measurement.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

impl From<f64> for Offset {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Per-edge insets that carve the tracking window out of the viewport.
///
/// Positive values shrink the window, negative values grow it past the
/// viewport edges.
///
/// ```
/// use understory_progress::{Offset, Offsets};
///
/// let offsets = Offsets {
///     top: Offset::Fixed(20.0),
///     bottom: Offset::dynamic(|| 40.0),
///     ..Offsets::default()
/// };
/// let insets = offsets.resolve();
/// assert_eq!(insets.y0, 20.0);
/// assert_eq!(insets.y1, 40.0);
/// assert_eq!(insets.x0, 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Offsets {
    /// Inset from the top viewport edge.
    pub top: Offset,
    /// Inset from the right viewport edge.
    pub right: Offset,
    /// Inset from the bottom viewport edge.
    pub bottom: Offset,
    /// Inset from the left viewport edge.
    pub left: Offset,
}

impl Offsets {
    /// The same fixed inset on all four sides.
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self::symmetric(value, value)
    }

    /// Fixed insets mirrored across each axis: `x` for left and right, `y`
    /// for top and bottom.
    #[must_use]
    pub fn symmetric(x: f64, y: f64) -> Self {
        Self {
            top: Offset::Fixed(y),
            right: Offset::Fixed(x),
            bottom: Offset::Fixed(y),
            left: Offset::Fixed(x),
        }
    }

    /// Resolves all four sides into insets.
    ///
    /// Dynamic offsets are called once each, in top, right, bottom, left
    /// order.
    #[must_use]
    pub fn resolve(&self) -> Insets {
        let top = self.top.resolve();
        let right = self.right.resolve();
        let bottom = self.bottom.resolve();
        let left = self.left.resolve();
        Insets::new(left, top, right, bottom)
    }
}
