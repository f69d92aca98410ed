// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::bounds::{MAX_DECIMALS, in_tolerance, min_max};

/// Measurement axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal: the left and right edges.
    X,
    /// Vertical: the top and bottom edges.
    Y,
}

/// One edge of the tracking window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

impl Edge {
    /// All edges in top, right, bottom, left order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The axis this edge lies across.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Y,
            Self::Left | Self::Right => Axis::X,
        }
    }

    /// The edge on the other side of the same axis.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Stable index in [`Edge::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }
}

/// Result of one measurement: how far the element has crossed each edge of
/// the tracking window.
///
/// `top`/`bottom` and `left`/`right` are complementary (`top == 1 - bottom`
/// up to rounding). Values are rounded to [`Progress::decimals`] places and
/// lie in the tolerance window `[-ε, 1 + ε]`, where the two padding values
/// mean "out of range". A value may be `NaN` when the geometry is degenerate;
/// see [`Progress::is_finite`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    top: f64,
    right: f64,
    bottom: f64,
    left: f64,
    decimals: u32,
}

impl Progress {
    /// Creates a record from raw edge values.
    ///
    /// Values are stored as given; use [`crate::measure`] to derive them from
    /// geometry.
    #[must_use]
    pub fn new(top: f64, right: f64, bottom: f64, left: f64, decimals: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            decimals: decimals.min(MAX_DECIMALS),
        }
    }

    /// Progress across the top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Progress across the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Progress across the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Progress across the left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Number of decimal places the values were rounded to.
    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Progress across `edge`.
    #[must_use]
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Fixed-point rendering of the value for `edge`, with exactly
    /// [`Progress::decimals`] places.
    ///
    /// ```
    /// use understory_progress::{Edge, Progress};
    ///
    /// let p = Progress::new(0.5, 0.25, 0.5, 0.75, 3);
    /// assert_eq!(format!("{}", p.fixed(Edge::Right)), "0.250");
    /// ```
    #[must_use]
    pub fn fixed(&self, edge: Edge) -> Fixed {
        Fixed {
            value: self.get(edge),
            decimals: self.decimals,
        }
    }

    /// Returns `true` if every value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        Edge::ALL.iter().all(|&e| self.get(e).is_finite())
    }

    /// Returns `true` if the horizontal position is inside the tolerance
    /// window (checked on the right edge).
    #[must_use]
    pub fn in_bounds_x(&self) -> bool {
        in_tolerance(self.right, self.decimals)
    }

    /// Returns `true` if the vertical position is inside the tolerance
    /// window (checked on the bottom edge).
    #[must_use]
    pub fn in_bounds_y(&self) -> bool {
        in_tolerance(self.bottom, self.decimals)
    }

    /// Returns a copy with every value clamped into `[0, 1]`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            top: min_max(self.top, 0.0, 1.0),
            right: min_max(self.right, 0.0, 1.0),
            bottom: min_max(self.bottom, 0.0, 1.0),
            left: min_max(self.left, 0.0, 1.0),
            decimals: self.decimals,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top: {}, right: {}, bottom: {}, left: {}",
            self.fixed(Edge::Top),
            self.fixed(Edge::Right),
            self.fixed(Edge::Bottom),
            self.fixed(Edge::Left),
        )
    }
}

/// A progress value formatted with a fixed number of decimal places.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fixed {
    value: f64,
    decimals: u32,
}

impl Fixed {
    /// The underlying value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rounding leaves `-0.0` for tiny negatives; print it as `0`.
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        write!(f, "{:.*}", self.decimals as usize, value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn edges_pair_up_by_axis() {
        for edge in Edge::ALL {
            assert_eq!(edge.axis(), edge.opposite().axis());
            assert_ne!(edge, edge.opposite());
            assert_eq!(Edge::ALL[edge.index()], edge);
        }
    }

    #[test]
    fn fixed_pads_and_drops_negative_zero() {
        let p = Progress::new(-0.0, 1.0, 0.5, 0.0001, 4);
        assert_eq!(format!("{}", p.fixed(Edge::Top)), "0.0000");
        assert_eq!(format!("{}", p.fixed(Edge::Right)), "1.0000");
        assert_eq!(format!("{}", p.fixed(Edge::Left)), "0.0001");
        assert_eq!(
            format!("{p}"),
            "top: 0.0000, right: 1.0000, bottom: 0.5000, left: 0.0001"
        );
    }

    #[test]
    fn clamped_stays_in_unit_range() {
        let p = Progress::new(1.01, -0.01, -0.01, 1.01, 2).clamped();
        assert_eq!(p.top(), 1.0);
        assert_eq!(p.right(), 0.0);
        assert_eq!(p.bottom(), 0.0);
        assert_eq!(p.left(), 1.0);
        assert_eq!(p.decimals(), 2);
    }

    #[test]
    fn nan_is_not_finite_and_not_in_bounds() {
        let p = Progress::new(f64::NAN, 0.5, f64::NAN, 0.5, 2);
        assert!(!p.is_finite());
        assert!(!p.in_bounds_y());
        assert!(p.in_bounds_x());
    }
}
