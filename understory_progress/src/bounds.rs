// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small numeric helpers shared by measurement and dispatch.
//!
//! Progress values live on a decimal grid of `decimals` places. The grid is
//! padded by one step on each side (the *tolerance window*
//! `[-ε, 1 + ε]` with `ε = 10^-decimals`), and the two padding values act as
//! out-of-range sentinels.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

/// Largest supported number of decimal places.
///
/// An `f64` near `1.0` carries roughly 15 to 16 significant decimal digits, so
/// larger precisions are treated as this value.
pub const MAX_DECIMALS: u32 = 15;

/// Returns `10^decimals` (with `decimals` capped at [`MAX_DECIMALS`]).
///
/// Built by repeated multiplication so every step stays an exactly
/// representable power of ten.
#[must_use]
pub fn scale(decimals: u32) -> f64 {
    let mut scale = 1.0_f64;
    for _ in 0..decimals.min(MAX_DECIMALS) {
        scale *= 10.0;
    }
    scale
}

/// Returns the tolerance step `10^-decimals`.
///
/// ```
/// use understory_progress::bounds::tolerance;
///
/// assert_eq!(tolerance(0), 1.0);
/// assert_eq!(tolerance(2), 0.01);
/// ```
#[must_use]
pub fn tolerance(decimals: u32) -> f64 {
    1.0 / scale(decimals)
}

/// Clamps `n` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics on inverted bounds (the bounds are
/// swapped), and a `NaN` input stays `NaN`.
///
/// ```
/// use understory_progress::bounds::min_max;
///
/// assert_eq!(min_max(5.0, 0.0, 1.0), 1.0);
/// assert_eq!(min_max(-5.0, 0.0, 1.0), 0.0);
/// assert_eq!(min_max(-5.0, 2.0, -2.0), -2.0);
/// assert_eq!(min_max(0.5, 0.0, 1.0), 0.5);
/// assert!(min_max(f64::NAN, 0.0, 1.0).is_nan());
/// ```
#[must_use]
pub fn min_max(n: f64, min: f64, max: f64) -> f64 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if n < min {
        min
    } else if n > max {
        max
    } else {
        n
    }
}

/// Returns `true` if `n` lies strictly between `min` and `max`.
///
/// ```
/// use understory_progress::bounds::in_bound;
///
/// assert!(!in_bound(0.0, 0.0, 1.0));
/// assert!(!in_bound(1.0, 0.0, 1.0));
/// assert!(in_bound(0.999, 0.0, 1.0));
/// assert!(in_bound(-4.9, -5.0, 0.0));
/// assert!(!in_bound(f64::NAN, 0.0, 1.0));
/// ```
#[must_use]
pub fn in_bound(n: f64, min: f64, max: f64) -> bool {
    n > min && n < max
}

/// Rounds `n` to `decimals` places, halves away from zero.
///
/// Non-finite values are returned unchanged.
#[must_use]
pub fn round_to(n: f64, decimals: u32) -> f64 {
    if !n.is_finite() {
        return n;
    }
    let scale = scale(decimals);
    (n * scale).round() / scale
}

/// Returns `true` if a rounded progress value is inside the tolerance window.
///
/// Values on the `decimals` grid between `0` and `1` (inclusive) pass; the
/// sentinels `-ε` and `1 + ε`, anything beyond them, and `NaN` do not. The
/// comparison uses half a step of slack so last-bit rounding error on the
/// sentinels cannot flip the result.
#[must_use]
pub fn in_tolerance(n: f64, decimals: u32) -> bool {
    let half = tolerance(decimals) * 0.5;
    in_bound(n, -half, 1.0 + half)
}
