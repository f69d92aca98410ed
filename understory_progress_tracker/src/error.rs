// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_progress::Axis;

/// Why a one-shot measurement produced no usable progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MeasurementError {
    /// The element reported no bounding box.
    #[error("element is not laid out")]
    Detached,
    /// An axis had a zero-length denominator, so its progress is undefined.
    #[error("degenerate geometry on the {axis:?} axis")]
    Degenerate {
        /// The axis without a finite fraction.
        axis: Axis,
    },
}

/// Lifecycle misuse of a [`Tracker`](crate::Tracker).
///
/// Misuse never changes tracker state; the error is informational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    /// `init` was called on a tracker that is already tracking an element.
    #[error("tracker is already initialized")]
    AlreadyInitialized,
    /// `destroy` was called before `init`.
    #[error("tracker was never initialized")]
    NotInitialized,
    /// The tracker has been destroyed; it cannot be reused.
    #[error("tracker has been destroyed")]
    Destroyed,
    /// The tracker's state is borrowed by a measurement in progress.
    #[error("tracker is busy measuring")]
    Busy,
}
