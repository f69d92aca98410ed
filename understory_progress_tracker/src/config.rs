// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use understory_progress::{Edge, Offsets, Progress, ProgressOptions, TrackingMode};

/// Class names a tracker applies to its element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNames {
    /// Present while the element is in bounds horizontally.
    pub visible_x: String,
    /// Present while the element is in bounds vertically.
    pub visible_y: String,
    /// Added on `init`, removed on `destroy`.
    pub plugin_loaded: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            visible_x: "visible-x".to_string(),
            visible_y: "visible-y".to_string(),
            plugin_loaded: "pluginLoaded".to_string(),
        }
    }
}

impl ClassNames {
    /// All configured names.
    #[must_use]
    pub fn all(&self) -> [&str; 3] {
        [
            self.visible_x.as_str(),
            self.visible_y.as_str(),
            self.plugin_loaded.as_str(),
        ]
    }
}

type ProgressCallback = Box<dyn FnMut(&Progress)>;
type EdgeCallback = Box<dyn FnMut()>;

/// User callbacks; every slot is optional.
///
/// ```
/// use understory_progress_tracker::Callbacks;
///
/// let callbacks = Callbacks::new()
///     .on_progress(|p| println!("{p}"))
///     .on_top(|| println!("left through the top"));
/// assert!(callbacks.has_progress());
/// ```
#[derive(Default)]
pub struct Callbacks {
    progress: Option<ProgressCallback>,
    top: Option<EdgeCallback>,
    right: Option<EdgeCallback>,
    bottom: Option<EdgeCallback>,
    left: Option<EdgeCallback>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("progress", &self.progress.is_some())
            .field("top", &self.top.is_some())
            .field("right", &self.right.is_some())
            .field("bottom", &self.bottom.is_some())
            .field("left", &self.left.is_some())
            .finish()
    }
}

impl Callbacks {
    /// No callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the clamped record whenever the element is in bounds on
    /// both axes.
    #[must_use]
    pub fn on_progress(mut self, f: impl FnMut(&Progress) + 'static) -> Self {
        self.progress = Some(Box::new(f));
        self
    }

    /// Called once when the element moves out past the top edge.
    #[must_use]
    pub fn on_top(self, f: impl FnMut() + 'static) -> Self {
        self.on_edge(Edge::Top, f)
    }

    /// Called once when the element moves out past the right edge.
    #[must_use]
    pub fn on_right(self, f: impl FnMut() + 'static) -> Self {
        self.on_edge(Edge::Right, f)
    }

    /// Called once when the element moves out past the bottom edge.
    #[must_use]
    pub fn on_bottom(self, f: impl FnMut() + 'static) -> Self {
        self.on_edge(Edge::Bottom, f)
    }

    /// Called once when the element moves out past the left edge.
    #[must_use]
    pub fn on_left(self, f: impl FnMut() + 'static) -> Self {
        self.on_edge(Edge::Left, f)
    }

    /// Sets the callback for `edge`.
    #[must_use]
    pub fn on_edge(mut self, edge: Edge, f: impl FnMut() + 'static) -> Self {
        *self.edge_slot(edge) = Some(Box::new(f));
        self
    }

    /// Returns `true` if a combined progress callback is set.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.progress.is_some()
    }

    /// Returns `true` if a callback is set for `edge`.
    #[must_use]
    pub fn has_edge(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top.is_some(),
            Edge::Right => self.right.is_some(),
            Edge::Bottom => self.bottom.is_some(),
            Edge::Left => self.left.is_some(),
        }
    }

    pub(crate) fn progress(&mut self, progress: &Progress) {
        if let Some(f) = self.progress.as_mut() {
            f(progress);
        }
    }

    pub(crate) fn edge(&mut self, edge: Edge) {
        if let Some(f) = self.edge_slot(edge).as_mut() {
            f();
        }
    }

    fn edge_slot(&mut self, edge: Edge) -> &mut Option<EdgeCallback> {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        }
    }
}

/// Tracker configuration, built over [`TrackerConfig::default`].
///
/// ```
/// use understory_progress::{Offsets, TrackingMode};
/// use understory_progress_tracker::{Callbacks, TrackerConfig};
///
/// let config = TrackerConfig {
///     mode: TrackingMode::Contained,
///     offsets: Offsets::symmetric(0.0, 100.0),
///     decimals: 4,
///     callbacks: Callbacks::new().on_progress(|_| {}),
///     ..TrackerConfig::default()
/// };
/// assert_eq!(config.events, ["scroll", "resize"]);
/// ```
#[derive(Debug)]
pub struct TrackerConfig {
    /// Class names applied to the element.
    pub class_names: ClassNames,
    /// Entering vs. contained tracking.
    pub mode: TrackingMode,
    /// Tracking window insets.
    pub offsets: Offsets,
    /// Decimal places of reported progress; also sets the tolerance
    /// `10^-decimals`.
    pub decimals: u32,
    /// Event names that trigger a re-measurement, in subscription order.
    pub events: Vec<String>,
    /// User callbacks.
    pub callbacks: Callbacks,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            class_names: ClassNames::default(),
            mode: TrackingMode::Entering,
            offsets: Offsets::default(),
            decimals: 10,
            events: vec!["scroll".to_string(), "resize".to_string()],
            callbacks: Callbacks::default(),
        }
    }
}

impl TrackerConfig {
    pub(crate) fn progress_options(&self) -> ProgressOptions {
        ProgressOptions {
            offsets: self.offsets.clone(),
            mode: self.mode,
            decimals: self.decimals,
        }
    }
}
