// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;
use understory_progress::{Axis, Progress, ProgressOptions};

use crate::config::{Callbacks, ClassNames, TrackerConfig};
use crate::dispatch::{Action, Latch};
use crate::error::{LifecycleError, MeasurementError};
use crate::events::EventSource;
use crate::host::{Element, Viewport};

/// Measures `element` once against `viewport`.
///
/// Fails when the element is not laid out, or when the geometry leaves an
/// axis without a finite fraction.
pub fn measure_element<E: Element, V: Viewport>(
    element: &E,
    viewport: &V,
    options: &ProgressOptions,
) -> Result<Progress, MeasurementError> {
    let rect = element.bounding_box().ok_or(MeasurementError::Detached)?;
    let progress = options.measure(rect, viewport.size());
    if !progress.right().is_finite() {
        return Err(MeasurementError::Degenerate { axis: Axis::X });
    }
    if !progress.bottom().is_finite() {
        return Err(MeasurementError::Degenerate { axis: Axis::Y });
    }
    Ok(progress)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Unbound,
    Tracking,
    Destroyed,
}

struct State<E, V> {
    options: ProgressOptions,
    class_names: ClassNames,
    viewport: V,
    element: Option<E>,
    latch: Latch,
}

impl<E: Element, V: Viewport> State<E, V> {
    /// Measures, updates visibility classes and the latch, and returns the
    /// callback to run.
    fn update(&mut self) -> Option<Action> {
        let element = self.element.as_ref()?;
        let progress = match measure_element(element, &self.viewport, &self.options) {
            Ok(progress) => progress,
            Err(err) => {
                log::debug!("skipping dispatch: {err}");
                return None;
            }
        };
        element.toggle_class(&self.class_names.visible_x, progress.in_bounds_x());
        element.toggle_class(&self.class_names.visible_y, progress.in_bounds_y());
        self.latch.resolve(&progress)
    }
}

/// State shared between the handle and its event subscriptions.
///
/// Callbacks live in their own cell so user code runs with `state` released.
struct Shared<E, V> {
    state: RefCell<State<E, V>>,
    callbacks: RefCell<Callbacks>,
}

/// Measures and dispatches once.
///
/// The callbacks are claimed before measuring: a trigger raised from inside a
/// callback is dropped without touching classes or the latch, so the next
/// trigger still sees the crossing.
fn refresh<E: Element, V: Viewport>(shared: &Shared<E, V>) {
    let Ok(mut callbacks) = shared.callbacks.try_borrow_mut() else {
        log::trace!("trigger from inside a callback; skipped");
        return;
    };
    let action = match shared.state.try_borrow_mut() {
        Ok(mut state) => state.update(),
        Err(_) => {
            log::trace!("re-entrant trigger while measuring; skipped");
            return;
        }
    };
    let Some(action) = action else {
        return;
    };
    match action {
        Action::Progress(progress) => callbacks.progress(&progress),
        Action::Edge(edge) => callbacks.edge(edge),
    }
}

/// Creates a tracker. Equivalent to [`Tracker::new`].
pub fn tracker<E, V, S>(config: TrackerConfig, viewport: V, events: S) -> Tracker<E, V, S>
where
    E: Element + 'static,
    V: Viewport + 'static,
    S: EventSource,
{
    Tracker::new(config, viewport, events)
}

/// Drives progress callbacks for one element.
///
/// A tracker is created from a [`TrackerConfig`], bound to a single element
/// with [`Tracker::init`], and released with [`Tracker::destroy`]. Nothing
/// else is exposed; configuration, latch state and subscriptions are private.
///
/// Lifecycle: `Unbound` → `Tracking` → `Destroyed`. Calling `init` or
/// `destroy` out of order does nothing and returns a [`LifecycleError`].
///
/// Dropping a tracker that is still tracking cancels its subscriptions but
/// leaves the element's classes untouched.
pub struct Tracker<E, V, S>
where
    S: EventSource,
{
    shared: Rc<Shared<E, V>>,
    events: S,
    event_names: Vec<String>,
    subscriptions: SmallVec<[(String, S::Handle); 2]>,
    lifecycle: Lifecycle,
}

impl<E, V, S> fmt::Debug for Tracker<E, V, S>
where
    S: EventSource,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("lifecycle", &self.lifecycle)
            .field("event_names", &self.event_names)
            .field("subscriptions", &self.subscriptions.len())
            .finish_non_exhaustive()
    }
}

impl<E, V, S> Tracker<E, V, S>
where
    E: Element + 'static,
    V: Viewport + 'static,
    S: EventSource,
{
    /// Creates an unbound tracker. No element is touched until
    /// [`Tracker::init`].
    pub fn new(config: TrackerConfig, viewport: V, events: S) -> Self {
        let options = config.progress_options();
        let TrackerConfig {
            class_names,
            events: event_names,
            callbacks,
            ..
        } = config;
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(State {
                    options,
                    class_names,
                    viewport,
                    element: None,
                    latch: Latch::default(),
                }),
                callbacks: RefCell::new(callbacks),
            }),
            events,
            event_names,
            subscriptions: SmallVec::new(),
            lifecycle: Lifecycle::Unbound,
        }
    }

    /// Binds `element`, marks it with the `plugin_loaded` class, dispatches
    /// once for the current position, then subscribes to the configured
    /// events.
    pub fn init(&mut self, element: E) -> Result<(), LifecycleError> {
        match self.lifecycle {
            Lifecycle::Unbound => {}
            Lifecycle::Tracking => return Err(misuse(LifecycleError::AlreadyInitialized)),
            Lifecycle::Destroyed => return Err(misuse(LifecycleError::Destroyed)),
        }
        {
            let Ok(mut state) = self.shared.state.try_borrow_mut() else {
                return Err(misuse(LifecycleError::Busy));
            };
            element.add_class(&state.class_names.plugin_loaded);
            state.element = Some(element);
        }
        self.lifecycle = Lifecycle::Tracking;

        refresh(&self.shared);

        for name in &self.event_names {
            let weak: Weak<Shared<E, V>> = Rc::downgrade(&self.shared);
            let handle = self.events.subscribe(
                name,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        refresh(&shared);
                    }
                }),
            );
            self.subscriptions.push((name.clone(), handle));
        }
        log::debug!("tracking element on {:?}", self.event_names);
        Ok(())
    }

    /// Cancels every subscription made by [`Tracker::init`] and removes all
    /// configured class names from the element.
    pub fn destroy(&mut self) -> Result<(), LifecycleError> {
        match self.lifecycle {
            Lifecycle::Tracking => {}
            Lifecycle::Unbound => return Err(misuse(LifecycleError::NotInitialized)),
            Lifecycle::Destroyed => return Err(misuse(LifecycleError::Destroyed)),
        }
        let shared = Rc::clone(&self.shared);
        let Ok(mut state) = shared.state.try_borrow_mut() else {
            return Err(misuse(LifecycleError::Busy));
        };
        self.cancel_subscriptions();
        if let Some(element) = state.element.take() {
            for name in state.class_names.all() {
                element.remove_class(name);
            }
        }
        state.latch.reset();
        self.lifecycle = Lifecycle::Destroyed;
        log::debug!("tracker destroyed");
        Ok(())
    }

    fn cancel_subscriptions(&mut self) {
        for (name, handle) in self.subscriptions.drain(..) {
            log::trace!("cancelling `{name}` subscription");
            self.events.cancel(handle);
        }
    }
}

impl<E, V, S> Drop for Tracker<E, V, S>
where
    S: EventSource,
{
    fn drop(&mut self) {
        if !self.subscriptions.is_empty() {
            log::debug!("tracker dropped while tracking; cancelling subscriptions");
        }
        for (_, handle) in self.subscriptions.drain(..) {
            self.events.cancel(handle);
        }
    }
}

fn misuse(err: LifecycleError) -> LifecycleError {
    log::warn!("ignoring tracker lifecycle call: {err}");
    err
}
