// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared, throttled event hub.
//!
//! [`EventHub`] keeps one channel per event name and fans each delivery out
//! to every subscriber in subscription order. Deliveries are throttled per
//! event name: at most one per [`HubOptions::throttle_ms`] window. An event
//! emitted inside the window is remembered and delivered by the next
//! [`EventHub::poll`] once the window has elapsed, so the last scroll position
//! is never lost. Deferred events are delivered in the order of their latest
//! emit.
//!
//! Time is supplied by the caller as milliseconds, which keeps the hub
//! deterministic under test.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_progress_tracker::{EventHub, EventSource, HubOptions};
//!
//! let hub = EventHub::new(HubOptions { throttle_ms: 50, ..HubOptions::default() });
//! let hits = Rc::new(Cell::new(0));
//! let counter = hits.clone();
//! let sub = hub.subscribe("scroll", Box::new(move || counter.set(counter.get() + 1)));
//!
//! assert_eq!(hub.emit("scroll", 0), 1);
//! assert_eq!(hub.emit("scroll", 10), 0); // throttled, deferred
//! assert_eq!(hub.poll(60), 1);           // trailing delivery
//! assert_eq!(hits.get(), 2);
//!
//! hub.cancel(sub);
//! assert_eq!(hub.emit("scroll", 200), 0);
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use hashbrown::HashMap;

use crate::events::EventSource;

/// Hub tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HubOptions {
    /// Minimum time between two deliveries of the same event, in
    /// milliseconds. `0` disables throttling.
    pub throttle_ms: u64,
    /// Subscriber count per event name above which a warning is logged.
    pub limit: usize,
}

impl Default for HubOptions {
    fn default() -> Self {
        Self {
            throttle_ms: 50,
            limit: 100,
        }
    }
}

/// Handle for a hub subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Channel {
    listeners: Vec<(SubscriptionId, Rc<dyn Fn()>)>,
    last_delivery: Option<u64>,
    /// Sequence number of the latest deferred emit.
    pending: Option<u64>,
}

struct HubState {
    options: HubOptions,
    next_id: u64,
    next_deferral: u64,
    channels: HashMap<String, Channel>,
    /// Event name of every live subscription.
    owners: HashMap<SubscriptionId, String>,
}

/// Cloneable handle to a shared event hub.
#[derive(Clone)]
pub struct EventHub {
    state: Rc<RefCell<HubState>>,
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("EventHub")
            .field("options", &state.options)
            .field("channels", &state.channels.len())
            .finish_non_exhaustive()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new(HubOptions::default())
    }
}

impl EventHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new(options: HubOptions) -> Self {
        Self {
            state: Rc::new(RefCell::new(HubState {
                options,
                next_id: 0,
                next_deferral: 0,
                channels: HashMap::new(),
                owners: HashMap::new(),
            })),
        }
    }

    /// Returns the hub options.
    #[must_use]
    pub fn options(&self) -> HubOptions {
        self.state.borrow().options
    }

    /// Number of live subscriptions for `event`.
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.state
            .borrow()
            .channels
            .get(event)
            .map_or(0, |c| c.listeners.len())
    }

    /// Names of events that currently have at least one subscriber, sorted.
    #[must_use]
    pub fn registered_events(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.borrow().channels.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Delivers `event` at time `now_ms`, unless it is throttled.
    ///
    /// Returns the number of handlers that ran. A throttled emit returns `0`
    /// and is delivered later by [`EventHub::poll`].
    pub fn emit(&self, event: &str, now_ms: u64) -> usize {
        let listeners = {
            let mut state = self.state.borrow_mut();
            let HubState {
                options,
                next_deferral,
                channels,
                ..
            } = &mut *state;
            let Some(channel) = channels.get_mut(event) else {
                return 0;
            };
            if channel
                .last_delivery
                .is_some_and(|last| now_ms.saturating_sub(last) < options.throttle_ms)
            {
                channel.pending = Some(*next_deferral);
                *next_deferral += 1;
                return 0;
            }
            channel.last_delivery = Some(now_ms);
            channel.pending = None;
            channel.listeners.clone()
        };
        self.run(listeners)
    }

    /// Delivers every deferred event whose throttle window has elapsed by
    /// `now_ms`, in the order they were last emitted. Returns the number of
    /// handlers that ran.
    pub fn poll(&self, now_ms: u64) -> usize {
        let due: Vec<String> = {
            let state = self.state.borrow();
            let throttle = state.options.throttle_ms;
            let mut due: Vec<(u64, String)> = state
                .channels
                .iter()
                .filter(|(_, c)| {
                    c.last_delivery
                        .is_none_or(|last| now_ms.saturating_sub(last) >= throttle)
                })
                .filter_map(|(name, c)| c.pending.map(|seq| (seq, name.clone())))
                .collect();
            due.sort_unstable_by_key(|(seq, _)| *seq);
            due.into_iter().map(|(_, name)| name).collect()
        };
        due.iter().map(|name| self.emit(name, now_ms)).sum()
    }

    /// Runs a snapshot of listeners with the hub borrow released, skipping any
    /// that were cancelled by an earlier handler in the same delivery.
    fn run(&self, listeners: Vec<(SubscriptionId, Rc<dyn Fn()>)>) -> usize {
        let mut ran = 0;
        for (id, handler) in listeners {
            if !self.is_live(id) {
                continue;
            }
            handler();
            ran += 1;
        }
        ran
    }

    fn is_live(&self, id: SubscriptionId) -> bool {
        self.state.borrow().owners.contains_key(&id)
    }
}

impl EventSource for EventHub {
    type Handle = SubscriptionId;

    fn subscribe(&self, event: &str, handler: Box<dyn Fn()>) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        let limit = state.options.limit;

        let channel = state.channels.entry(event.to_string()).or_insert_with(|| {
            log::debug!("registering event channel `{event}`");
            Channel::default()
        });
        channel.listeners.push((id, Rc::from(handler)));
        if channel.listeners.len() > limit {
            log::warn!(
                "`{event}` has {} subscribers (limit {limit}); possible listener leak",
                channel.listeners.len()
            );
        }
        state.owners.insert(id, event.to_string());
        id
    }

    fn cancel(&self, handle: SubscriptionId) {
        let mut state = self.state.borrow_mut();
        let Some(name) = state.owners.remove(&handle) else {
            return;
        };
        let emptied = state.channels.get_mut(&name).is_some_and(|channel| {
            channel.listeners.retain(|(id, _)| *id != handle);
            channel.listeners.is_empty()
        });
        if emptied {
            log::debug!("removing event channel `{name}`");
            state.channels.remove(&name);
        }
    }
}
