// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

/// A global, named-event subscription facility (scroll, resize, ...).
///
/// Implementations are shared handles (methods take `&self`) and are expected
/// to rate-limit noisy events and to fan out one underlying registration per
/// event name to many subscribers. [`EventHub`](crate::EventHub) is the
/// provided implementation; a browser binding would wrap `window` listeners.
pub trait EventSource {
    /// Token returned by [`EventSource::subscribe`] and consumed by
    /// [`EventSource::cancel`].
    type Handle;

    /// Registers `handler` to run whenever `event` fires.
    fn subscribe(&self, event: &str, handler: Box<dyn Fn()>) -> Self::Handle;

    /// Removes a subscription. Cancelling a stale handle is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
