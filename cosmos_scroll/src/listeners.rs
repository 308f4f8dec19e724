// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit subscription interface for viewport notifications.
//!
//! The host forwards scroll and resize notifications into [`ScrollListeners::notify`];
//! consumers register callbacks that recompute their derived state from the
//! event. Callbacks run synchronously, in registration order. Dropping the
//! registry, or calling [`ScrollListeners::clear`], releases every callback.
//!
//! ```
//! use core::cell::Cell;
//! use cosmos_scroll::{ScrollListeners, ViewportEvent};
//!
//! let last_y = Cell::new(0.0);
//! let mut listeners = ScrollListeners::new();
//! let id = listeners.subscribe(|event| last_y.set(event.scroll_y));
//!
//! listeners.notify(&ViewportEvent::scroll(120.0, 800.0));
//! assert_eq!(last_y.get(), 120.0);
//!
//! assert!(listeners.unsubscribe(id));
//! listeners.notify(&ViewportEvent::scroll(480.0, 800.0));
//! assert_eq!(last_y.get(), 120.0);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// What the host observed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewportEventKind {
    /// The document scrolled.
    Scroll,
    /// The viewport changed size.
    Resize,
}

/// A scroll or resize notification with current window geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportEvent {
    /// What happened.
    pub kind: ViewportEventKind,
    /// Current vertical scroll offset of the window.
    pub scroll_y: f64,
    /// Current viewport height.
    pub viewport_height: f64,
}

impl ViewportEvent {
    /// A scroll notification.
    #[must_use]
    pub const fn scroll(scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            kind: ViewportEventKind::Scroll,
            scroll_y,
            viewport_height,
        }
    }

    /// A resize notification.
    #[must_use]
    pub const fn resize(scroll_y: f64, viewport_height: f64) -> Self {
        Self {
            kind: ViewportEventKind::Resize,
            scroll_y,
            viewport_height,
        }
    }
}

/// Handle returned by [`ScrollListeners::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<'a> = Box<dyn FnMut(&ViewportEvent) + 'a>;

/// Registry of viewport callbacks.
///
/// The lifetime lets callbacks borrow the state they update.
#[derive(Default)]
pub struct ScrollListeners<'a> {
    next_id: u64,
    listeners: Vec<(ListenerId, Callback<'a>)>,
}

impl fmt::Debug for ScrollListeners<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollListeners")
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<'a> ScrollListeners<'a> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Registers a callback and returns its handle.
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&ViewportEvent) + 'a,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(callback)));
        #[cfg(feature = "tracing")]
        tracing::trace!(?id, count = self.listeners.len(), "viewport listener added");
        id
    }

    /// Removes a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let Some(index) = self.listeners.iter().position(|(other, _)| *other == id) else {
            return false;
        };
        drop(self.listeners.remove(index));
        #[cfg(feature = "tracing")]
        tracing::trace!(?id, count = self.listeners.len(), "viewport listener removed");
        true
    }

    /// Invokes every callback with `event`, in registration order.
    pub fn notify(&mut self, event: &ViewportEvent) {
        for (_, callback) in &mut self.listeners {
            callback(event);
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Releases every callback.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}
