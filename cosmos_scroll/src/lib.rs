// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cosmos_scroll --heading-base-level=0

//! Cosmos Scroll: scroll-driven UI state derived from viewport geometry.
//!
//! This crate turns raw geometry (an element's bounding box, the viewport
//! height, the window scroll offset) into the small pieces of state that drive
//! reveal animations and navigation chrome:
//!
//! - [`progress`]: how far a section has scrolled through the viewport, plus
//!   an in-view flag ([`compute_progress`], [`ScrollProgressTracker`]).
//! - [`visibility`]: whether enough of an element is on screen, optionally
//!   latching after the first reveal ([`VisibilityObserver`]).
//! - [`direction`]: the direction of the last window scroll and whether fixed
//!   navigation should show ([`ScrollDirectionTracker`]).
//! - [`section`]: which page section the reader is in ([`SectionSpy`]).
//! - [`listeners`]: an explicit subscribe/unsubscribe registry that fans scroll
//!   and resize notifications out to consumers ([`ScrollListeners`]).
//!
//! It does **not** read the DOM or any windowing API. Hosts measure geometry
//! themselves and pass it in; every computation recomputes from the values it
//! is given, so coalesced or dropped scroll notifications are harmless.
//!
//! Boxes are [`kurbo::Rect`] values in viewport coordinates: `y` grows
//! downward and `0` is the top edge of the viewport.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::cell::RefCell;
//! use kurbo::Rect;
//! use cosmos_scroll::{
//!     ScrollDirectionTracker, ScrollListeners, ScrollOptions, ScrollProgressTracker,
//!     ViewportEvent,
//! };
//!
//! // A 1200px section that starts 1000px down the document.
//! let section_at = |scroll_y: f64| Some(Rect::new(0.0, 1000.0 - scroll_y, 800.0, 2200.0 - scroll_y));
//!
//! let progress = RefCell::new(ScrollProgressTracker::new(ScrollOptions::default()));
//! let direction = RefCell::new(ScrollDirectionTracker::new());
//!
//! let mut listeners = ScrollListeners::new();
//! listeners.subscribe(|e| {
//!     progress.borrow_mut().handle_event(e, section_at(e.scroll_y));
//! });
//! listeners.subscribe(|e| {
//!     direction.borrow_mut().update(e.scroll_y);
//! });
//!
//! listeners.notify(&ViewportEvent::scroll(1000.0, 800.0));
//! assert!(progress.borrow().progress().is_in_view);
//! assert!(!direction.borrow().nav_visible());
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `tracing`: emit `trace!` events from [`ScrollListeners`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod direction;
pub mod listeners;
pub mod progress;
pub mod section;
pub mod visibility;

pub use direction::{NAV_REVEAL_OFFSET, ScrollDirection, ScrollDirectionTracker, nav_visible};
pub use listeners::{ListenerId, ScrollListeners, ViewportEvent, ViewportEventKind};
pub use progress::{ScrollOptions, ScrollProgress, ScrollProgressTracker, compute_progress};
pub use section::SectionSpy;
pub use visibility::{VisibilityObserver, intersection_ratio};
