// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-through progress of a tracked element.
//!
//! Progress runs from `0` when the element's top reaches the bottom of the
//! viewport (less `offset`) to `1` when its top has moved one element-height
//! above the viewport top (plus `offset`).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use cosmos_scroll::{ScrollOptions, compute_progress};
//!
//! let options = ScrollOptions { offset: 100.0, ..ScrollOptions::default() };
//!
//! // 800px viewport, 1000px tall element whose top sits at y = 700.
//! let rect = Rect::new(0.0, 700.0, 600.0, 1700.0);
//! let state = compute_progress(Some(rect), 800.0, &options);
//! assert_eq!(state.progress, 0.0);
//! assert!(state.is_in_view);
//!
//! // Unmeasured elements read as neutral.
//! let state = compute_progress(None, 800.0, &options);
//! assert_eq!(state.progress, 0.0);
//! assert!(!state.is_in_view);
//! ```

use kurbo::Rect;

use crate::listeners::ViewportEvent;

/// Tuning for [`compute_progress`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollOptions {
    /// Margin kept from both viewport edges by the in-view test.
    pub threshold: f64,
    /// Shrinks the scroll-through range at both ends.
    pub offset: f64,
}

/// Derived scroll state for one tracked element.
///
/// The default value (`progress = 0`, not in view) is what an unmeasured
/// element reports.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    /// Scroll-through progress in `[0, 1]`.
    pub progress: f64,
    /// Whether the element overlaps the viewport, less `threshold` at each edge.
    pub is_in_view: bool,
}

/// Computes progress and in-view state from an element's bounding box.
///
/// `rect` is the element's box in viewport coordinates (y grows downward,
/// `0` is the viewport top); `None` means the element is not mounted or not
/// yet measured. The result is always within `[0, 1]`, including when the
/// scroll range collapses to zero.
#[must_use]
pub fn compute_progress(
    rect: Option<Rect>,
    viewport_height: f64,
    options: &ScrollOptions,
) -> ScrollProgress {
    let Some(rect) = rect else {
        return ScrollProgress::default();
    };
    let rect = rect.abs();

    let scroll_start = viewport_height - options.offset;
    let scroll_end = -rect.height() + options.offset;
    let total = scroll_start - scroll_end;
    let top = rect.y0;

    let progress = if total == 0.0 {
        if top <= scroll_start { 1.0 } else { 0.0 }
    } else {
        let raw = (scroll_start - top) / total;
        if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
    };

    ScrollProgress {
        progress,
        is_in_view: rect.y0 < viewport_height - options.threshold && rect.y1 > options.threshold,
    }
}

/// Holds the options and last result for one tracked element.
///
/// Every update recomputes from the geometry passed in, so dropped or
/// coalesced scroll notifications never cause drift.
#[derive(Clone, Debug, Default)]
pub struct ScrollProgressTracker {
    options: ScrollOptions,
    last: ScrollProgress,
}

impl ScrollProgressTracker {
    /// Creates a tracker with the given options.
    #[must_use]
    pub fn new(options: ScrollOptions) -> Self {
        Self {
            options,
            last: ScrollProgress::default(),
        }
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Recomputes from current geometry and stores the result.
    pub fn update(&mut self, rect: Option<Rect>, viewport_height: f64) -> ScrollProgress {
        self.last = compute_progress(rect, viewport_height, &self.options);
        self.last
    }

    /// Same as [`ScrollProgressTracker::update`], taking the viewport height
    /// from a scroll or resize notification.
    pub fn handle_event(&mut self, event: &ViewportEvent, rect: Option<Rect>) -> ScrollProgress {
        self.update(rect, event.viewport_height)
    }

    /// Returns the last computed value.
    #[must_use]
    pub fn progress(&self) -> ScrollProgress {
        self.last
    }
}
