// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot and continuous "is this element on screen" observation.
//!
//! This is the boolean special case of [`compute_progress`](crate::compute_progress):
//! no progress value, just whether enough of the element overlaps the viewport.

use kurbo::Rect;

/// Fraction of `rect`'s height that lies inside a viewport of `viewport_height`.
///
/// Zero-height elements count as fully visible while inside the viewport.
#[must_use]
pub fn intersection_ratio(rect: Rect, viewport_height: f64) -> f64 {
    let rect = rect.abs();
    let height = rect.height();
    if height <= 0.0 {
        return if rect.y0 >= 0.0 && rect.y0 <= viewport_height {
            1.0
        } else {
            0.0
        };
    }
    let visible = (rect.y1.min(viewport_height) - rect.y0.max(0.0)).max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Reports whether an element is visible past a threshold fraction.
///
/// With `once` set, the flag latches after the first reveal, which is what
/// reveal-on-scroll animations want.
///
/// ```
/// use kurbo::Rect;
/// use cosmos_scroll::VisibilityObserver;
///
/// let mut observer = VisibilityObserver::new(0.1).once();
/// assert!(!observer.update(Some(Rect::new(0.0, 900.0, 10.0, 1000.0)), 800.0));
/// assert!(observer.update(Some(Rect::new(0.0, 700.0, 10.0, 800.0)), 800.0));
/// // Scrolled away again, but the reveal sticks.
/// assert!(observer.update(Some(Rect::new(0.0, 2000.0, 10.0, 2100.0)), 800.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibilityObserver {
    threshold: f64,
    once: bool,
    visible: bool,
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl VisibilityObserver {
    /// Creates an observer that reports visibility once at least `threshold`
    /// of the element's height is on screen.
    ///
    /// `threshold` is clamped to `[0, 1]`; `0` means any overlap.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            once: false,
            visible: false,
        }
    }

    /// Latches the flag after the first reveal.
    #[must_use]
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Returns the threshold fraction.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the last reported value.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Recomputes from current geometry.
    ///
    /// `None` (unmeasured) reads as not visible unless a latched reveal already happened.
    pub fn update(&mut self, rect: Option<Rect>, viewport_height: f64) -> bool {
        if self.once && self.visible {
            return true;
        }
        self.visible = rect.is_some_and(|rect| {
            let ratio = intersection_ratio(rect, viewport_height);
            ratio > 0.0 && ratio >= self.threshold
        });
        self.visible
    }
}
