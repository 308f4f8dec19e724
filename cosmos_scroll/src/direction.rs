// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window scroll direction, for showing and hiding fixed navigation.

/// Direction of the most recent scroll movement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Content moved toward the top of the document.
    Up,
    /// Content moved toward the bottom of the document.
    #[default]
    Down,
}

/// Scroll offset below which navigation is always shown.
pub const NAV_REVEAL_OFFSET: f64 = 100.0;

/// Returns `true` if fixed navigation should be shown.
///
/// Navigation shows near the top of the page and whenever the user scrolls up.
#[must_use]
pub fn nav_visible(scroll_y: f64, direction: ScrollDirection) -> bool {
    scroll_y < NAV_REVEAL_OFFSET || direction == ScrollDirection::Up
}

/// Tracks the last window scroll offset and the direction of the last move.
///
/// Starts at offset `0` heading [`ScrollDirection::Down`]. An update with an
/// unchanged offset keeps the previous direction.
///
/// ```
/// use cosmos_scroll::{ScrollDirection, ScrollDirectionTracker};
///
/// let mut tracker = ScrollDirectionTracker::new();
/// let seen: Vec<_> = [0.0, 50.0, 30.0, 30.0, 80.0]
///     .into_iter()
///     .map(|y| tracker.update(y))
///     .collect();
/// use ScrollDirection::{Down, Up};
/// assert_eq!(seen, [Down, Down, Up, Up, Down]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollDirectionTracker {
    last_y: f64,
    direction: ScrollDirection,
}

impl ScrollDirectionTracker {
    /// Creates a tracker at offset `0`, heading down.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_y: 0.0,
            direction: ScrollDirection::Down,
        }
    }

    /// Records a new offset and returns the resulting direction.
    pub fn update(&mut self, scroll_y: f64) -> ScrollDirection {
        if scroll_y > self.last_y {
            self.direction = ScrollDirection::Down;
        } else if scroll_y < self.last_y {
            self.direction = ScrollDirection::Up;
        }
        self.last_y = scroll_y;
        self.direction
    }

    /// Returns the last recorded offset.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.last_y
    }

    /// Returns the direction of the last move.
    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Returns `true` if fixed navigation should be shown.
    #[must_use]
    pub fn nav_visible(&self) -> bool {
        nav_visible(self.last_y, self.direction)
    }
}
