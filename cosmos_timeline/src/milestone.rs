// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-milestone state derived from the container's scroll progress.

use alloc::vec::Vec;

use cosmos_scroll::ScrollProgress;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Half-width of the progress window in which a milestone counts as active.
pub const ACTIVE_WINDOW: f64 = 0.15;

/// Reveal level above which a milestone's node is lit.
pub const NODE_LIT_THRESHOLD: f64 = 0.3;

/// Reveal level above which a milestone's card is shown.
pub const CARD_SHOWN_THRESHOLD: f64 = 0.2;

/// Normalized position of entry `index` among `count` evenly spaced entries.
///
/// A lone entry sits at `0`.
#[must_use]
pub fn milestone_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    index as f64 / (count - 1) as f64
}

/// Reveal level of an entry at `position` for a container at `global_progress`.
///
/// Entries the container has scrolled past are fully revealed; entries ahead
/// ramp up linearly. An entry at position `0` is revealed as soon as progress
/// is positive.
#[must_use]
pub fn reveal_progress(global_progress: f64, position: f64) -> f64 {
    if global_progress > position {
        1.0
    } else if position == 0.0 {
        0.0
    } else {
        global_progress / position
    }
}

/// Derived state for one timeline entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MilestoneState {
    /// Index within the timeline.
    pub index: usize,
    /// Normalized position in `[0, 1]`.
    pub position: f64,
    /// Whether the container's progress is within [`ACTIVE_WINDOW`] of `position`.
    pub is_active: bool,
    /// Local reveal level in `[0, 1]`.
    pub reveal: f64,
}

impl MilestoneState {
    /// Active and the container is on screen.
    #[must_use]
    pub fn is_highlighted(&self, container_in_view: bool) -> bool {
        self.is_active && container_in_view
    }

    /// Whether the milestone's node is drawn at full opacity.
    #[must_use]
    pub fn node_lit(&self) -> bool {
        self.reveal > NODE_LIT_THRESHOLD
    }

    /// Whether the milestone's card is shown.
    #[must_use]
    pub fn card_shown(&self) -> bool {
        self.reveal > CARD_SHOWN_THRESHOLD
    }
}

/// Derives the state of `count` evenly spaced entries from one progress value.
///
/// ```
/// use cosmos_timeline::derive_milestones;
///
/// let states = derive_milestones(7, 0.5);
/// assert!(states[3].is_active);
/// assert_eq!(states[0].reveal, 1.0);
/// assert_eq!(states[6].reveal, 0.5);
/// ```
#[must_use]
pub fn derive_milestones(count: usize, global_progress: f64) -> Vec<MilestoneState> {
    (0..count)
        .map(|index| {
            let position = milestone_position(index, count);
            MilestoneState {
                index,
                position,
                is_active: (global_progress - position).abs() < ACTIVE_WINDOW,
                reveal: reveal_progress(global_progress, position),
            }
        })
        .collect()
}

/// Same as [`derive_milestones`], reading progress from a scroll tracker result.
#[must_use]
pub fn derive_from_scroll(count: usize, scroll: &ScrollProgress) -> Vec<MilestoneState> {
    derive_milestones(count, scroll.progress)
}
