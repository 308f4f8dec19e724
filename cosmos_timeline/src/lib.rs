// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cosmos_timeline --heading-base-level=0

//! Cosmos Timeline: staggered reveal state for a scroll-tracked timeline.
//!
//! A timeline of `N` milestones is tracked as one container; only the
//! container's scroll progress is measured. Each milestone `i` gets a fixed
//! position `i / (N - 1)` and derives everything else from the single
//! progress value:
//!
//! - **active** while progress is within [`ACTIVE_WINDOW`] of its position;
//! - **reveal** `1` once progress has passed its position, otherwise the
//!   fraction `progress / position`.
//!
//! That produces a staggered reveal without per-milestone scroll tracking.
//! [`constellation_nodes`] and [`constellation_path`] lay out the decorative
//! star path that connects the milestones.
//!
//! ## Minimal example
//!
//! ```rust
//! use cosmos_scroll::ScrollProgress;
//! use cosmos_timeline::derive_from_scroll;
//!
//! let scroll = ScrollProgress { progress: 0.5, is_in_view: true };
//! let states = derive_from_scroll(7, &scroll);
//!
//! let highlighted: Vec<_> = states
//!     .iter()
//!     .filter(|s| s.is_highlighted(scroll.is_in_view))
//!     .map(|s| s.index)
//!     .collect();
//! assert_eq!(highlighted, [3]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod constellation;
mod milestone;

pub use constellation::{constellation_nodes, constellation_path};
pub use milestone::{
    ACTIVE_WINDOW, CARD_SHOWN_THRESHOLD, MilestoneState, NODE_LIT_THRESHOLD, derive_from_scroll,
    derive_milestones, milestone_position, reveal_progress,
};
