// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cosmos_filter --heading-base-level=0

//! Cosmos Filter: the showcase's client-side filter engine.
//!
//! Given a [`Catalog`](cosmos_catalog::Catalog) and a [`FilterState`], this
//! crate computes which projects are visible and how many projects sit behind
//! each primary chip. Everything is a pure function of its inputs; the state
//! type only records user selections.
//!
//! - [`FilterState`]: the primary chip plus market and region multi-selects,
//!   with a revision counter that bumps on real changes.
//! - [`compute_visible`]: the visible records, in catalog order.
//! - [`compute_counts`]: chip counts over the unfiltered catalog.
//! - [`FilterCache`]: an optional memoization layer keyed on [`FilterKey`].
//!
//! ## Filtering rules
//!
//! Stages combine with AND; selections within a stage combine with OR:
//!
//! 1. Primary: `All` keeps everything, `Featured` keeps featured records, a
//!    category keeps that category.
//! 2. Markets: with a non-empty selection, keep records sharing at least one
//!    selected market. An empty selection does not constrain.
//! 3. Regions: same as markets.
//!
//! ## Minimal example
//!
//! ```rust
//! use cosmos_catalog::{Catalog, Category, Markets, ProjectRecord, Region, Regions};
//! use cosmos_filter::{FilterState, PrimaryFilter, compute_counts, compute_visible};
//!
//! let catalog = Catalog::new(
//!     vec![
//!         ProjectRecord::new("vibewriting", "VibeWriting", Category::Productivity)
//!             .with_markets(Markets::B2C)
//!             .with_regions(Regions::US | Regions::KOREA),
//!         ProjectRecord::new("truvi", "TruVi", Category::Productivity)
//!             .with_featured(true)
//!             .with_markets(Markets::B2B)
//!             .with_regions(Regions::US),
//!     ],
//!     Vec::new(),
//! )
//! .unwrap();
//!
//! let mut state = FilterState::new();
//! state.set_primary(PrimaryFilter::Category(Category::Productivity));
//! state.toggle_region(Region::Korea);
//!
//! let visible = compute_visible(&catalog, &state);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id, "vibewriting");
//!
//! // Chip counts ignore secondary selections.
//! assert_eq!(compute_counts(&catalog).get(PrimaryFilter::Featured), 1);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace!` events for [`FilterCache`] hits and misses.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod engine;
mod primary;
mod state;

pub use cache::FilterCache;
pub use engine::{FilterCounts, compute_counts, compute_visible, visible_indices};
pub use primary::PrimaryFilter;
pub use state::{FilterKey, FilterState};
