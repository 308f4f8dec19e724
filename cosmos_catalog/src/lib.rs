// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cosmos_catalog --heading-base-level=0

//! Cosmos Catalog: the immutable content model behind the portfolio.
//!
//! This crate holds the records that the showcase and the timeline render:
//!
//! - [`ProjectRecord`]: a project with a [`Category`], a featured flag, and
//!   [`Markets`] / [`Regions`] tag sets used by filtering.
//! - [`TimelineMilestone`]: a biographical milestone with optional project cards.
//! - [`Catalog`]: an ordered, validated collection of both, built once and only
//!   read afterwards.
//!
//! Category labels and accent colors live in a compile-time table reached
//! through [`Category::style`]; nothing here is mutable after construction.
//!
//! ## Minimal example
//!
//! ```rust
//! use cosmos_catalog::{Catalog, Category, Markets, ProjectRecord, Regions};
//!
//! let catalog = Catalog::new(
//!     vec![
//!         ProjectRecord::new("truvi", "TruVi", Category::Productivity)
//!             .with_featured(true)
//!             .with_markets(Markets::B2B)
//!             .with_regions(Regions::US),
//!         ProjectRecord::new("ulala-ai", "ULALA AI", Category::Education)
//!             .with_markets(Markets::B2C)
//!             .with_regions(Regions::US),
//!     ],
//!     Vec::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.project("truvi").unwrap().category.label(), "Productivity");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every type, using the site's
//!   camelCase JSON names (`targetMarket`, `region`, `shippedInDays`,
//!   `launchDate`, and `type` for milestone kinds). Deserializing a
//!   [`Catalog`] runs the same duplicate-id validation as [`Catalog::new`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod catalog;
mod category;
mod project;
mod tags;
mod timeline;

pub use catalog::{Catalog, CatalogError};
pub use category::{Category, CategoryStyle};
pub use project::{ProjectRecord, ProjectStatus};
pub use tags::{Market, Markets, Region, Regions};
pub use timeline::{MilestoneKind, MilestoneProject, TimelineMilestone};
