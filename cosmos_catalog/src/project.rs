// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Project records.

use alloc::string::String;
use alloc::vec::Vec;

use crate::category::Category;
use crate::tags::{Markets, Regions};

/// Lifecycle status of a project.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ProjectStatus {
    /// Still running.
    #[default]
    Active,
    /// No longer maintained.
    Archived,
}

/// One entry of the project showcase.
///
/// Only `category`, `featured`, `markets` and `regions` are read by filtering;
/// the rest is presentational.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ProjectRecord {
    /// Unique identifier within a catalog.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line pitch.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tagline: String,
    /// Who the project is for.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub audience: Option<String>,
    /// What the project offers its audience.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<String>,
    /// Free-form technology tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    /// Product link.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub link: Option<String>,
    /// Source repository link.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub github: Option<String>,
    /// Shown under the "Featured" chip.
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
    /// Primary category.
    pub category: Category,
    /// Display year or year range, for example `2024-2025`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub year: String,
    /// Lifecycle status.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: ProjectStatus,
    /// Target markets.
    #[cfg_attr(feature = "serde", serde(default, rename = "targetMarket"))]
    pub markets: Markets,
    /// Market regions.
    #[cfg_attr(feature = "serde", serde(default, rename = "region"))]
    pub regions: Regions,
    /// Days from start to launch, for projects built on a fixed clock.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub shipped_in_days: Option<u32>,
    /// Launch date as ISO `YYYY-MM-DD`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub launch_date: Option<String>,
}

impl ProjectRecord {
    /// Creates a record with the given identity and every optional field empty.
    ///
    /// ```rust
    /// use cosmos_catalog::{Category, Markets, ProjectRecord, Regions};
    ///
    /// let record = ProjectRecord::new("costello", "Costello", Category::Sales)
    ///     .with_featured(true)
    ///     .with_markets(Markets::B2B)
    ///     .with_regions(Regions::US);
    /// assert!(record.featured);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tagline: String::new(),
            audience: None,
            value: None,
            tags: Vec::new(),
            link: None,
            github: None,
            featured: false,
            category,
            year: String::new(),
            status: ProjectStatus::Active,
            markets: Markets::empty(),
            regions: Regions::empty(),
            shipped_in_days: None,
            launch_date: None,
        }
    }

    /// Sets the featured flag.
    #[must_use]
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Sets the target markets.
    #[must_use]
    pub fn with_markets(mut self, markets: Markets) -> Self {
        self.markets = markets;
        self
    }

    /// Sets the market regions.
    #[must_use]
    pub fn with_regions(mut self, regions: Regions) -> Self {
        self.regions = regions;
        self
    }

    /// Sets the display year.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the tagline.
    #[must_use]
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Records how long the project took to ship and when it launched.
    #[must_use]
    pub fn with_shipping(mut self, days: u32, launch_date: Option<String>) -> Self {
        self.shipped_in_days = Some(days);
        self.launch_date = launch_date;
        self
    }
}
