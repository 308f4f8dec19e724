// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-select primary filter.

use cosmos_catalog::{Category, ProjectRecord};

/// The primary chip selection: everything, featured projects, or one category.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrimaryFilter {
    /// No constraint.
    #[default]
    All,
    /// Only records with `featured == true`.
    Featured,
    /// Only records of one category.
    Category(Category),
}

impl PrimaryFilter {
    /// Every primary chip, in display order.
    pub const CHIPS: [Self; 6] = [
        Self::All,
        Self::Featured,
        Self::Category(Category::Productivity),
        Self::Category(Category::Sales),
        Self::Category(Category::Education),
        Self::Category(Category::DevTools),
    ];

    /// Returns the chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Featured => "Featured",
            Self::Category(category) => category.label(),
        }
    }

    /// Returns `true` if `record` falls in this bucket.
    #[must_use]
    pub fn matches(self, record: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Featured => record.featured,
            Self::Category(category) => record.category == category,
        }
    }
}

impl From<Category> for PrimaryFilter {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}
