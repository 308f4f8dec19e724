// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-page-view filter state and its toggle operations.

use cosmos_catalog::{Market, Markets, ProjectRecord, Region, Regions};

use crate::primary::PrimaryFilter;

/// The value part of a [`FilterState`]: everything that decides visibility.
///
/// Two states with equal keys produce identical visible sets, which makes the
/// key suitable for memoization (see [`FilterCache`](crate::FilterCache)).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FilterKey {
    /// Primary chip.
    pub primary: PrimaryFilter,
    /// Selected markets. Empty means "don't constrain".
    pub markets: Markets,
    /// Selected regions. Empty means "don't constrain".
    pub regions: Regions,
}

impl FilterKey {
    /// Returns `true` if `record` passes the primary stage.
    #[must_use]
    pub fn passes_primary(&self, record: &ProjectRecord) -> bool {
        self.primary.matches(record)
    }

    /// Returns `true` if `record` passes the market stage.
    ///
    /// An empty selection passes everything; otherwise the record must carry
    /// at least one selected market.
    #[must_use]
    pub fn passes_markets(&self, record: &ProjectRecord) -> bool {
        self.markets.is_empty() || record.markets.intersects(self.markets)
    }

    /// Returns `true` if `record` passes the region stage.
    ///
    /// Same policy as [`FilterKey::passes_markets`].
    #[must_use]
    pub fn passes_regions(&self, record: &ProjectRecord) -> bool {
        self.regions.is_empty() || record.regions.intersects(self.regions)
    }

    /// Returns `true` if `record` passes every stage.
    #[must_use]
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.passes_primary(record) && self.passes_markets(record) && self.passes_regions(record)
    }
}

/// Filter selections for one page view.
///
/// Starts as `{All, {}, {}}` and changes only through the explicit operations
/// below. A revision counter bumps whenever the selection actually changes, so
/// observers can cheaply tell whether to recompute.
///
/// ```rust
/// use cosmos_catalog::{Category, Market};
/// use cosmos_filter::{FilterState, PrimaryFilter};
///
/// let mut state = FilterState::new();
/// state.set_primary(PrimaryFilter::Category(Category::DevTools));
/// state.toggle_market(Market::B2b);
/// assert!(state.is_market_active(Market::B2b));
///
/// state.toggle_market(Market::B2b);
/// assert!(!state.is_market_active(Market::B2b));
/// assert_eq!(state.revision(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    key: FilterKey,
    revision: u64,
}

impl FilterState {
    /// Creates the initial state: all projects, no secondary filters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            key: FilterKey {
                primary: PrimaryFilter::All,
                markets: Markets::empty(),
                regions: Regions::empty(),
            },
            revision: 0,
        }
    }

    /// Returns the current selection as a hashable key.
    #[must_use]
    pub fn key(&self) -> FilterKey {
        self.key
    }

    /// Returns the primary chip.
    #[must_use]
    pub fn primary(&self) -> PrimaryFilter {
        self.key.primary
    }

    /// Returns the selected markets.
    #[must_use]
    pub fn markets(&self) -> Markets {
        self.key.markets
    }

    /// Returns the selected regions.
    #[must_use]
    pub fn regions(&self) -> Regions {
        self.key.regions
    }

    /// Returns the revision counter.
    ///
    /// Bumped by every mutation that changes the key; no-op calls leave it alone.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if `market` is selected.
    #[must_use]
    pub fn is_market_active(&self, market: Market) -> bool {
        self.key.markets.has(market)
    }

    /// Returns `true` if `region` is selected.
    #[must_use]
    pub fn is_region_active(&self, region: Region) -> bool {
        self.key.regions.has(region)
    }

    /// Replaces the primary chip.
    pub fn set_primary(&mut self, primary: PrimaryFilter) {
        if self.key.primary == primary {
            return;
        }
        self.key.primary = primary;
        self.bump_revision();
    }

    /// Adds `market` if absent, removes it if present.
    pub fn toggle_market(&mut self, market: Market) {
        self.key.markets.toggle(market.flag());
        self.bump_revision();
    }

    /// Adds `region` if absent, removes it if present.
    pub fn toggle_region(&mut self, region: Region) {
        self.key.regions.toggle(region.flag());
        self.bump_revision();
    }

    /// Clears market and region selections, keeping the primary chip.
    pub fn clear_secondary(&mut self) {
        if self.key.markets.is_empty() && self.key.regions.is_empty() {
            return;
        }
        self.key.markets = Markets::empty();
        self.key.regions = Regions::empty();
        self.bump_revision();
    }

    /// Returns to the initial selection.
    pub fn reset(&mut self) {
        if self.key == FilterKey::default() {
            return;
        }
        self.key = FilterKey::default();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl From<FilterKey> for FilterState {
    fn from(key: FilterKey) -> Self {
        Self { key, revision: 0 }
    }
}
