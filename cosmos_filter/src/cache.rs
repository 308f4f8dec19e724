// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized filtering over one catalog.

use alloc::vec::Vec;

use cosmos_catalog::{Catalog, ProjectRecord};
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::engine::{FilterCounts, compute_counts, visible_indices};
use crate::state::{FilterKey, FilterState};

/// Caches visible sets per [`FilterKey`] for a single catalog.
///
/// The catalog is immutable, so entries never go stale. Results are always
/// equal to [`compute_visible`](crate::compute_visible) for the same state;
/// the cache only skips the recomputation.
///
/// ```rust
/// use cosmos_catalog::{Catalog, Category, Market, Markets, ProjectRecord};
/// use cosmos_filter::{FilterCache, FilterState};
///
/// let catalog = Catalog::new(
///     vec![ProjectRecord::new("a", "A", Category::Sales).with_markets(Markets::B2B)],
///     Vec::new(),
/// )
/// .unwrap();
/// let mut cache = FilterCache::new(&catalog);
///
/// let mut state = FilterState::new();
/// state.toggle_market(Market::B2c);
/// assert!(cache.visible(&state).is_empty());
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug)]
pub struct FilterCache<'a> {
    catalog: &'a Catalog,
    counts: FilterCounts,
    entries: HashMap<FilterKey, Vec<usize>>,
}

impl<'a> FilterCache<'a> {
    /// Creates an empty cache and computes the chip counts once.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            counts: compute_counts(catalog),
            entries: HashMap::new(),
        }
    }

    /// Returns the catalog this cache reads from.
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Returns the chip counts.
    #[must_use]
    pub fn counts(&self) -> FilterCounts {
        self.counts
    }

    /// Returns the visible catalog indices for `key`, computing them on first use.
    pub fn visible_indices(&mut self, key: FilterKey) -> &[usize] {
        let catalog = self.catalog;
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(?key, "filter cache hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(?key, "filter cache miss");
                entry.insert(visible_indices(catalog, key))
            }
        }
    }

    /// Returns the visible records for `state`, in catalog order.
    pub fn visible(&mut self, state: &FilterState) -> Vec<&'a ProjectRecord> {
        let catalog: &'a Catalog = self.catalog;
        let projects = catalog.projects();
        self.visible_indices(state.key())
            .iter()
            .map(|&index| &projects[index])
            .collect()
    }

    /// Returns the number of cached keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use cosmos_catalog::{Catalog, Category, Market, Markets, ProjectRecord};

    use super::FilterCache;
    use crate::{FilterState, PrimaryFilter, compute_visible};

    #[test]
    fn repeated_keys_hit_the_cache() {
        let catalog = Catalog::new(
            vec![
                ProjectRecord::new("a", "A", Category::Sales).with_markets(Markets::B2B),
                ProjectRecord::new("b", "B", Category::Education).with_markets(Markets::B2C),
            ],
            Vec::new(),
        )
        .unwrap();
        let mut cache = FilterCache::new(&catalog);
        assert!(cache.is_empty());

        let mut state = FilterState::new();
        assert_eq!(cache.visible(&state), compute_visible(&catalog, &state));

        state.toggle_market(Market::B2b);
        assert_eq!(cache.visible(&state), compute_visible(&catalog, &state));
        state.toggle_market(Market::B2b);
        assert_eq!(cache.visible(&state), compute_visible(&catalog, &state));
        assert_eq!(cache.len(), 2);

        state.set_primary(PrimaryFilter::Featured);
        assert!(cache.visible(&state).is_empty());
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.counts().get(PrimaryFilter::All), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn hit_returns_the_stored_indices() {
        let catalog = Catalog::new(
            vec![
                ProjectRecord::new("a", "A", Category::Sales),
                ProjectRecord::new("b", "B", Category::Education).with_featured(true),
            ],
            Vec::new(),
        )
        .unwrap();
        let mut cache = FilterCache::new(&catalog);
        let mut state = FilterState::new();
        state.set_primary(PrimaryFilter::Featured);

        let first = cache.visible_indices(state.key()).to_vec();
        let second = cache.visible_indices(state.key()).to_vec();
        assert_eq!(first, [1]);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }
}
