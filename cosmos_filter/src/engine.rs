// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-set and chip-count computation.

use alloc::vec::Vec;

use cosmos_catalog::{Catalog, Category, ProjectRecord};

use crate::primary::PrimaryFilter;
use crate::state::{FilterKey, FilterState};

/// Returns the records visible under `state`, in catalog order.
///
/// Stages run in a fixed order and each one narrows the candidates:
/// primary chip, then markets, then regions. Within the market and region
/// stages a record passes if it shares any selected tag; an empty selection
/// passes everything. An empty result is a normal outcome.
#[must_use]
pub fn compute_visible<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a ProjectRecord> {
    visible_records(catalog, state.key()).collect()
}

/// Like [`compute_visible`] but returns catalog indices.
#[must_use]
pub fn visible_indices(catalog: &Catalog, key: FilterKey) -> Vec<usize> {
    catalog
        .projects()
        .iter()
        .enumerate()
        .filter(|(_, record)| key.matches(record))
        .map(|(index, _)| index)
        .collect()
}

fn visible_records(
    catalog: &Catalog,
    key: FilterKey,
) -> impl Iterator<Item = &ProjectRecord> + '_ {
    catalog
        .projects()
        .iter()
        .filter(move |record| key.passes_primary(record))
        .filter(move |record| key.passes_markets(record))
        .filter(move |record| key.passes_regions(record))
}

/// Record counts per primary chip, taken over the unfiltered catalog.
///
/// Counts never depend on market or region selections.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCounts {
    all: usize,
    featured: usize,
    by_category: [usize; Category::ALL.len()],
}

impl FilterCounts {
    /// Returns the count shown on `chip`.
    #[must_use]
    pub fn get(&self, chip: PrimaryFilter) -> usize {
        match chip {
            PrimaryFilter::All => self.all,
            PrimaryFilter::Featured => self.featured,
            PrimaryFilter::Category(category) => self.by_category[category_slot(category)],
        }
    }

    /// Returns the chips worth showing with their counts, in display order.
    ///
    /// Empty buckets are hidden, except [`PrimaryFilter::All`].
    pub fn visible_chips(&self) -> impl Iterator<Item = (PrimaryFilter, usize)> + '_ {
        PrimaryFilter::CHIPS
            .into_iter()
            .map(|chip| (chip, self.get(chip)))
            .filter(|&(chip, count)| count > 0 || chip == PrimaryFilter::All)
    }
}

/// Counts records per primary chip.
#[must_use]
pub fn compute_counts(catalog: &Catalog) -> FilterCounts {
    let mut counts = FilterCounts {
        all: catalog.len(),
        ..FilterCounts::default()
    };
    for record in catalog.projects() {
        if record.featured {
            counts.featured += 1;
        }
        counts.by_category[category_slot(record.category)] += 1;
    }
    counts
}

fn category_slot(category: Category) -> usize {
    match category {
        Category::Productivity => 0,
        Category::Sales => 1,
        Category::Education => 2,
        Category::DevTools => 3,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use cosmos_catalog::{Catalog, Category, Market, Markets, ProjectRecord, Region, Regions};

    use super::{compute_counts, compute_visible, visible_indices};
    use crate::{FilterState, PrimaryFilter};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                ProjectRecord::new("a", "A", Category::Sales)
                    .with_markets(Markets::B2B)
                    .with_regions(Regions::US),
                ProjectRecord::new("b", "B", Category::Productivity)
                    .with_featured(true)
                    .with_markets(Markets::B2C)
                    .with_regions(Regions::KOREA),
                ProjectRecord::new("c", "C", Category::Sales)
                    .with_markets(Markets::B2B | Markets::B2C)
                    .with_regions(Regions::US | Regions::KOREA),
            ],
            Vec::new(),
        )
        .unwrap()
    }

    fn ids<'a>(records: &[&'a ProjectRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn initial_state_shows_everything_in_order() {
        let catalog = catalog();
        let visible = compute_visible(&catalog, &FilterState::new());
        assert_eq!(ids(&visible), ["a", "b", "c"]);
    }

    #[test]
    fn stages_combine_with_and() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.set_primary(PrimaryFilter::Category(Category::Sales));
        state.toggle_region(Region::Korea);
        assert_eq!(ids(&compute_visible(&catalog, &state)), ["c"]);

        state.toggle_market(Market::B2c);
        assert_eq!(ids(&compute_visible(&catalog, &state)), ["c"]);

        state.set_primary(PrimaryFilter::Featured);
        state.toggle_market(Market::B2c);
        state.toggle_market(Market::B2b);
        assert!(compute_visible(&catalog, &state).is_empty());
    }

    #[test]
    fn indices_match_records() {
        let catalog = catalog();
        let mut state = FilterState::new();
        state.toggle_market(Market::B2c);
        assert_eq!(visible_indices(&catalog, state.key()), [1, 2]);
    }

    #[test]
    fn counts_cover_every_chip() {
        let counts = compute_counts(&catalog());
        assert_eq!(counts.get(PrimaryFilter::All), 3);
        assert_eq!(counts.get(PrimaryFilter::Featured), 1);
        assert_eq!(counts.get(Category::Sales.into()), 2);
        assert_eq!(counts.get(Category::Productivity.into()), 1);
        assert_eq!(counts.get(Category::DevTools.into()), 0);
    }

    #[test]
    fn empty_chips_are_hidden_except_all() {
        let counts = compute_counts(&catalog());
        let chips: Vec<_> = counts.visible_chips().map(|(chip, _)| chip.label()).collect();
        assert_eq!(chips, ["All", "Featured", "Productivity", "Sales"]);

        let empty = compute_counts(&Catalog::default());
        let chips: Vec<_> = empty.visible_chips().collect();
        assert_eq!(chips, [(PrimaryFilter::All, 0)]);
    }
}
