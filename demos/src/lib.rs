// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Cosmos demos.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use cosmos_catalog::Catalog;
use tracing_subscriber::EnvFilter;

/// The portfolio catalog bundled with the demos.
pub const BUNDLED_CATALOG: &str = include_str!("../data/cosmos.json");

/// Loads a catalog from `path`, or the bundled one when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let catalog: Catalog = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing catalog {}", path.display()))?
        }
        None => serde_json::from_str(BUNDLED_CATALOG).context("parsing bundled catalog")?,
    };
    tracing::info!(
        projects = catalog.len(),
        milestones = catalog.milestones().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use cosmos_catalog::MilestoneKind;

    use super::load_catalog;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.milestones_of_kind(MilestoneKind::Career).count(), 4);
        assert_eq!(catalog.shipped_in_year("2026").len(), 6);
        assert_eq!(catalog.shipped_in_year("2026")[0].id, "no-more-ai-slop");
    }
}
