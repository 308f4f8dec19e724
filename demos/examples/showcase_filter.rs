// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Showcase filtering from the command line.
//!
//! Applies a primary chip plus market/region toggles to the catalog and
//! prints chip counts and the visible projects.
//!
//! Run:
//! - `cargo run -p cosmos_demos --example showcase_filter -- --chip dev-tools --region korea`

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cosmos_catalog::{Category, Market, Region};
use cosmos_filter::{FilterCache, FilterState, PrimaryFilter};

#[derive(Parser, Debug)]
#[command(name = "showcase_filter")]
struct Args {
    /// Catalog JSON; defaults to the bundled catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Primary chip.
    #[arg(long, value_enum, default_value_t = Chip::All)]
    chip: Chip,

    /// Market to toggle on (repeatable).
    #[arg(long, value_enum)]
    market: Vec<MarketArg>,

    /// Region to toggle on (repeatable).
    #[arg(long, value_enum)]
    region: Vec<RegionArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Chip {
    All,
    Featured,
    Productivity,
    Sales,
    Education,
    DevTools,
}

impl From<Chip> for PrimaryFilter {
    fn from(chip: Chip) -> Self {
        match chip {
            Chip::All => Self::All,
            Chip::Featured => Self::Featured,
            Chip::Productivity => Category::Productivity.into(),
            Chip::Sales => Category::Sales.into(),
            Chip::Education => Category::Education.into(),
            Chip::DevTools => Category::DevTools.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MarketArg {
    B2b,
    B2c,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RegionArg {
    Us,
    Korea,
}

fn main() -> anyhow::Result<()> {
    cosmos_demos::init_logging();
    let args = Args::parse();
    let catalog = cosmos_demos::load_catalog(args.catalog.as_deref())?;

    let mut state = FilterState::new();
    state.set_primary(args.chip.into());
    for market in args.market {
        let market = match market {
            MarketArg::B2b => Market::B2b,
            MarketArg::B2c => Market::B2c,
        };
        if !state.is_market_active(market) {
            state.toggle_market(market);
        }
    }
    for region in args.region {
        let region = match region {
            RegionArg::Us => Region::Us,
            RegionArg::Korea => Region::Korea,
        };
        if !state.is_region_active(region) {
            state.toggle_region(region);
        }
    }
    tracing::info!(key = ?state.key(), revision = state.revision(), "filter state");

    let mut cache = FilterCache::new(&catalog);
    let chips: Vec<String> = cache
        .counts()
        .visible_chips()
        .map(|(chip, count)| {
            let marker = if chip == state.primary() { "*" } else { " " };
            format!("{marker}{} {count}", chip.label())
        })
        .collect();
    println!("{}", chips.join("  "));

    let visible = cache.visible(&state);
    if visible.is_empty() {
        println!("No projects found matching these filters.");
        return Ok(());
    }
    for project in visible {
        let style = project.category.style();
        let markets: Vec<_> = project.markets.tags().map(|m| m.label()).collect();
        let regions: Vec<_> = project.regions.tags().map(|r| r.label()).collect();
        println!(
            "{:<30} {:<13} {} [{}] [{}]",
            project.title,
            style.label,
            style.hex,
            markets.join(", "),
            regions.join(", ")
        );
    }
    Ok(())
}
