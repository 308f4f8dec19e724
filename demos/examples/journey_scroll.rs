// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated scroll through the journey section.
//!
//! Drives the timeline container, navigation chrome, and section spy from a
//! single listener registry while the "window" scrolls down and back up.
//!
//! Run:
//! - `cargo run -p cosmos_demos --example journey_scroll -- --step 250`

use std::cell::RefCell;
use std::path::PathBuf;

use clap::Parser;
use cosmos_catalog::MilestoneKind;
use cosmos_scroll::{
    ScrollDirectionTracker, ScrollListeners, ScrollOptions, ScrollProgressTracker, SectionSpy,
    ViewportEvent,
};
use cosmos_timeline::derive_from_scroll;
use kurbo::Rect;

#[derive(Parser, Debug)]
#[command(name = "journey_scroll")]
struct Args {
    /// Catalog JSON; defaults to the bundled catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    viewport: f64,

    /// Scroll step in pixels.
    #[arg(long, default_value_t = 200.0)]
    step: f64,
}

/// Document layout: (section id, top, height).
const LAYOUT: [(&str, f64, f64); 4] = [
    ("hero", 0.0, 900.0),
    ("about", 900.0, 800.0),
    ("timeline", 1700.0, 2200.0),
    ("contact", 3900.0, 700.0),
];

fn in_viewport(top: f64, height: f64, scroll_y: f64) -> Option<Rect> {
    Some(Rect::new(0.0, top - scroll_y, 1280.0, top + height - scroll_y))
}

fn main() -> anyhow::Result<()> {
    cosmos_demos::init_logging();
    let args = Args::parse();
    anyhow::ensure!(args.step > 0.0, "--step must be positive");

    let catalog = cosmos_demos::load_catalog(args.catalog.as_deref())?;
    let career: Vec<_> = catalog.milestones_of_kind(MilestoneKind::Career).collect();
    let (_, timeline_top, timeline_height) = LAYOUT[2];
    let page_end = LAYOUT[3].1 + LAYOUT[3].2 - args.viewport;

    let progress = RefCell::new(ScrollProgressTracker::new(ScrollOptions {
        threshold: 0.0,
        offset: 100.0,
    }));
    let direction = RefCell::new(ScrollDirectionTracker::new());
    let spy = RefCell::new(SectionSpy::new("hero"));

    let mut listeners = ScrollListeners::new();
    listeners.subscribe(|e| {
        progress
            .borrow_mut()
            .handle_event(e, in_viewport(timeline_top, timeline_height, e.scroll_y));
    });
    listeners.subscribe(|e| {
        direction.borrow_mut().update(e.scroll_y);
    });
    listeners.subscribe(|e| {
        let boxes = LAYOUT
            .iter()
            .map(|&(id, top, height)| (id, in_viewport(top, height, e.scroll_y)));
        spy.borrow_mut().update(boxes, e.viewport_height);
    });

    let mut offsets = Vec::new();
    let mut y = 0.0;
    while y <= page_end {
        offsets.push(y);
        y += args.step;
    }
    let back: Vec<_> = offsets.iter().rev().skip(1).copied().collect();
    offsets.extend(back);

    for scroll_y in offsets {
        listeners.notify(&ViewportEvent::scroll(scroll_y, args.viewport));

        let scroll = progress.borrow().progress();
        let states = derive_from_scroll(career.len(), &scroll);
        let lit: String = states
            .iter()
            .map(|s| match (s.is_highlighted(scroll.is_in_view), s.card_shown()) {
                (true, _) => '*',
                (false, true) => 'o',
                (false, false) => '.',
            })
            .collect();
        let active = states
            .iter()
            .find(|s| s.is_highlighted(scroll.is_in_view))
            .map(|s| career[s.index].title.as_str())
            .unwrap_or("-");

        println!(
            "y={scroll_y:>6.0} section={:<9} nav={:<5} progress={:.2} [{lit}] {active}",
            spy.borrow().active(),
            direction.borrow().nav_visible(),
            scroll.progress,
        );
    }

    listeners.clear();
    Ok(())
}
