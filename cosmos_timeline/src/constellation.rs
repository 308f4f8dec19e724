// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Constellation layout: one node per milestone, joined by straight segments.
//!
//! Coordinates live in a `0..100` square; hosts scale it to the container.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{BezPath, Point};

use crate::milestone::milestone_position;

/// Node positions for `count` milestones.
///
/// Nodes alternate between the left and right thirds with a sinusoidal wobble
/// and are spread evenly from top to bottom.
#[must_use]
pub fn constellation_nodes(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let base = if i % 2 == 0 { 30.0 } else { 70.0 };
            let wobble = (i as f64 * 1.5).sin() * 15.0;
            Point::new(base + wobble, milestone_position(i, count) * 100.0)
        })
        .collect()
}

/// The polyline through [`constellation_nodes`]. Empty when `count == 0`.
#[must_use]
pub fn constellation_path(count: usize) -> BezPath {
    let mut path = BezPath::new();
    let mut nodes = constellation_nodes(count).into_iter();
    if let Some(first) = nodes.next() {
        path.move_to(first);
        for node in nodes {
            path.line_to(node);
        }
    }
    path
}
