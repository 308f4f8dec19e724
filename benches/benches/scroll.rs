// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use cosmos_scroll::{ScrollDirectionTracker, ScrollOptions, ScrollProgressTracker};
use kurbo::Rect;

fn bench_scroll_session(c: &mut Criterion) {
    // One frame's worth of work per offset: progress for a tracked section
    // plus the window direction.
    let offsets: Vec<f64> = (0..2_000).map(|i| f64::from(i) * 2.5).collect();

    c.bench_function("scroll/session_2000_events", |b| {
        b.iter(|| {
            let mut progress = ScrollProgressTracker::new(ScrollOptions {
                threshold: 0.0,
                offset: 100.0,
            });
            let mut direction = ScrollDirectionTracker::new();
            for &y in &offsets {
                let rect = Rect::new(0.0, 1700.0 - y, 1280.0, 3900.0 - y);
                black_box(progress.update(Some(rect), 800.0));
                black_box(direction.update(y));
            }
        });
    });
}

criterion_group!(benches, bench_scroll_session);
criterion_main!(benches);
