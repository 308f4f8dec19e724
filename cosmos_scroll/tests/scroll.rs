// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `cosmos_scroll` crate.
//!
//! These drive several consumers from one listener registry, the way a page
//! wires scroll and resize notifications into its sections.

use std::cell::RefCell;

use cosmos_scroll::{
    ScrollDirection, ScrollDirectionTracker, ScrollListeners, ScrollOptions,
    ScrollProgressTracker, SectionSpy, ViewportEvent, VisibilityObserver,
};
use kurbo::Rect;

/// Document-space layout: (id, top, height).
const SECTIONS: [(&str, f64, f64); 4] = [
    ("hero", 0.0, 900.0),
    ("about", 900.0, 700.0),
    ("timeline", 1600.0, 2400.0),
    ("contact", 4000.0, 600.0),
];

fn viewport_box(top: f64, height: f64, scroll_y: f64) -> Option<Rect> {
    Some(Rect::new(0.0, top - scroll_y, 1280.0, top + height - scroll_y))
}

#[test]
fn direction_sequence_matches_offsets() {
    let mut tracker = ScrollDirectionTracker::new();
    let seen: Vec<_> = [0.0, 50.0, 30.0, 30.0, 80.0]
        .into_iter()
        .map(|y| tracker.update(y))
        .collect();
    assert_eq!(
        seen,
        [
            ScrollDirection::Down,
            ScrollDirection::Down,
            ScrollDirection::Up,
            ScrollDirection::Up,
            ScrollDirection::Down,
        ]
    );
}

#[test]
fn page_consumers_follow_a_scroll_session() {
    let (_, timeline_top, timeline_height) = SECTIONS[2];
    let (_, contact_top, contact_height) = SECTIONS[3];

    let timeline = RefCell::new(ScrollProgressTracker::new(ScrollOptions {
        threshold: 0.0,
        offset: 100.0,
    }));
    let reveal = RefCell::new(VisibilityObserver::new(0.1).once());
    let direction = RefCell::new(ScrollDirectionTracker::new());
    let spy = RefCell::new(SectionSpy::new("hero"));

    let mut listeners = ScrollListeners::new();
    listeners.subscribe(|e| {
        timeline
            .borrow_mut()
            .handle_event(e, viewport_box(timeline_top, timeline_height, e.scroll_y));
    });
    listeners.subscribe(|e| {
        reveal
            .borrow_mut()
            .update(viewport_box(contact_top, contact_height, e.scroll_y), e.viewport_height);
    });
    listeners.subscribe(|e| {
        direction.borrow_mut().update(e.scroll_y);
    });
    listeners.subscribe(|e| {
        let boxes = SECTIONS
            .iter()
            .map(|&(id, top, height)| (id, viewport_box(top, height, e.scroll_y)));
        spy.borrow_mut().update(boxes, e.viewport_height);
    });
    assert_eq!(listeners.len(), 4);

    // Top of the page.
    listeners.notify(&ViewportEvent::scroll(0.0, 800.0));
    assert_eq!(timeline.borrow().progress().progress, 0.0);
    assert!(!timeline.borrow().progress().is_in_view);
    assert!(!reveal.borrow().is_visible());
    assert_eq!(*spy.borrow().active(), "hero");
    assert!(direction.borrow().nav_visible());

    // Timeline top exactly at scroll start (viewport height - offset).
    listeners.notify(&ViewportEvent::scroll(timeline_top - 700.0, 800.0));
    assert_eq!(timeline.borrow().progress().progress, 0.0);
    assert!(timeline.borrow().progress().is_in_view);
    assert_eq!(*spy.borrow().active(), "about");
    assert!(!direction.borrow().nav_visible());

    // Halfway through the timeline's scroll range.
    let start = 700.0;
    let end = -timeline_height + 100.0;
    let mid_top = (start + end) / 2.0;
    listeners.notify(&ViewportEvent::scroll(timeline_top - mid_top, 800.0));
    assert!((timeline.borrow().progress().progress - 0.5).abs() < 1e-9);
    assert_eq!(*spy.borrow().active(), "timeline");

    // Bottom of the page reveals the contact section.
    listeners.notify(&ViewportEvent::scroll(contact_top + contact_height - 800.0, 800.0));
    // The timeline's top is still 100px short of its scroll end.
    let near_end = timeline.borrow().progress().progress;
    assert!((near_end - 2900.0 / 3000.0).abs() < 1e-9, "got {near_end}");
    assert!(reveal.borrow().is_visible());
    assert_eq!(*spy.borrow().active(), "contact");

    // Scrolling back up shows navigation; the reveal stays latched.
    listeners.notify(&ViewportEvent::scroll(1000.0, 800.0));
    assert_eq!(direction.borrow().direction(), ScrollDirection::Up);
    assert!(direction.borrow().nav_visible());
    assert!(reveal.borrow().is_visible());

    // A resize recomputes from geometry alone.
    listeners.notify(&ViewportEvent::resize(1000.0, 800.0));
    let before = timeline.borrow().progress();
    listeners.notify(&ViewportEvent::resize(1000.0, 800.0));
    assert_eq!(timeline.borrow().progress(), before);

    listeners.clear();
    assert!(listeners.is_empty());
}
