// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section tracking for in-page navigation.

use kurbo::Rect;

/// Tracks which page section the reader is in.
///
/// A section becomes active when its box straddles the horizontal midline of
/// the viewport. When several do, the last one in document order wins; when
/// none does (for example, in a gap between sections), the previous section
/// stays active.
///
/// ```
/// use kurbo::Rect;
/// use cosmos_scroll::SectionSpy;
///
/// let mut spy = SectionSpy::new("hero");
/// let sections = [
///     ("hero", Some(Rect::new(0.0, -900.0, 1.0, -100.0))),
///     ("about", Some(Rect::new(0.0, -100.0, 1.0, 700.0))),
/// ];
/// assert_eq!(*spy.update(sections, 800.0), "about");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionSpy<K> {
    active: K,
}

impl<K: Clone> SectionSpy<K> {
    /// Creates a spy with `initial` active.
    #[must_use]
    pub fn new(initial: K) -> Self {
        Self { active: initial }
    }

    /// Returns the active section.
    #[must_use]
    pub fn active(&self) -> &K {
        &self.active
    }

    /// Recomputes the active section from current section boxes.
    ///
    /// Sections with no measured box are skipped.
    pub fn update<I>(&mut self, sections: I, viewport_height: f64) -> &K
    where
        I: IntoIterator<Item = (K, Option<Rect>)>,
    {
        let midline = viewport_height * 0.5;
        if let Some((key, _)) = sections
            .into_iter()
            .filter(|(_, rect)| {
                rect.is_some_and(|rect| {
                    let rect = rect.abs();
                    rect.y0 <= midline && rect.y1 > midline
                })
            })
            .last()
        {
            self.active = key;
        }
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::SectionSpy;

    fn band(top: f64, bottom: f64) -> Option<Rect> {
        Some(Rect::new(0.0, top, 1.0, bottom))
    }

    #[test]
    fn gap_keeps_previous_section() {
        let mut spy = SectionSpy::new(0_u32);
        spy.update([(0, band(-500.0, 500.0)), (1, band(600.0, 1400.0))], 800.0);
        assert_eq!(*spy.active(), 0);

        // Midline (400) falls between the sections.
        spy.update([(0, band(-700.0, 300.0)), (1, band(450.0, 1250.0))], 800.0);
        assert_eq!(*spy.active(), 0);

        spy.update([(0, band(-900.0, 100.0)), (1, band(250.0, 1050.0))], 800.0);
        assert_eq!(*spy.active(), 1);
    }

    #[test]
    fn unmeasured_sections_are_skipped() {
        let mut spy = SectionSpy::new("hero");
        spy.update([("hero", None), ("contact", None)], 800.0);
        assert_eq!(*spy.active(), "hero");
    }

    #[test]
    fn last_straddling_section_wins() {
        let mut spy = SectionSpy::new('a');
        spy.update([('a', band(0.0, 800.0)), ('b', band(300.0, 500.0))], 800.0);
        assert_eq!(*spy.active(), 'b');
    }
}
