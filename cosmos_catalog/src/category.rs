// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Project categories and their display styles.

use core::fmt;

/// The fixed set of project categories.
///
/// Wire names are kebab-case (`dev-tools`), matching the site's data files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Category {
    /// Personal and team productivity tools.
    Productivity,
    /// Sales and outreach tooling.
    Sales,
    /// Learning products.
    Education,
    /// Developer tooling.
    DevTools,
}

/// Label and accent color for a [`Category`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Human-readable chip label.
    pub label: &'static str,
    /// Accent color as a `#rrggbb` hex string.
    pub hex: &'static str,
}

impl Category {
    /// All categories, in chip order.
    pub const ALL: [Self; 4] = [Self::Productivity, Self::Sales, Self::Education, Self::DevTools];

    /// Returns the display style for this category.
    ///
    /// The table is fixed at compile time and never mutated.
    #[must_use]
    pub const fn style(self) -> CategoryStyle {
        match self {
            Self::Productivity => CategoryStyle {
                label: "Productivity",
                hex: "#fbbf24",
            },
            Self::Sales => CategoryStyle {
                label: "Sales",
                hex: "#34d399",
            },
            Self::Education => CategoryStyle {
                label: "Education",
                hex: "#38bdf8",
            },
            Self::DevTools => CategoryStyle {
                label: "Dev Tools",
                hex: "#64ffda",
            },
        }
    }

    /// Returns the chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.style().label
    }

    /// Returns the kebab-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Productivity => "productivity",
            Self::Sales => "sales",
            Self::Education => "education",
            Self::DevTools => "dev-tools",
        }
    }

    /// Parses a kebab-case wire name.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn wire_names_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_wire(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_wire("dev-tools"), Some(Category::DevTools));
        assert_eq!(Category::from_wire("devtools"), None);
    }

    #[test]
    fn style_table_is_complete() {
        assert_eq!(Category::DevTools.style().hex, "#64ffda");
        assert_eq!(Category::Sales.label(), "Sales");
        for category in Category::ALL {
            let style = category.style();
            assert!(style.hex.starts_with('#'), "{category:?} has a malformed hex");
            assert_eq!(style.hex.len(), 7);
        }
    }
}
