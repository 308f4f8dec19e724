// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Market and region tags, and the small sets built from them.
//!
//! A project may belong to several markets and several regions. Each set is a
//! bitflags value, so "does this record share any tag with the selection" is
//! a single [`intersects`](Markets::intersects) test.

use core::fmt;

use bitflags::bitflags;

/// A target market tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Market {
    /// Business customers.
    B2b,
    /// Consumers.
    B2c,
}

/// A market region tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Region {
    /// United States.
    Us,
    /// South Korea.
    Korea,
}

bitflags! {
    /// A set of [`Market`] tags.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Markets: u8 {
        /// See [`Market::B2b`].
        const B2B = 1 << 0;
        /// See [`Market::B2c`].
        const B2C = 1 << 1;
    }
}

bitflags! {
    /// A set of [`Region`] tags.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Regions: u8 {
        /// See [`Region::Us`].
        const US = 1 << 0;
        /// See [`Region::Korea`].
        const KOREA = 1 << 1;
    }
}

impl Market {
    /// All markets, in chip order.
    pub const ALL: [Self; 2] = [Self::B2b, Self::B2c];

    /// Returns the chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::B2b => "B2B",
            Self::B2c => "B2C",
        }
    }

    /// Returns the single-tag set for this market.
    #[must_use]
    pub const fn flag(self) -> Markets {
        match self {
            Self::B2b => Markets::B2B,
            Self::B2c => Markets::B2C,
        }
    }
}

impl Region {
    /// All regions, in chip order.
    pub const ALL: [Self; 2] = [Self::Us, Self::Korea];

    /// Returns the chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Korea => "Korea",
        }
    }

    /// Returns the single-tag set for this region.
    #[must_use]
    pub const fn flag(self) -> Regions {
        match self {
            Self::Us => Regions::US,
            Self::Korea => Regions::KOREA,
        }
    }
}

macro_rules! tag_set_impls {
    ($set:ident, $tag:ident) => {
        impl $set {
            /// Returns `true` if `tag` is in the set.
            #[must_use]
            pub const fn has(self, tag: $tag) -> bool {
                self.contains(tag.flag())
            }

            /// Iterates the tags in the set, in chip order.
            pub fn tags(self) -> impl Iterator<Item = $tag> {
                $tag::ALL.into_iter().filter(move |tag| self.has(*tag))
            }
        }

        impl Default for $set {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl From<$tag> for $set {
            fn from(tag: $tag) -> Self {
                tag.flag()
            }
        }

        impl FromIterator<$tag> for $set {
            fn from_iter<I: IntoIterator<Item = $tag>>(iter: I) -> Self {
                iter.into_iter()
                    .fold(Self::empty(), |set, tag| set | tag.flag())
            }
        }

        impl fmt::Display for $tag {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $set {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(self.tags())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $set {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let tags = <alloc::vec::Vec<$tag> as serde::Deserialize>::deserialize(deserializer)?;
                Ok(tags.into_iter().collect())
            }
        }
    };
}

tag_set_impls!(Markets, Market);
tag_set_impls!(Regions, Region);

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Market, Markets, Region, Regions};

    #[test]
    fn collect_and_iterate_tags() {
        let set: Markets = [Market::B2c, Market::B2b, Market::B2c].into_iter().collect();
        assert_eq!(set, Markets::all());
        assert_eq!(set.tags().collect::<Vec<_>>(), [Market::B2b, Market::B2c]);

        let korea = Regions::from(Region::Korea);
        assert!(korea.has(Region::Korea));
        assert!(!korea.has(Region::Us));
    }

    #[test]
    fn default_is_empty() {
        assert!(Markets::default().is_empty());
        assert!(Regions::default().is_empty());
    }

    #[test]
    fn intersection_is_or_within_a_dimension() {
        let record = Markets::B2B;
        assert!(record.intersects(Markets::B2B | Markets::B2C));
        assert!(!record.intersects(Markets::B2C));
    }
}
