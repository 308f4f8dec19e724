// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The validated, immutable catalog.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::project::ProjectRecord;
use crate::timeline::{MilestoneKind, TimelineMilestone};

/// Error returned when a catalog fails validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two project records share an id.
    DuplicateProjectId(String),
    /// Two timeline milestones share an id.
    DuplicateMilestoneId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateProjectId(id) => write!(f, "duplicate project id `{id}`"),
            Self::DuplicateMilestoneId(id) => write!(f, "duplicate milestone id `{id}`"),
        }
    }
}

impl core::error::Error for CatalogError {}

/// An ordered, immutable list of projects and timeline milestones.
///
/// Ids are unique within each list. Order is insertion order and is what
/// every query preserves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CatalogData")
)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
    #[cfg_attr(feature = "serde", serde(rename = "timeline"))]
    milestones: Vec<TimelineMilestone>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CatalogData {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
    #[serde(default)]
    timeline: Vec<TimelineMilestone>,
}

#[cfg(feature = "serde")]
impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Self::new(data.projects, data.timeline)
    }
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(
        projects: Vec<ProjectRecord>,
        milestones: Vec<TimelineMilestone>,
    ) -> Result<Self, CatalogError> {
        if let Some(id) = first_duplicate(projects.iter().map(|p| p.id.as_str())) {
            return Err(CatalogError::DuplicateProjectId(id.into()));
        }
        if let Some(id) = first_duplicate(milestones.iter().map(|m| m.id.as_str())) {
            return Err(CatalogError::DuplicateMilestoneId(id.into()));
        }
        Ok(Self {
            projects,
            milestones,
        })
    }

    /// Returns all project records in catalog order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Returns all timeline milestones in catalog order.
    #[must_use]
    pub fn milestones(&self) -> &[TimelineMilestone] {
        &self.milestones
    }

    /// Returns the number of project records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if there are no project records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Returns the milestones of one kind, in catalog order.
    pub fn milestones_of_kind(
        &self,
        kind: MilestoneKind,
    ) -> impl Iterator<Item = &TimelineMilestone> + '_ {
        self.milestones.iter().filter(move |m| m.kind == kind)
    }

    /// Returns the projects of `year` that record a shipping time, ordered by
    /// launch date.
    ///
    /// Undated projects come after dated ones and keep catalog order.
    #[must_use]
    pub fn shipped_in_year(&self, year: &str) -> Vec<&ProjectRecord> {
        let mut shipped: Vec<&ProjectRecord> = self
            .projects
            .iter()
            .filter(|p| p.year == year && p.shipped_in_days.is_some())
            .collect();
        shipped.sort_by(|a, b| {
            (a.launch_date.is_none(), &a.launch_date).cmp(&(b.launch_date.is_none(), &b.launch_date))
        });
        shipped
    }
}

fn first_duplicate<'a>(mut ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = BTreeSet::new();
    ids.find(|id| !seen.insert(*id))
}
