// Copyright 2025 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline milestones.

use alloc::string::String;
use alloc::vec::Vec;

/// The kind of a [`TimelineMilestone`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MilestoneKind {
    /// Degrees and schooling.
    Education,
    /// Jobs and companies.
    Career,
    /// Awards and recognition.
    Achievement,
    /// Standalone engagements.
    Project,
}

impl MilestoneKind {
    /// Returns the badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Career => "Career",
            Self::Achievement => "Achievement",
            Self::Project => "Project",
        }
    }
}

/// A project card shown under a milestone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MilestoneProject {
    /// Project name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Optional outbound link.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub link: Option<String>,
    /// Highlighted project.
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
}

/// One entry of the biographical timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineMilestone {
    /// Unique identifier within a catalog.
    pub id: String,
    /// Display year or year range.
    pub year: String,
    /// Heading.
    pub title: String,
    /// Body text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Milestone kind.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: MilestoneKind,
    /// Project cards.
    #[cfg_attr(feature = "serde", serde(default))]
    pub projects: Vec<MilestoneProject>,
    /// Marks the ongoing milestone.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current: bool,
}

impl TimelineMilestone {
    /// Creates a milestone with no description or projects.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        year: impl Into<String>,
        title: impl Into<String>,
        kind: MilestoneKind,
    ) -> Self {
        Self {
            id: id.into(),
            year: year.into(),
            title: title.into(),
            description: String::new(),
            kind,
            projects: Vec::new(),
            current: false,
        }
    }
}
