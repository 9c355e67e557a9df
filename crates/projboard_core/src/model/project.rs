//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered as a board card.
//! - Provide the opaque identity carried through drag payloads.
//!
//! # Invariants
//! - `id` is generated once at creation and never reassigned.
//! - `status` is the only field mutated after creation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque project identifier.
///
/// Kept as string text so ids read back from a drag payload can be compared
/// without parsing; foreign or stale ids simply never match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProjectId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Board column a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress; the initial state.
    Active,
    /// Completed.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase label used for element ids and bridge payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses a lowercase label (`active|finished`), trimming whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "active" => Some(Self::Active),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned; validated to 1..=5 at the form boundary.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: ProjectId::generate(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}

/// Validated form input ready to become a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectId, ProjectStatus};

    #[test]
    fn new_project_starts_active() {
        let project = Project::new("Build API", "Create REST endpoints", 3);
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(project.is_active());
        assert!(!project.id.as_str().is_empty());
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(ProjectId::generate(), ProjectId::generate());
    }

    #[test]
    fn status_parse_accepts_labels_only() {
        assert_eq!(ProjectStatus::parse(" finished "), Some(ProjectStatus::Finished));
        assert_eq!(ProjectStatus::parse("active"), Some(ProjectStatus::Active));
        assert_eq!(ProjectStatus::parse("Active"), None);
    }
}
