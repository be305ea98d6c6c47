//! Stored record shapes and their client-safe projections.

use serde::{Deserialize, Serialize};

use crate::view::split_tags;

/// Storage form of an image column.
///
/// The column may hold raw JPEG bytes or an already-encoded string depending
/// on how the row was ingested. The form is decided once when the row is
/// decoded, never re-sniffed at projection time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageColumn {
    Bytes(Vec<u8>),
    Encoded(String),
    #[default]
    Absent,
}

/// A row from the `profile` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRecord {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub background: Option<String>,
    pub education: Option<String>,
    pub interests: Option<String>,
    /// Comma-separated skill tokens.
    pub skills: Option<String>,
    pub github: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    /// PDF payload served by the resume endpoint.
    pub resume: Option<Vec<u8>>,
    pub image: ImageColumn,
}

/// A row from the `projects` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Comma-separated technology labels; never normalized at rest.
    pub tags: String,
    pub image: ImageColumn,
    pub code_url: Option<String>,
    pub demo_url: Option<String>,
}

/// Transport form of the profile. The resume payload is not carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub background: Option<String>,
    pub education: Option<String>,
    pub interests: Option<String>,
    pub skills: Option<String>,
    pub github: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub image: String,
}

impl ProfileView {
    /// `"first last"`, skipping whichever half is missing.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn skill_list(&self) -> Vec<&str> {
        self.skills.as_deref().map(|s| split_tags(s).collect()).unwrap_or_default()
    }
}

/// Transport form of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub tags: String,
    pub code_url: Option<String>,
    pub demo_url: Option<String>,
    pub image: String,
}

impl ProjectView {
    #[must_use]
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(&self.tags).collect()
    }

    /// Source link, or `None` when absent or blank.
    #[must_use]
    pub fn code_link(&self) -> Option<&str> {
        non_blank(self.code_url.as_deref())
    }

    /// Live demo link, or `None` when absent or blank.
    #[must_use]
    pub fn demo_link(&self) -> Option<&str> {
        non_blank(self.demo_url.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
