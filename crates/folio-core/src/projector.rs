//! Row Projector: stored records to transport-safe views.
//!
//! Every function here is total. Absence is reported as `None`; the HTTP
//! layer decides what status code that becomes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::records::{ImageColumn, ProfileRecord, ProfileView, ProjectRecord, ProjectView};

pub const IMAGE_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Render an image column as a string usable directly as an image source.
///
/// Raw bytes become a JPEG data URI, pre-encoded strings pass through, and an
/// absent column yields the empty string.
#[must_use]
pub fn project_image(image: &ImageColumn) -> String {
    match image {
        ImageColumn::Bytes(bytes) => {
            let mut uri = String::with_capacity(IMAGE_DATA_URI_PREFIX.len() + bytes.len() * 4 / 3 + 4);
            uri.push_str(IMAGE_DATA_URI_PREFIX);
            STANDARD.encode_string(bytes, &mut uri);
            uri
        }
        ImageColumn::Encoded(encoded) => encoded.clone(),
        ImageColumn::Absent => String::new(),
    }
}

/// Project the stored profile, or `None` when there is no profile row.
#[must_use]
pub fn project_profile(row: Option<&ProfileRecord>) -> Option<ProfileView> {
    let row = row?;
    Some(ProfileView {
        id: row.id,
        first_name: row.first_name.clone(),
        last_name: row.last_name.clone(),
        bio: row.bio.clone(),
        background: row.background.clone(),
        education: row.education.clone(),
        interests: row.interests.clone(),
        skills: row.skills.clone(),
        github: row.github.clone(),
        email: row.email.clone(),
        linkedin: row.linkedin.clone(),
        image: project_image(&row.image),
    })
}

/// Project every stored project, preserving storage order.
#[must_use]
pub fn project_project_list(rows: &[ProjectRecord]) -> Vec<ProjectView> {
    rows.iter()
        .map(|row| ProjectView {
            id: row.id,
            title: row.title.clone(),
            description: row.description.clone(),
            tags: row.tags.clone(),
            code_url: row.code_url.clone(),
            demo_url: row.demo_url.clone(),
            image: project_image(&row.image),
        })
        .collect()
}

/// Raw resume bytes, or `None` when there is no profile row or no payload.
///
/// A zero-length payload counts as no payload.
#[must_use]
pub fn project_resume_bytes(row: Option<&ProfileRecord>) -> Option<&[u8]> {
    row?.resume.as_deref().filter(|bytes| !bytes.is_empty())
}
