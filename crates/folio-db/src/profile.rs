//! Read access to the `profile` table.

use folio_core::ProfileRecord;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::{columns::decode_image_column, DbError};

fn profile_from_row(row: &PgRow) -> Result<ProfileRecord, sqlx::Error> {
    Ok(ProfileRecord {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        bio: row.try_get("bio")?,
        background: row.try_get("background")?,
        education: row.try_get("education")?,
        interests: row.try_get("interests")?,
        skills: row.try_get("skills")?,
        github: row.try_get("github")?,
        email: row.try_get("email")?,
        linkedin: row.try_get("linkedin")?,
        resume: row.try_get("resume")?,
        image: decode_image_column(row, "image")?,
    })
}

/// Returns the profile row, or `None` if the table is empty.
///
/// Only one profile is meaningful; when several exist the lowest `id` wins.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_profile(pool: &PgPool) -> Result<Option<ProfileRecord>, DbError> {
    let row = sqlx::query(
        "SELECT id, first_name, last_name, bio, background, education, interests, skills, \
                github, email, linkedin, resume, image \
         FROM profile \
         ORDER BY id \
         LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    let profile = row.as_ref().map(profile_from_row).transpose()?;
    Ok(profile)
}
