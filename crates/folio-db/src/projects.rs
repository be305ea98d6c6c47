//! Read access to the `projects` table.

use folio_core::ProjectRecord;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::{columns::decode_image_column, DbError};

/// Text columns may be nullable on externally provisioned schemas; NULL reads
/// as the empty string.
fn text_or_empty(row: &PgRow, column: &str) -> Result<String, sqlx::Error> {
    let value: Option<String> = row.try_get(column)?;
    Ok(value.unwrap_or_default())
}

fn project_from_row(row: &PgRow) -> Result<ProjectRecord, sqlx::Error> {
    Ok(ProjectRecord {
        id: row.try_get("id")?,
        title: text_or_empty(row, "title")?,
        description: text_or_empty(row, "description")?,
        tags: text_or_empty(row, "tags")?,
        image: decode_image_column(row, "image")?,
        code_url: row.try_get("code_url")?,
        demo_url: row.try_get("demo_url")?,
    })
}

/// Returns every project in insertion (`id`) order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_projects(pool: &PgPool) -> Result<Vec<ProjectRecord>, DbError> {
    let rows = sqlx::query(
        "SELECT id, title, description, tags, image, code_url, demo_url \
         FROM projects \
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let projects = rows
        .iter()
        .map(project_from_row)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(projects)
}
