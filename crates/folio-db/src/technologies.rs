//! Read access to the `technologies` table.

use serde_json::Value;
use sqlx::PgPool;

use crate::DbError;

/// Returns every technology row as a JSON object, whatever its columns.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_technologies(pool: &PgPool) -> Result<Vec<Value>, DbError> {
    let rows = sqlx::query_scalar::<_, Value>(
        "SELECT row_to_json(t) FROM technologies t ORDER BY t.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
