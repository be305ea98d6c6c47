//! Column decoding shared by the row loaders.

use folio_core::ImageColumn;
use sqlx::{postgres::PgRow, Row, TypeInfo, ValueRef};

/// Resolve an image column into its storage form.
///
/// The schema is provisioned outside this service, so the column may be
/// `BYTEA` (raw JPEG) or a text type (pre-encoded). NULL and any other
/// column type decode to [`ImageColumn::Absent`].
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the column is missing from the row or its
/// value cannot be decoded as the reported type.
pub fn decode_image_column(row: &PgRow, column: &str) -> Result<ImageColumn, sqlx::Error> {
    let raw = row.try_get_raw(column)?;
    if raw.is_null() {
        return Ok(ImageColumn::Absent);
    }
    let type_name = raw.type_info().name().to_ascii_uppercase();

    match type_name.as_str() {
        "BYTEA" => Ok(ImageColumn::Bytes(row.try_get::<Vec<u8>, _>(column)?)),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" | "CHAR" => {
            Ok(ImageColumn::Encoded(row.try_get::<String, _>(column)?))
        }
        other => {
            tracing::warn!(column, column_type = other, "unsupported image column type");
            Ok(ImageColumn::Absent)
        }
    }
}
