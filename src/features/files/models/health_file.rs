use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for an uploaded health record. `storage_name` is the
/// opaque on-disk name, `original_filename` the sanitized name shown to
/// the user and offered on download.
#[derive(Debug, Clone, FromRow)]
pub struct HealthFile {
    pub id: i64,
    pub storage_name: String,
    pub original_filename: String,
    pub file_type: String,
    pub description: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub user_id: i64,
}
