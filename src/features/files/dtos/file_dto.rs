use serde::Serialize;

use crate::features::files::models::HealthFile;

/// Row shape for the dashboard table.
#[derive(Debug, Serialize)]
pub struct FileRowDto {
    pub id: i64,
    pub original_filename: String,
    pub file_type: String,
    pub description: String,
    pub uploaded_at: String,
}

impl From<HealthFile> for FileRowDto {
    fn from(file: HealthFile) -> Self {
        Self {
            id: file.id,
            original_filename: file.original_filename,
            file_type: file.file_type,
            description: file.description.unwrap_or_default(),
            uploaded_at: file.uploaded_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}
