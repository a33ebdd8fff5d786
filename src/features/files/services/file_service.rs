use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::features::files::filename::{file_extension, sanitize_filename};
use crate::features::files::models::HealthFile;
use crate::modules::storage::LocalStorage;

pub struct FileService {
    pool: SqlitePool,
    storage: Arc<LocalStorage>,
}

impl FileService {
    pub fn new(pool: SqlitePool, storage: Arc<LocalStorage>) -> Self {
        Self { pool, storage }
    }

    /// Store an uploaded file for the given owner. The blob lands on disk
    /// under a random opaque name; the sanitized original name is kept only
    /// for display and download.
    pub async fn upload(
        &self,
        user_id: i64,
        original_filename: &str,
        description: Option<String>,
        data: Vec<u8>,
    ) -> Result<HealthFile, AppError> {
        let display_name = sanitize_filename(original_filename)
            .ok_or_else(|| AppError::Validation("No file selected".to_string()))?;

        let file_type = file_extension(&display_name);
        let storage_name = format!("{}{}", Uuid::new_v4().simple(), file_type);

        self.storage.save(&storage_name, &data).await?;

        let description = description.filter(|d| !d.trim().is_empty());

        let file = sqlx::query_as::<_, HealthFile>(
            r#"
            INSERT INTO health_files
                (storage_name, original_filename, file_type, description, uploaded_at, user_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, storage_name, original_filename, file_type, description, uploaded_at, user_id
            "#,
        )
        .bind(&storage_name)
        .bind(&display_name)
        .bind(&file_type)
        .bind(&description)
        .bind(chrono::Utc::now())
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(file_id = file.id, user_id, "stored uploaded file");
        Ok(file)
    }

    /// List the owner's files, newest first.
    pub async fn list(&self, user_id: i64) -> Result<Vec<HealthFile>, AppError> {
        let files = sqlx::query_as::<_, HealthFile>(
            r#"
            SELECT id, storage_name, original_filename, file_type, description, uploaded_at, user_id
            FROM health_files
            WHERE user_id = ?
            ORDER BY uploaded_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(files)
    }

    /// Fetch a file's metadata and contents, enforcing ownership.
    pub async fn download(&self, user_id: i64, file_id: i64) -> Result<(HealthFile, Vec<u8>), AppError> {
        let file = self.find_owned(user_id, file_id).await?;
        let data = self.storage.read(&file.storage_name).await?;
        Ok((file, data))
    }

    /// Delete a file's row and its blob, enforcing ownership. A missing
    /// blob is tolerated so the row can always be cleaned up.
    pub async fn delete(&self, user_id: i64, file_id: i64) -> Result<(), AppError> {
        let file = self.find_owned(user_id, file_id).await?;

        self.storage.delete(&file.storage_name).await?;
        sqlx::query("DELETE FROM health_files WHERE id = ?")
            .bind(file.id)
            .execute(&self.pool)
            .await?;

        tracing::info!(file_id, user_id, "deleted file");
        Ok(())
    }

    async fn find_owned(&self, user_id: i64, file_id: i64) -> Result<HealthFile, AppError> {
        let file = sqlx::query_as::<_, HealthFile>(
            r#"
            SELECT id, storage_name, original_filename, file_type, description, uploaded_at, user_id
            FROM health_files
            WHERE id = ?
            "#,
        )
        .bind(file_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

        if file.user_id != user_id {
            return Err(AppError::Forbidden(
                "You do not have permission to access this file".to_string(),
            ));
        }
        Ok(file)
    }
}
