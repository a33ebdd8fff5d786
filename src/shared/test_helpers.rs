#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

#[cfg(test)]
use tempfile::TempDir;

#[cfg(test)]
use crate::core::database;
#[cfg(test)]
use crate::features::auth::dtos::RegisterForm;
#[cfg(test)]
use crate::features::auth::models::User;
#[cfg(test)]
use crate::features::auth::{AuthService, SessionService};
#[cfg(test)]
use crate::modules::storage::LocalStorage;

/// In-memory database with the schema applied. A single never-idle
/// connection keeps the in-memory database alive and shared.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    database::init_schema(&pool).await.expect("schema");
    pool
}

/// Temporary storage root; the TempDir guard must outlive the storage.
#[cfg(test)]
pub async fn test_storage() -> (TempDir, Arc<LocalStorage>) {
    let dir = TempDir::new().expect("tempdir");
    let storage = LocalStorage::new(dir.path()).await.expect("storage root");
    (dir, Arc::new(storage))
}

#[cfg(test)]
pub fn test_session_service() -> Arc<SessionService> {
    Arc::new(SessionService::new("test-secret", 1))
}

#[cfg(test)]
pub async fn create_test_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password: &str,
) -> User {
    let form = RegisterForm {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
    };
    AuthService::new(pool.clone())
        .register(form)
        .await
        .expect("register test user")
}
