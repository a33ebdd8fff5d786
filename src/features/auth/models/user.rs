use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a registered account. The password is stored only as
/// a salted argon2 hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
