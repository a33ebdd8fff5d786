use sqlx::SqlitePool;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::auth::dtos::{LoginForm, RegisterForm};
use crate::features::auth::models::User;
use crate::features::auth::password::{hash_password, verify_password};
use crate::shared::validation::first_error_message;

pub struct AuthService {
    pool: SqlitePool,
}

impl AuthService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new account. Validates the form, rejects duplicate usernames
    /// and emails, and stores only a salted argon2 hash of the password.
    pub async fn register(&self, form: RegisterForm) -> Result<User, AppError> {
        form.validate()
            .map_err(|e| AppError::Validation(first_error_message(&e)))?;

        if form.password != form.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        if self.find_by_username(&form.username).await?.is_some() {
            return Err(AppError::Validation("Username already exists".to_string()));
        }
        if self.email_exists(&form.email).await? {
            return Err(AppError::Validation("Email already exists".to_string()));
        }

        let password_hash = hash_password(&form.password)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(&form.username)
        .bind(&form.email)
        .bind(&password_hash)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Backstop for a concurrent insert racing past the pre-checks.
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                AppError::Validation("Username or email already exists".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(user)
    }

    /// Check credentials. The error message is identical for an unknown
    /// username and a wrong password.
    pub async fn login(&self, form: LoginForm) -> Result<User, AppError> {
        let Some(user) = self.find_by_username(&form.username).await? else {
            return Err(Self::invalid_credentials());
        };

        let ok = verify_password(&form.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Failed to verify password: {e}")))?;
        if !ok {
            return Err(Self::invalid_credentials());
        }

        Ok(user)
    }

    fn invalid_credentials() -> AppError {
        AppError::Auth("Invalid username or password".to_string())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    fn register_form(username: &str, email: &str, password: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_stores_a_hash_not_the_plaintext() {
        let pool = test_pool().await;
        let service = AuthService::new(pool);

        let user = service
            .register(register_form("alice", "alice@example.com", "pw123"))
            .await
            .unwrap();

        assert_ne!(user.password_hash, "pw123");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn mismatched_passwords_are_rejected_without_creating_a_row() {
        let pool = test_pool().await;
        let service = AuthService::new(pool.clone());

        let mut form = register_form("alice", "alice@example.com", "pw123");
        form.confirm_password = "pw124".to_string();

        let err = service.register(form).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Passwords do not match"));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let pool = test_pool().await;
        let service = AuthService::new(pool);

        service
            .register(register_form("alice", "alice@example.com", "pw123"))
            .await
            .unwrap();

        let err = service
            .register(register_form("alice", "other@example.com", "pw123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Username already exists"));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let pool = test_pool().await;
        let service = AuthService::new(pool);

        service
            .register(register_form("alice", "alice@example.com", "pw123"))
            .await
            .unwrap();

        let err = service
            .register(register_form("bob", "alice@example.com", "pw123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Email already exists"));
    }

    #[tokio::test]
    async fn invalid_username_shape_is_rejected() {
        let pool = test_pool().await;
        let service = AuthService::new(pool);

        let err = service
            .register(register_form("bad name!", "alice@example.com", "pw123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn login_succeeds_with_correct_credentials() {
        let pool = test_pool().await;
        let service = AuthService::new(pool);

        service
            .register(register_form("alice", "alice@example.com", "pw123"))
            .await
            .unwrap();

        let user = service
            .login(LoginForm {
                username: "alice".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn login_failures_use_one_generic_message() {
        let pool = test_pool().await;
        let service = AuthService::new(pool);

        service
            .register(register_form("alice", "alice@example.com", "pw123"))
            .await
            .unwrap();

        let wrong_password = service
            .login(LoginForm {
                username: "alice".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_user = service
            .login(LoginForm {
                username: "mallory".to_string(),
                password: "pw123".to_string(),
            })
            .await
            .unwrap_err();

        let AppError::Auth(a) = wrong_password else {
            panic!("expected auth error");
        };
        let AppError::Auth(b) = unknown_user else {
            panic!("expected auth error");
        };
        assert_eq!(a, b);
    }
}
