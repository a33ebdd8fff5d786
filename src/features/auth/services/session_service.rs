//! Stateless cookie sessions backed by signed tokens.
//!
//! A successful login issues an HS256-signed token carrying the user id,
//! username and expiry, stored in an HttpOnly cookie. Requests to protected
//! routes verify the token signature and expiry; nothing is kept server-side.

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::features::auth::models::SessionUser;

pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    uid: i64,
    exp: usize,
}

pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl SessionService {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Sign a session token for the given user.
    pub fn issue(&self, user: &SessionUser) -> Result<String, AppError> {
        let claims = SessionClaims {
            sub: user.username.clone(),
            uid: user.id,
            exp: (Utc::now() + self.ttl).timestamp() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {e}")))
    }

    /// Verify a session token and recover the user it was issued to.
    pub fn verify(&self, token: &str) -> Result<SessionUser, AppError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AppError::Auth("Invalid or expired session".to_string()))?;
        Ok(SessionUser {
            id: data.claims.uid,
            username: data.claims.sub,
        })
    }

    /// Build the session cookie for a freshly issued token.
    pub fn cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
    }

    /// Build a removal cookie that expires the session on the client.
    pub fn clear_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build((SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        cookie.make_removal();
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new("test-secret", 1)
    }

    #[test]
    fn issued_token_verifies_back_to_the_same_user() {
        let svc = service();
        let user = SessionUser {
            id: 42,
            username: "alice".to_string(),
        };
        let token = svc.issue(&user).unwrap();
        let verified = svc.verify(&token).unwrap();
        assert_eq!(verified.id, 42);
        assert_eq!(verified.username, "alice");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let svc = service();
        let user = SessionUser {
            id: 1,
            username: "alice".to_string(),
        };
        let mut token = svc.issue(&user).unwrap();
        token.push('x');
        assert!(matches!(svc.verify(&token), Err(AppError::Auth(_))));
    }

    #[test]
    fn token_signed_with_a_different_secret_is_rejected() {
        let user = SessionUser {
            id: 1,
            username: "alice".to_string(),
        };
        let token = SessionService::new("other-secret", 1).issue(&user).unwrap();
        assert!(matches!(service().verify(&token), Err(AppError::Auth(_))));
    }
}
