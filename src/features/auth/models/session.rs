use serde::{Deserialize, Serialize};

/// Request-scoped identity of the authenticated caller, injected into
/// request extensions by the `require_session` middleware. Carries the user
/// id and username only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
}
