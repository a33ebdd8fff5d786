use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::auth::handlers::auth_handler;
use crate::features::auth::services::{AuthService, SessionService};

#[derive(Clone)]
pub struct AuthState {
    pub auth: Arc<AuthService>,
    pub sessions: Arc<SessionService>,
}

pub fn routes(auth: Arc<AuthService>, sessions: Arc<SessionService>) -> Router {
    Router::new()
        .route(
            "/register",
            get(auth_handler::register_page).post(auth_handler::register),
        )
        .route(
            "/login",
            get(auth_handler::login_page).post(auth_handler::login),
        )
        .route("/logout", get(auth_handler::logout))
        .with_state(AuthState { auth, sessions })
}
