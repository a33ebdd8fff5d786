use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginForm, RegisterForm};
use crate::features::auth::models::SessionUser;
use crate::features::auth::routes::AuthState;
use crate::shared::flash::{flash_error, flash_success, take_flash};
use crate::shared::templates::render_page;

pub async fn register_page(jar: CookieJar) -> Result<impl IntoResponse> {
    let (jar, flash) = take_flash(jar);
    let page = render_page("register.html", context! { flash })?;
    Ok((jar, page))
}

pub async fn register(
    State(state): State<AuthState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse> {
    match state.auth.register(form).await {
        Ok(user) => {
            tracing::info!(username = %user.username, "new user registered");
            let jar = flash_success(jar, "Registration successful. Please log in.");
            Ok((jar, Redirect::to("/login")))
        }
        Err(AppError::Validation(msg)) => {
            let jar = flash_error(jar, &msg);
            Ok((jar, Redirect::to("/register")))
        }
        Err(e) => Err(e),
    }
}

pub async fn login_page(jar: CookieJar) -> Result<impl IntoResponse> {
    let (jar, flash) = take_flash(jar);
    let page = render_page("login.html", context! { flash })?;
    Ok((jar, page))
}

pub async fn login(
    State(state): State<AuthState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse> {
    match state.auth.login(form).await {
        Ok(user) => {
            let session_user = SessionUser {
                id: user.id,
                username: user.username,
            };
            let token = state.sessions.issue(&session_user)?;
            let jar = jar.add(state.sessions.cookie(token));
            let jar = flash_success(jar, "Logged in successfully.");
            Ok((jar, Redirect::to("/dashboard")))
        }
        Err(AppError::Auth(msg)) => {
            let jar = flash_error(jar, &msg);
            Ok((jar, Redirect::to("/login")))
        }
        Err(e) => Err(e),
    }
}

pub async fn logout(State(state): State<AuthState>, jar: CookieJar) -> Result<impl IntoResponse> {
    let jar = jar.add(state.sessions.clear_cookie());
    let jar = flash_success(jar, "Logged out.");
    Ok((jar, Redirect::to("/")))
}
