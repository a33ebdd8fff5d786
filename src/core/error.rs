use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Authentication required: {0}")]
    Auth(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

fn error_page(status: StatusCode, message: &str) -> Response {
    let body = format!(
        "<!doctype html><html><body><h1>{}</h1><p>{}</p>\
         <p><a href=\"/dashboard\">Back to dashboard</a></p></body></html>",
        status, message
    );
    (status, Html(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Expected failures get user-facing pages or redirects; handlers
            // usually intercept Validation/Auth first to flash a message.
            AppError::Auth(_) => Redirect::to("/login").into_response(),
            AppError::NotFound(ref msg) => error_page(StatusCode::NOT_FOUND, msg),
            AppError::Forbidden(ref msg) => error_page(StatusCode::FORBIDDEN, msg),
            AppError::Validation(ref msg) => error_page(StatusCode::BAD_REQUEST, msg),
            AppError::BadRequest(ref msg) => error_page(StatusCode::BAD_REQUEST, msg),

            // Anything else is fatal to the current request.
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                error_page(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred",
                )
            }
            AppError::Io(ref e) => {
                tracing::error!("Storage I/O error: {:?}", e);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, "Storage error occurred")
            }
            AppError::Template(ref e) => {
                tracing::error!("Template error: {:?}", e);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
