use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::features::files::handlers::file_handler;
use crate::features::files::services::FileService;
use crate::shared::constants::MAX_FILE_SIZE;

pub fn routes(service: Arc<FileService>) -> Router {
    Router::new()
        .route("/dashboard", get(file_handler::dashboard))
        .route(
            "/upload",
            get(file_handler::upload_page)
                .post(file_handler::upload)
                .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 1024 * 1024)),
        )
        .route("/download/{file_id}", get(file_handler::download))
        .route("/delete/{file_id}", get(file_handler::delete))
        .with_state(service)
}
