use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::SessionUser;
use crate::features::files::dtos::FileRowDto;
use crate::features::files::services::FileService;
use crate::shared::flash::{flash_error, flash_success, take_flash};
use crate::shared::templates::render_page;

pub async fn dashboard(
    State(service): State<Arc<FileService>>,
    user: SessionUser,
    jar: CookieJar,
) -> Result<impl IntoResponse> {
    let files: Vec<FileRowDto> = service
        .list(user.id)
        .await?
        .into_iter()
        .map(FileRowDto::from)
        .collect();

    let (jar, flash) = take_flash(jar);
    let page = render_page(
        "dashboard.html",
        context! { flash, username => user.username, files },
    )?;
    Ok((jar, page))
}

pub async fn upload_page(user: SessionUser, jar: CookieJar) -> Result<impl IntoResponse> {
    let (jar, flash) = take_flash(jar);
    let page = render_page("upload.html", context! { flash, username => user.username })?;
    Ok((jar, page))
}

pub async fn upload(
    State(service): State<Arc<FileService>>,
    user: SessionUser,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("file") => {
                let name = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !name.is_empty() {
                    file = Some((name, data.to_vec()));
                }
            }
            Some("description") => {
                description = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))
                    .map(Some)?;
            }
            _ => {}
        }
    }

    let Some((name, data)) = file else {
        let jar = flash_error(jar, "No file selected");
        return Ok((jar, Redirect::to("/upload")));
    };

    match service.upload(user.id, &name, description, data).await {
        Ok(_) => {
            let jar = flash_success(jar, "File uploaded successfully.");
            Ok((jar, Redirect::to("/dashboard")))
        }
        Err(AppError::Validation(msg)) => {
            let jar = flash_error(jar, &msg);
            Ok((jar, Redirect::to("/upload")))
        }
        Err(e) => Err(e),
    }
}

pub async fn download(
    State(service): State<Arc<FileService>>,
    user: SessionUser,
    Path(file_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let (file, data) = service.download(user.id, file_id).await?;

    let mime = mime_guess::from_path(&file.original_filename).first_or_octet_stream();
    let disposition = format!("attachment; filename=\"{}\"", file.original_filename);

    Ok((
        [
            (CONTENT_TYPE, mime.to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        data,
    ))
}

pub async fn delete(
    State(service): State<Arc<FileService>>,
    user: SessionUser,
    jar: CookieJar,
    Path(file_id): Path<i64>,
) -> Result<impl IntoResponse> {
    service.delete(user.id, file_id).await?;
    let jar = flash_success(jar, "File deleted successfully.");
    Ok((jar, Redirect::to("/dashboard")))
}
