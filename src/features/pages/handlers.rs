use axum::response::IntoResponse;
use axum_extra::extract::CookieJar;
use minijinja::context;

use crate::core::error::Result;
use crate::shared::flash::take_flash;
use crate::shared::templates::render_page;

pub async fn index(jar: CookieJar) -> Result<impl IntoResponse> {
    let (jar, flash) = take_flash(jar);
    let page = render_page("index.html", context! { flash })?;
    Ok((jar, page))
}
