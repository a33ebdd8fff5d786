//! HTML page rendering.
//!
//! Templates are embedded at compile time so rendering never depends on the
//! process working directory.

use axum::response::Html;
use minijinja::Environment;
use std::sync::OnceLock;

use crate::core::error::{AppError, Result};

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for (name, source) in [
        ("base.html", include_str!("../../templates/base.html")),
        ("index.html", include_str!("../../templates/index.html")),
        ("register.html", include_str!("../../templates/register.html")),
        ("login.html", include_str!("../../templates/login.html")),
        (
            "dashboard.html",
            include_str!("../../templates/dashboard.html"),
        ),
        ("upload.html", include_str!("../../templates/upload.html")),
    ] {
        env.add_template(name, source)
            .expect("embedded template must parse");
    }

    env
}

fn environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render an embedded page template to a full HTML response body.
pub fn render_page(name: &str, ctx: minijinja::Value) -> Result<Html<String>> {
    let template = environment().get_template(name).map_err(AppError::Template)?;
    let body = template.render(ctx).map_err(AppError::Template)?;
    Ok(Html(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_landing_page() {
        let page = render_page("index.html", minijinja::context! {}).unwrap();
        assert!(page.0.contains("<html"));
    }

    #[test]
    fn renders_flash_messages() {
        let flash = crate::shared::flash::Flash {
            level: "error".to_string(),
            message: "Something went wrong".to_string(),
        };
        let page = render_page("login.html", minijinja::context! { flash }).unwrap();
        assert!(page.0.contains("Something went wrong"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert!(render_page("nope.html", minijinja::context! {}).is_err());
    }
}
