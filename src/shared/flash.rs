//! One-shot flash messages carried across a redirect in a cookie and
//! cleared on the next page render.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Serialize)]
pub struct Flash {
    pub level: String,
    pub message: String,
}

pub fn flash_success(jar: CookieJar, message: &str) -> CookieJar {
    push(jar, "success", message)
}

pub fn flash_error(jar: CookieJar, message: &str) -> CookieJar {
    push(jar, "error", message)
}

fn push(jar: CookieJar, level: &str, message: &str) -> CookieJar {
    let value = format!("{}:{}", level, message);
    jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .build(),
    )
}

/// Read and clear the pending flash message, if any.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar.get(FLASH_COOKIE).and_then(|cookie| {
        cookie.value().split_once(':').map(|(level, message)| Flash {
            level: level.to_string(),
            message: message.to_string(),
        })
    });

    let jar = if flash.is_some() {
        jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/").build())
    } else {
        jar
    };

    (jar, flash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_flash_returns_and_clears_the_message() {
        let jar = flash_success(CookieJar::new(), "It worked.");
        let (jar, flash) = take_flash(jar);

        let flash = flash.expect("flash message");
        assert_eq!(flash.level, "success");
        assert_eq!(flash.message, "It worked.");

        // The returned jar carries a removal cookie for the flash.
        let removal = jar.get(FLASH_COOKIE);
        assert!(removal.is_none() || removal.unwrap().value().is_empty());
    }

    #[test]
    fn take_flash_without_message_is_none() {
        let (_jar, flash) = take_flash(CookieJar::new());
        assert!(flash.is_none());
    }

    #[test]
    fn message_may_contain_separator_characters() {
        let jar = flash_error(CookieJar::new(), "Error: something failed");
        let (_jar, flash) = take_flash(jar);
        assert_eq!(flash.unwrap().message, "Error: something failed");
    }
}
