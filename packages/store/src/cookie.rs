//! # Cookie-backed session store — browser-side persistence
//!
//! [`CookieStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. Entries are written to `document.cookie` as
//! `name=<uri-encoded value>; expires=<HTTP date>; path=/`, so the browser
//! drops them on expiry and every page of the site sees the same session.
//!
//! The string handling ([`find_cookie`], [`cookie_assignment`],
//! [`expired_assignment`]) is plain Rust so it can be tested natively; only the
//! `document` access is gated on `wasm32` + the `web` feature.
//!
//! ## Error handling
//!
//! As with the rest of the browser glue, DOM failures are swallowed: an
//! unreadable cookie jar reads as "no session", a failed write leaves the
//! previous state in place. Both are logged.

use chrono::{DateTime, Utc};

/// `expires=` attribute format required by `document.cookie`.
const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Find the raw (still encoded) value of `name` in a `document.cookie` string.
pub fn find_cookie<'a>(jar: &'a str, name: &str) -> Option<&'a str> {
    jar.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

/// Build the assignment string that stores `encoded_value` until `expires`.
pub fn cookie_assignment(name: &str, encoded_value: &str, expires: DateTime<Utc>) -> String {
    format!(
        "{name}={encoded_value}; expires={}; path=/",
        expires.format(HTTP_DATE)
    )
}

/// Build the assignment string that deletes `name`.
pub fn expired_assignment(name: &str) -> String {
    format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/")
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::CookieStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web {
    use chrono::{DateTime, Utc};
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    use super::{cookie_assignment, expired_assignment, find_cookie};
    use crate::session::SessionStore;

    /// `document.cookie`-backed SessionStore for the web platform.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct CookieStore;

    impl CookieStore {
        pub fn new() -> Self {
            Self
        }

        fn document() -> Option<HtmlDocument> {
            web_sys::window()?
                .document()?
                .dyn_into::<HtmlDocument>()
                .ok()
        }

        fn write(assignment: &str) {
            let Some(doc) = Self::document() else {
                tracing::warn!("No document available, cookie not written");
                return;
            };
            if let Err(e) = doc.set_cookie(assignment) {
                tracing::warn!("Failed to write cookie: {:?}", e);
            }
        }
    }

    impl SessionStore for CookieStore {
        fn get(&self, name: &str) -> Option<String> {
            let jar = Self::document()?.cookie().ok()?;
            let raw = find_cookie(&jar, name)?;
            if raw.is_empty() {
                return None;
            }
            js_sys::decode_uri_component(raw).ok().map(String::from)
        }

        fn set(&self, name: &str, value: &str, expires: DateTime<Utc>) {
            let encoded = String::from(js_sys::encode_uri_component(value));
            Self::write(&cookie_assignment(name, &encoded, expires));
        }

        fn remove(&self, name: &str) {
            Self::write(&expired_assignment(name));
        }
    }
}
