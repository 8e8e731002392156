//! # Client configuration — `hbnb.toml`
//!
//! Defines the TOML configuration the web client is built with
//! (filename: [`HbnbConfig::filename`] = `"hbnb.toml"`). The browser cannot
//! read files at runtime, so the `web` crate embeds the file at compile time
//! and parses it on startup.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:5000/api/v1"
//!
//! [session]
//! cookie_name = "token"
//! ttl_days = 7
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`HbnbConfig`] | Top-level config. TOML parsing with a logged fallback to defaults, the canonical filename. |
//! | [`ApiConfig`] | Base URL every REST path is appended to. |
//! | [`SessionConfig`] | Cookie name and default session lifetime in days. |
//!
//! Every struct derives `Default`, so a missing section or an empty file is
//! equivalent to the default configuration.

use serde::Deserialize;

/// Top-level configuration stored in `hbnb.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HbnbConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// REST API location.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:5000/api/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Session cookie settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie holding the bearer token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Lifetime of a new session in days.
    #[serde(default = "default_ttl_days")]
    pub ttl_days: i64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/api/v1".to_string()
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_ttl_days() -> i64 {
    7
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_days: default_ttl_days(),
        }
    }
}

impl HbnbConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "hbnb.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to the defaults when the text is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}: {}, using defaults", Self::filename(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = HbnbConfig::from_toml("").unwrap();
        assert_eq!(config, HbnbConfig::default());
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000/api/v1");
        assert_eq!(config.session.cookie_name, "token");
        assert_eq!(config.session.ttl_days, 7);
    }

    #[test]
    fn test_partial_sections() {
        let config = HbnbConfig::from_toml(
            r#"
            [session]
            ttl_days = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.session.ttl_days, 1);
        assert_eq!(config.session.cookie_name, "token");
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_invalid_falls_back() {
        let config = HbnbConfig::from_toml_or_default("[api\nbase_url = 3");
        assert_eq!(config, HbnbConfig::default());
    }
}
