//! The client-held session: one bearer token with an expiry.

use chrono::{DateTime, TimeDelta, Utc};
use store::{SessionConfig, SessionStore};

use crate::auth::claims;

/// Bearer-token session persisted in a [`SessionStore`].
///
/// Cheap to clone whenever the store is; pages hold it through the app
/// context instead of reaching for global state.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
    cookie_name: String,
    ttl_days: i64,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S, config: &SessionConfig) -> Self {
        Self {
            store,
            cookie_name: config.cookie_name.clone(),
            ttl_days: config.ttl_days,
        }
    }

    /// Persist `token` for `ttl_days`, replacing any existing session.
    ///
    /// A lifetime past the representable range is clamped to the latest (or,
    /// when negative, earliest) instant.
    pub fn set(&self, token: &str, ttl_days: i64) {
        let expires = expiry_after(ttl_days);
        self.store.set(&self.cookie_name, token, expires);
        tracing::debug!("Session stored, expires {}", expires);
    }

    /// Persist `token` for the configured default lifetime.
    pub fn start(&self, token: &str) {
        self.set(token, self.ttl_days);
    }

    /// The current token, if a live one exists.
    pub fn token(&self) -> Option<String> {
        self.store.get(&self.cookie_name).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Whether the current token claims the admin role. UI hint only.
    pub fn is_admin(&self) -> bool {
        self.token().is_some_and(|t| claims::is_admin(&t))
    }

    /// Drop the token.
    pub fn clear(&self) {
        self.store.remove(&self.cookie_name);
        tracing::debug!("Session cleared");
    }
}

fn expiry_after(ttl_days: i64) -> DateTime<Utc> {
    TimeDelta::try_days(ttl_days)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .unwrap_or_else(|| {
            tracing::warn!("Session lifetime of {} days is out of range, clamping", ttl_days);
            if ttl_days > 0 {
                DateTime::<Utc>::MAX_UTC
            } else {
                DateTime::<Utc>::MIN_UTC
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    use store::MemoryStore;

    fn session() -> Session<MemoryStore> {
        Session::new(MemoryStore::new(), &SessionConfig::default())
    }

    #[test]
    fn test_token_roundtrip() {
        let session = session();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        session.start("header.payload.sig");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("header.payload.sig"));

        // Reading does not consume it
        assert_eq!(session.token().as_deref(), Some("header.payload.sig"));
    }

    #[test]
    fn test_set_overwrites() {
        let session = session();
        session.set("first", 7);
        session.set("second", 1);
        assert_eq!(session.token().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear() {
        let session = session();
        session.start("abc");
        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_expired_session_is_absent() {
        let session = session();
        session.set("abc", 0);
        assert!(!session.is_authenticated());

        session.set("abc", -1);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_huge_lifetime_is_clamped() {
        let config = SessionConfig {
            ttl_days: 100_000_000,
            ..SessionConfig::default()
        };
        let session = Session::new(MemoryStore::new(), &config);
        session.start("a.b.c");
        assert_eq!(session.token().as_deref(), Some("a.b.c"));
        assert_eq!(expiry_after(i64::MAX), DateTime::<Utc>::MAX_UTC);

        session.set("a.b.c", -100_000_000);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_shared_store() {
        let store = MemoryStore::new();
        let a = Session::new(store.clone(), &SessionConfig::default());
        let b = Session::new(store, &SessionConfig::default());
        a.start("abc");
        assert_eq!(b.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_custom_cookie_name() {
        let store = MemoryStore::new();
        let config = SessionConfig {
            cookie_name: "hbnb_token".to_string(),
            ttl_days: 1,
        };
        let session = Session::new(store.clone(), &config);
        session.start("abc");
        assert_eq!(store.get("hbnb_token").as_deref(), Some("abc"));
        assert_eq!(store.get("token"), None);
    }

    #[test]
    fn test_is_admin() {
        let session = session();
        assert!(!session.is_admin());

        let payload = URL_SAFE_NO_PAD.encode(r#"{"role":"admin"}"#);
        session.start(&format!("h.{payload}.s"));
        assert!(session.is_admin());
    }
}
