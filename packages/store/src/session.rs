//! # Session persistence — the [`SessionStore`] trait
//!
//! The client keeps exactly one piece of durable state: the bearer token issued
//! at login. [`SessionStore`] abstracts where that token lives so the session
//! logic in the `api` crate works the same against a browser cookie jar
//! ([`crate::CookieStore`]) and an in-process map ([`crate::MemoryStore`]).
//!
//! Entries carry an absolute expiry. A store must never hand back an entry
//! whose expiry has passed; for cookies the browser enforces this, the memory
//! store checks on read.

use chrono::{DateTime, Utc};

/// Key/value persistence for client-side session entries.
pub trait SessionStore {
    /// Read a live entry, or `None` if it is missing or expired.
    fn get(&self, name: &str) -> Option<String>;

    /// Write an entry, replacing any previous value under the same name.
    fn set(&self, name: &str, value: &str, expires: DateTime<Utc>);

    /// Delete an entry. Removing a missing entry is a no-op.
    fn remove(&self, name: &str);
}
