//! Application context shared by every page.
//!
//! Holds the API client and the session explicitly, so pages never reach for
//! global state. The session is backed by:
//! - **Web** (WASM + `web` feature): the `token` cookie via [`store::CookieStore`]
//! - **Native** (tests, tooling): an in-memory [`store::MemoryStore`]

use api::{HbnbClient, Session};
use dioxus::prelude::*;
use store::HbnbConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::CookieStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Client and session handles for the running app.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub client: HbnbClient,
    pub session: Session<PlatformStore>,
}

impl AppContext {
    pub fn new(config: &HbnbConfig) -> Self {
        Self {
            client: HbnbClient::new(&config.api),
            session: Session::new(PlatformStore::new(), &config.session),
        }
    }
}

/// Get the app context provided by [`crate::AuthProvider`].
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}
