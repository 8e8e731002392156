//! On-load page gating.
//!
//! Every page decides, before it fetches anything, whether to render or to
//! send the visitor elsewhere. [`Page::gate`] is that decision as a pure
//! function; [`PageGate`] applies it and only mounts its children when the page
//! may proceed, so a redirected page never issues a request.

use dioxus::prelude::*;

use crate::auth::{refresh_auth, use_auth};
use crate::context::{use_app, AppContext};

pub const LOGIN_PATH: &str = "/login";
pub const LISTING_PATH: &str = "/";
pub const REGISTER_PATH: &str = "/register";

pub fn place_path(place_id: &str) -> String {
    format!("/place?id={place_id}")
}

pub fn add_review_path(place_id: &str) -> String {
    format!("/add_review?id={place_id}")
}

/// The pages of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Listing,
    PlaceDetail,
    AddReview,
}

/// Outcome of gating a page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    Redirect(&'static str),
}

impl Page {
    pub fn requires_session(self) -> bool {
        matches!(self, Page::Listing | Page::PlaceDetail | Page::AddReview)
    }

    pub fn requires_place_id(self) -> bool {
        matches!(self, Page::PlaceDetail | Page::AddReview)
    }

    /// Decide whether the page may load.
    ///
    /// The session is checked first, then the place id. A signed-in visitor
    /// landing on the login page goes to the listing.
    pub fn gate(self, authenticated: bool, place_id: Option<&str>) -> Gate {
        if self == Page::Login && authenticated {
            return Gate::Redirect(LISTING_PATH);
        }
        if self.requires_session() && !authenticated {
            return Gate::Redirect(LOGIN_PATH);
        }
        if self.requires_place_id() && place_id.map_or(true, |id| id.trim().is_empty()) {
            return Gate::Redirect(LISTING_PATH);
        }
        Gate::Proceed
    }
}

/// Gate `page` against the current session. Reads only; no signal is written.
fn decide(app: &AppContext, page: Page, place_id: Option<&str>) -> Gate {
    page.gate(app.session.is_authenticated(), place_id)
}

/// Renders `children` only if `page` passes its gate; otherwise redirects.
///
/// The decision is read from the session during render. Syncing the auth
/// signal and navigating happen in an effect after the first render.
#[component]
pub fn PageGate(page: Page, place_id: Option<String>, children: Element) -> Element {
    let app = use_app();
    let mut auth = use_auth();
    let nav = use_navigator();

    let gate = use_hook(|| decide(&app, page, place_id.as_deref()));

    use_effect(move || {
        refresh_auth(&app, &mut auth);
        if let Gate::Redirect(to) = gate {
            tracing::debug!("{:?} redirected to {}", page, to);
            nav.replace(to);
        }
    });

    match gate {
        Gate::Proceed => rsx! { {children} },
        Gate::Redirect(_) => rsx! {},
    }
}
