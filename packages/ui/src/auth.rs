//! Authentication context and hooks for the UI.

use api::ApiError;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use store::HbnbConfig;

use crate::context::AppContext;
use crate::gate::LOGIN_PATH;
use crate::Icon;
use crate::icons::{FaRightFromBracket, FaRightToBracket};

/// Authentication state for the application.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AuthState {
    pub authenticated: bool,
    /// The token claims the admin role. Only used to show admin actions.
    pub admin: bool,
}

impl AuthState {
    /// Read the current state from the session.
    pub fn from_app(app: &AppContext) -> Self {
        let authenticated = app.session.is_authenticated();
        Self {
            authenticated,
            admin: authenticated && app.session.is_admin(),
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Re-check the session and update the auth signal (and with it the
/// login/logout control). Returns whether a live session exists.
pub fn refresh_auth(app: &AppContext, auth: &mut Signal<AuthState>) -> bool {
    let state = AuthState::from_app(app);
    if *auth.peek() != state {
        auth.set(state);
    }
    state.authenticated
}

/// Store a freshly issued token and mark the UI signed in.
pub fn begin_session(app: &AppContext, auth: &mut Signal<AuthState>, token: &str) {
    app.session.start(token);
    refresh_auth(app, auth);
    tracing::info!("Signed in");
}

/// Sign out: notify the API without waiting, drop the token and go to the
/// login page. A failed logout call is logged only.
pub fn end_session(app: &AppContext, auth: &mut Signal<AuthState>, nav: Navigator) {
    if let Some(token) = app.session.token() {
        let client = app.client.clone();
        spawn_forever(async move {
            if let Err(e) = client.logout(&token).await {
                tracing::warn!("Error during logout: {}", e);
            }
        });
    }
    app.session.clear();
    auth.set(AuthState::default());
    nav.replace(LOGIN_PATH);
}

/// Drop a token the API has stopped accepting and send the visitor to log in.
/// Returns whether `err` was such a rejection.
pub fn expire_on_unauthorized(
    app: &AppContext,
    auth: &mut Signal<AuthState>,
    nav: Navigator,
    err: &ApiError,
) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    tracing::info!("Session rejected by the API, signing out");
    app.session.clear();
    auth.set(AuthState::default());
    nav.replace(LOGIN_PATH);
    true
}

/// Provider component that builds the app context from `config` and tracks
/// authentication state. Wrap your app with this component.
#[component]
pub fn AuthProvider(config: HbnbConfig, children: Element) -> Element {
    let app = use_context_provider(|| AppContext::new(&config));
    let auth_state = use_signal(|| AuthState::from_app(&app));

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// The login/logout control. Shows "Login" linking to the login page, or
/// "Logout" which ends the session.
#[component]
pub fn AuthButton(#[props(default = "login-button".to_string())] class: String) -> Element {
    let app = crate::use_app();
    let mut auth = use_auth();
    let nav = use_navigator();

    if auth().authenticated {
        let onclick = move |evt: MouseEvent| {
            evt.prevent_default();
            end_session(&app, &mut auth, nav);
        };
        rsx! {
            a {
                class: "{class}",
                href: "#",
                onclick: onclick,
                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                " Logout"
            }
        }
    } else {
        rsx! {
            Link {
                class: "{class}",
                to: LOGIN_PATH,
                Icon { icon: FaRightToBracket, width: 14, height: 14 }
                " Login"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_follows_session() {
        let app = AppContext::new(&HbnbConfig::default());
        assert_eq!(AuthState::from_app(&app), AuthState::default());

        app.session.start("x.eyJyb2xlIjoidXNlciJ9.y");
        assert_eq!(
            AuthState::from_app(&app),
            AuthState { authenticated: true, admin: false }
        );

        app.session.start("x.eyJyb2xlIjoiYWRtaW4ifQ.y");
        assert_eq!(
            AuthState::from_app(&app),
            AuthState { authenticated: true, admin: true }
        );

        app.session.clear();
        assert_eq!(AuthState::from_app(&app), AuthState::default());
    }
}
