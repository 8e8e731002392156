//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{begin_session, use_app, use_auth, InlineMessage, Page, PageGate, LISTING_PATH, REGISTER_PATH};

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        PageGate {
            page: Page::Login,
            LoginForm {}
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let app = use_app();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            match app.client.login(email().trim(), &password()).await {
                Ok(response) => {
                    if let Some(user) = &response.user {
                        tracing::info!("Logged in as {}", user.display_name());
                    }
                    let token = response.access_token.unwrap_or_default();
                    begin_session(&app, &mut auth, &token);
                    nav.push(LISTING_PATH);
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",
            h1 { "Login" }

            if let Some(message) = error() {
                InlineMessage { message }
            }

            form {
                id: "login-form",
                onsubmit: handle_login,

                div {
                    class: "form-group",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                button {
                    r#type: "submit",
                    class: "login-button",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: REGISTER_PATH, "Register" }
            }
        }
    }
}
