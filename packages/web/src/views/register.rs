//! Registration page view.

use std::time::Duration;

use api::NewUser;
use dioxus::prelude::*;
use ui::{use_app, InlineMessage, MessageKind, Page, PageGate, LOGIN_PATH};

/// How long the success message stays up before going to the login page.
const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        PageGate {
            page: Page::Register,
            RegisterForm {}
        }
    }
}

#[component]
fn RegisterForm() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = app.client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let user = NewUser {
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };

            match client.register(&user).await {
                Ok(()) => {
                    tracing::info!("Registered {}", user.email);
                    success.set(Some(
                        "Account created successfully! Redirecting to login...".to_string(),
                    ));
                    sleep(REDIRECT_DELAY).await;
                    nav.replace(LOGIN_PATH);
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",
            h1 { "Create an account" }

            if let Some(message) = success() {
                InlineMessage { message, kind: MessageKind::Success }
            }
            if let Some(message) = error() {
                InlineMessage { message }
            }

            form {
                id: "register-form",
                onsubmit: handle_register,

                div {
                    class: "form-group",
                    label { r#for: "first_name", "First name" }
                    input {
                        id: "first_name",
                        r#type: "text",
                        required: true,
                        value: "{first_name}",
                        oninput: move |e| first_name.set(e.value()),
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "last_name", "Last name" }
                    input {
                        id: "last_name",
                        r#type: "text",
                        required: true,
                        value: "{last_name}",
                        oninput: move |e| last_name.set(e.value()),
                    }
                }

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
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: LOGIN_PATH, "Login" }
            }
        }
    }
}

async fn sleep(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}
