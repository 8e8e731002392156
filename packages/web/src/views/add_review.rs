//! Review submission form.

use api::ReviewDraft;
use dioxus::prelude::*;
use ui::{
    acknowledge, expire_on_unauthorized, place_path, use_app, use_auth, InlineMessage, Page,
    PageGate,
};

#[component]
pub fn AddReview(id: String) -> Element {
    rsx! {
        PageGate {
            page: Page::AddReview,
            place_id: id.clone(),
            ReviewForm { id }
        }
    }
}

#[component]
fn ReviewForm(id: String) -> Element {
    let app = use_app();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut title = use_signal(|| Option::<String>::None);
    let mut rating = use_signal(String::new);
    let mut text = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let place_id = id.clone();
    let loader_app = app.clone();
    use_hook(move || {
        spawn(async move {
            let token = loader_app.session.token();
            match loader_app.client.get_place(&place_id, token.as_deref()).await {
                Ok(place) => title.set(Some(place.display_title().to_string())),
                Err(e) if expire_on_unauthorized(&loader_app, &mut auth, nav, &e) => {}
                Err(e) => {
                    tracing::error!("Error loading place {}: {}", place_id, e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    let place_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        let place_id = place_id.clone();
        spawn(async move {
            error.set(None);

            let draft = match ReviewDraft::parse(&rating(), &text()) {
                Ok(draft) => draft,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let Some(token) = app.session.token() else {
                error.set(Some("Your session has expired. Please log in again.".to_string()));
                return;
            };

            submitting.set(true);
            match app.client.submit_review(&place_id, &token, &draft).await {
                Ok(_) => {
                    tracing::info!("Review submitted for {}", place_id);
                    acknowledge("Review submitted successfully!");
                    nav.push(place_path(&place_id));
                }
                Err(e) if expire_on_unauthorized(&app, &mut auth, nav, &e) => return,
                Err(e) => {
                    tracing::warn!("Review submission failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let heading = match title() {
        Some(title) => format!("Review for {title}"),
        None => "Add Review".to_string(),
    };

    rsx! {
        if let Some(title) = title() {
            document::Title { "Add Review - {title}" }
        }

        section {
            id: "add-review",
            class: "add-review",
            h1 { id: "place-name", "{heading}" }

            if let Some(message) = error() {
                InlineMessage { message }
            }

            form {
                id: "review-form",
                onsubmit: handle_submit,

                div {
                    class: "form-group",
                    label { r#for: "rating", "Rating" }
                    select {
                        id: "rating",
                        required: true,
                        value: "{rating}",
                        onchange: move |e| rating.set(e.value()),
                        option { value: "", "Select a rating" }
                        for n in (1..=5).rev() {
                            option { key: "{n}", value: "{n}", "{n}" }
                        }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "text", "Your review" }
                    textarea {
                        id: "text",
                        required: true,
                        rows: 6,
                        maxlength: 1000,
                        value: "{text}",
                        oninput: move |e| text.set(e.value()),
                    }
                }

                button {
                    r#type: "submit",
                    class: "details-button",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit Review" }
                }
            }

            Link {
                class: "back-link",
                to: place_path(&id),
                "Back to place"
            }
        }
    }
}
