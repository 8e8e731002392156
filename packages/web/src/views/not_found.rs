use dioxus::prelude::*;
use ui::LISTING_PATH;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));

    rsx! {
        section {
            class: "not-found",
            h1 { "Page not found" }
            Link { to: LISTING_PATH, "Back to places" }
        }
    }
}
