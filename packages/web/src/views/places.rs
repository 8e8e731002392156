//! Place listing with the client-side price filter.

use api::{Place, PriceFilter};
use dioxus::prelude::*;
use ui::{expire_on_unauthorized, use_app, use_auth, Page, PageGate, PlaceCard, PriceFilterSelect};

#[component]
pub fn Places() -> Element {
    rsx! {
        PageGate {
            page: Page::Listing,
            PlaceListing {}
        }
    }
}

/// Loading state of the listing snapshot.
#[derive(Clone, Debug, PartialEq)]
enum Listing {
    Loading,
    Loaded(Vec<Place>),
    Failed,
}

#[component]
fn PlaceListing() -> Element {
    let app = use_app();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut places = use_signal(|| Listing::Loading);
    let mut filter = use_signal(|| PriceFilter::All);

    // Fetched once; the filter only reads this snapshot.
    use_hook(move || {
        spawn(async move {
            let token = app.session.token();
            match app.client.list_places(token.as_deref()).await {
                Ok(list) => {
                    tracing::debug!("Loaded {} places", list.len());
                    places.set(Listing::Loaded(list));
                }
                Err(e) if expire_on_unauthorized(&app, &mut auth, nav, &e) => {}
                Err(e) => {
                    tracing::error!("Error loading places: {}", e);
                    places.set(Listing::Failed);
                }
            }
        });
    });

    let current = filter();

    rsx! {
        section {
            id: "filter",
            PriceFilterSelect {
                value: current,
                on_change: move |value| filter.set(value),
            }
        }

        if auth().admin {
            section {
                id: "admin-actions",
                class: "admin-actions",
                h2 { "Admin actions" }
                p { "You are signed in as an administrator." }
            }
        }

        section {
            class: "places-container",
            {match places() {
                Listing::Loading => rsx! {
                    p { class: "text-center", "Loading places..." }
                },
                Listing::Failed => rsx! {
                    p { class: "error-message", "Error loading places. Please try again later." }
                },
                Listing::Loaded(list) if list.is_empty() => rsx! {
                    p { class: "text-center", "No places found" }
                },
                Listing::Loaded(list) => rsx! {
                    for place in current.apply(&list) {
                        PlaceCard { key: "{place.id}", place: place.clone() }
                    }
                },
            }}
        }
    }
}
