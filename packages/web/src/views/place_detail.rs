//! Place detail page: the place, then its reviews.

use api::{Place, Review};
use dioxus::prelude::*;
use ui::{
    add_review_path, expire_on_unauthorized, use_app, use_auth, AmenityList, InlineMessage, Page,
    PageGate, PlaceImage, ReviewList, LOGIN_PATH,
};

#[component]
pub fn PlaceDetail(id: String) -> Element {
    rsx! {
        PageGate {
            page: Page::PlaceDetail,
            place_id: id.clone(),
            PlaceDetailContent { id }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Loaded<T> {
    Loading,
    Ready(T),
    Failed,
}

#[component]
fn PlaceDetailContent(id: String) -> Element {
    let app = use_app();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut place = use_signal(|| Loaded::<Place>::Loading);
    let mut reviews = use_signal(|| Loaded::<Vec<Review>>::Loading);

    // Reviews are only requested once the place itself has loaded.
    let place_id = id;
    use_hook(move || {
        spawn(async move {
            let token = app.session.token();
            match app.client.get_place(&place_id, token.as_deref()).await {
                Ok(found) => place.set(Loaded::Ready(found)),
                Err(e) if expire_on_unauthorized(&app, &mut auth, nav, &e) => return,
                Err(e) => {
                    tracing::error!("Error loading place {}: {}", place_id, e);
                    place.set(Loaded::Failed);
                    return;
                }
            }
            match app.client.list_reviews(&place_id).await {
                Ok(list) => reviews.set(Loaded::Ready(list)),
                Err(e) => {
                    tracing::error!("Error loading reviews for {}: {}", place_id, e);
                    reviews.set(Loaded::Failed);
                }
            }
        });
    });

    match place() {
        Loaded::Loading => rsx! {
            p { class: "text-center", "Loading place details..." }
        },
        Loaded::Failed => rsx! {
            InlineMessage { message: "Error loading place details. Please try again later." }
        },
        Loaded::Ready(found) => rsx! {
            PlaceDetails { place: found }
            section {
                id: "reviews",
                h2 { "Reviews" }
                {match reviews() {
                    Loaded::Loading => rsx! {
                        p { "Loading reviews..." }
                    },
                    Loaded::Failed => rsx! {
                        InlineMessage { message: "Error loading reviews." }
                    },
                    Loaded::Ready(list) => rsx! {
                        ReviewList { reviews: list }
                    },
                }}
            }
        },
    }
}

#[component]
fn PlaceDetails(place: Place) -> Element {
    let auth = use_auth();
    let title = place.display_title().to_string();
    let description = place.display_description().to_string();
    let price = place.formatted_price();

    rsx! {
        document::Title { "{title} - HBNB" }

        section {
            id: "place-details",
            class: "place-header",
            div {
                class: "place-image-container",
                PlaceImage { place: place.clone(), class: "place-image" }
            }
            div {
                class: "place-info",
                h1 { "{title}" }
                p { class: "price", "Price per night: {price}" }
                p { class: "description", "{description}" }

                h2 { "Amenities" }
                AmenityList {
                    amenities: place.amenities.clone(),
                    empty_label: "No amenities listed",
                }

                if auth().authenticated {
                    Link {
                        class: "details-button",
                        to: add_review_path(&place.id),
                        "Add Review"
                    }
                } else {
                    Link {
                        class: "details-button",
                        to: LOGIN_PATH,
                        "Login to Add Review"
                    }
                }
            }
        }
    }
}
