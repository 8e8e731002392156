//! Place presentation: listing cards and amenity pills.

use api::{Amenity, Place};
use dioxus::prelude::*;

use crate::gate::place_path;

pub const IMAGE_DIR: &str = "/img";
pub const DEFAULT_IMAGE: &str = "/img/default.png";

/// Image for a place, falling back to the default picture when missing.
#[component]
pub fn PlaceImage(place: Place, #[props(default)] class: String) -> Element {
    let mut src = use_signal(|| format!("{IMAGE_DIR}/{}", place.image_name()));
    let title = place.display_title().to_string();

    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "{title}",
            onerror: move |_| {
                if *src.peek() != DEFAULT_IMAGE {
                    src.set(DEFAULT_IMAGE.to_string());
                }
            },
        }
    }
}

/// Amenity names as pills. Renders `empty_label` (or nothing) when there are none.
#[component]
pub fn AmenityList(amenities: Vec<Amenity>, empty_label: Option<String>) -> Element {
    if amenities.is_empty() {
        return match empty_label {
            Some(label) => rsx! { p { class: "no-amenities", "{label}" } },
            None => rsx! {},
        };
    }

    rsx! {
        div {
            class: "amenities-list",
            for (key, amenity) in keyed(amenities) {
                span {
                    key: "{key}",
                    class: "amenity-pill",
                    "{amenity.name}"
                }
            }
        }
    }
}

/// Pair each amenity with a render key: its id, or its position when it has none.
fn keyed(amenities: Vec<Amenity>) -> impl Iterator<Item = (String, Amenity)> {
    amenities.into_iter().enumerate().map(|(index, amenity)| {
        let key = amenity
            .id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("#{index}"));
        (key, amenity)
    })
}

/// A card on the listing page.
#[component]
pub fn PlaceCard(place: Place) -> Element {
    let title = place.display_title().to_string();
    let price = place.formatted_price();
    let price_value = place.nightly_price();
    let summary = place.summary();

    rsx! {
        div {
            class: "place-card",
            "data-price": "{price_value}",
            PlaceImage { place: place.clone(), class: "place-card-image" }
            div {
                class: "place-info",
                h2 { "{title}" }
                p {
                    class: "price",
                    strong { "Price per night: " }
                    "{price}"
                }
                p { class: "description", "{summary}" }
                AmenityList { amenities: place.amenities.clone() }
                Link {
                    class: "details-button",
                    to: place_path(&place.id),
                    "View Details"
                }
            }
        }
    }
}
