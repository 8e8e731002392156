//! This crate contains all shared UI for the HBNB pages.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod context;
pub use context::{use_app, AppContext, PlatformStore};

mod auth;
pub use auth::{
    begin_session, end_session, expire_on_unauthorized, refresh_auth, use_auth, AuthButton,
    AuthProvider, AuthState,
};

pub mod gate;
pub use gate::{
    add_review_path, place_path, Gate, Page, PageGate, LISTING_PATH, LOGIN_PATH, REGISTER_PATH,
};

mod navbar;
pub use navbar::Navbar;

mod message;
pub use message::{acknowledge, InlineMessage, MessageKind};

mod place_card;
pub use place_card::{AmenityList, PlaceCard, PlaceImage};

mod reviews;
pub use reviews::{ReviewCard, ReviewList, StarRating};

mod price_filter;
pub use price_filter::PriceFilterSelect;
