//! # API crate — typed client for the HBNB REST API
//!
//! Everything the HBNB web pages need that is not a component lives here: the
//! HTTP client, the response models, error normalization, the client-held
//! session and the small pieces of page logic (price filtering, review
//! validation). None of it depends on Dioxus, so it is tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Bearer-token [`Session`] over a [`store::SessionStore`], JWT role claim decoding |
//! | [`client`] | [`HbnbClient`], one method per REST endpoint |
//! | [`error`] | [`ErrorEnvelope`] normalization of inconsistent error bodies, [`ApiError`], [`ValidationError`] |
//! | [`filter`] | [`PriceFilter`] for the listing page |
//! | [`models`] | Places, reviews, review drafts, auth payloads |

pub mod auth;
pub mod client;
pub mod error;
pub mod filter;
pub mod models;

pub use auth::{decode_role_claim, is_admin, Session};
pub use client::HbnbClient;
pub use error::{ApiError, ErrorEnvelope, Result, ValidationError, FALLBACK_MESSAGE};
pub use filter::PriceFilter;
pub use models::{
    Amenity, LoginResponse, NewUser, Place, ProtectedResponse, Review, ReviewDraft, UserInfo,
};
