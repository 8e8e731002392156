//! Data models for the HBNB API.

pub mod place;
pub mod review;
pub mod user;

pub use place::{Amenity, Place, PlaceList, PlaceOwner};
pub use review::{Review, ReviewAuthor, ReviewDraft, ReviewList};
pub use user::{LoginRequest, LoginResponse, NewUser, ProtectedResponse, UserInfo};
