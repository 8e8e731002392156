mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod places;
pub use places::Places;

mod place_detail;
pub use place_detail::PlaceDetail;

mod add_review;
pub use add_review::AddReview;

mod not_found;
pub use not_found::NotFound;
