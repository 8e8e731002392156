//! Authentication: the client-held session and token claim decoding.

mod claims;
mod session;

pub use claims::{decode_role_claim, is_admin, ADMIN_ROLE};
pub use session::Session;
