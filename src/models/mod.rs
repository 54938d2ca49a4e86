pub mod offers;
pub mod users;

pub use offers::{OfferCategory, OfferRow};
pub use users::UserRow;
