pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS, PHONE_PREFIX};
pub use record::Record;
