pub mod book;
pub mod domain;
pub mod dto;
pub mod error;
pub mod rules;
pub mod time;

pub use book::AddressBook;
pub use domain::*;
pub use dto::*;
pub use error::ValidationError;
pub use rules::*;
