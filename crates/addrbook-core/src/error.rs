use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be a non-empty string")]
    EmptyName,
    #[error("invalid phone number format: {0:?} (use +380XXXXXXXXX)")]
    InvalidPhone(String),
    #[error("invalid date: {0:?} (use DD.MM.YYYY)")]
    InvalidBirthday(String),
    #[error("invalid window days: {0}")]
    InvalidWindowDays(i64),
}
