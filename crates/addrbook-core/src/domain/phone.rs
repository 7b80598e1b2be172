use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_PREFIX: &str = "+380";
pub const PHONE_DIGITS: usize = 9;

/// Ukrainian mobile number in the fixed `+380XXXXXXXXX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::try_from(raw.to_string())
    }

    /// `+380` followed by exactly nine ASCII digits and nothing else.
    pub fn is_valid(raw: &str) -> bool {
        match raw.strip_prefix(PHONE_PREFIX) {
            Some(rest) => rest.len() == PHONE_DIGITS && rest.bytes().all(|b| b.is_ascii_digit()),
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

#[cfg(test)]
mod tests {
    use super::Phone;
    use crate::error::ValidationError;

    #[test]
    fn phone_accepts_prefix_and_nine_digits() {
        for raw in ["+380504923485", "+380000000000", "+380999999999"] {
            assert_eq!(Phone::new(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn phone_rejects_wrong_prefix() {
        assert!(!Phone::is_valid("380504923485"));
        assert!(!Phone::is_valid("+381504923485"));
        assert!(!Phone::is_valid("+1504923485"));
    }

    #[test]
    fn phone_rejects_wrong_digit_count() {
        assert!(!Phone::is_valid("+38050492348"));
        assert!(!Phone::is_valid("+3805049234851"));
        assert!(!Phone::is_valid("+380"));
        assert!(!Phone::is_valid(""));
    }

    #[test]
    fn phone_rejects_extra_characters() {
        assert!(!Phone::is_valid("+380 50 492 34 85"));
        assert!(!Phone::is_valid("+380-504923485"));
        assert!(!Phone::is_valid("+380504923485\n"));
        assert!(!Phone::is_valid(" +380504923485"));
        assert!(!Phone::is_valid("+38050492348a"));
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        assert!(!Phone::is_valid("+380٥٠٤٩٢٣٤٨٥"));
    }

    #[test]
    fn phone_error_carries_input() {
        let err = Phone::new("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
        assert!(err.to_string().contains("+380XXXXXXXXX"));
    }
}
