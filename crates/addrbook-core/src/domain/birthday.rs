use crate::error::ValidationError;
use crate::time::{format_day_month_year, parse_day_month_year};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Birth date parsed from `DD.MM.YYYY`. Serializes back to the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        parse_day_month_year(raw)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_day_month_year(self.0))
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::Birthday;
    use crate::error::ValidationError;

    #[test]
    fn birthday_exposes_parsed_parts() {
        let birthday = Birthday::new("05.11.1999").unwrap();
        assert_eq!(birthday.day(), 5);
        assert_eq!(birthday.month(), 11);
        assert_eq!(birthday.year(), 1999);
    }

    #[test]
    fn birthday_leap_day_only_in_leap_years() {
        assert!(Birthday::new("29.02.2000").is_ok());
        assert!(Birthday::new("29.02.2024").is_ok());
        assert!(Birthday::new("29.02.1999").is_err());
        assert!(Birthday::new("29.02.1900").is_err());
    }

    #[test]
    fn birthday_rejects_day_past_month_end() {
        assert_eq!(
            Birthday::new("31.04.2020"),
            Err(ValidationError::InvalidBirthday("31.04.2020".to_string()))
        );
        assert!(Birthday::new("32.01.2020").is_err());
    }

    #[test]
    fn birthday_rejects_other_layouts() {
        for raw in ["1999-11-05", "5.11.1999", "05/11/1999", "", "05.11.1999 "] {
            assert!(Birthday::new(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn birthday_displays_day_month_year() {
        let birthday: Birthday = "01.02.2003".parse().unwrap();
        assert_eq!(birthday.to_string(), "01.02.2003");
    }

    #[test]
    fn birthday_serializes_as_string() {
        let birthday = Birthday::new("12.11.2003").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"12.11.2003\"");
        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
        assert!(serde_json::from_str::<Birthday>("\"30.02.2003\"").is_err());
    }
}
