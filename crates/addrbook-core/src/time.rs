use chrono::{Local, NaiveDate};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

const DATE_LEN: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("date cannot be empty")]
    Empty,
    #[error("invalid date format: expected DD.MM.YYYY")]
    InvalidDateFormat,
    #[error("invalid date")]
    InvalidDate,
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses `DD.MM.YYYY` with exact field widths. Years before 0001 are rejected.
pub fn parse_day_month_year(input: &str) -> Result<NaiveDate, TimeParseError> {
    if input.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let bytes = input.as_bytes();
    if bytes.len() != DATE_LEN {
        return Err(TimeParseError::InvalidDateFormat);
    }
    let well_formed = bytes.iter().enumerate().all(|(idx, byte)| match idx {
        2 | 5 => *byte == b'.',
        _ => byte.is_ascii_digit(),
    });
    if !well_formed {
        return Err(TimeParseError::InvalidDateFormat);
    }

    let day: u32 = parse_field(&input[0..2])?;
    let month: u32 = parse_field(&input[3..5])?;
    let year: i32 = parse_field(&input[6..10])?;
    if year == 0 {
        return Err(TimeParseError::InvalidDate);
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeParseError::InvalidDate)
}

pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_field<T: std::str::FromStr>(raw: &str) -> Result<T, TimeParseError> {
    raw.parse().map_err(|_| TimeParseError::InvalidDateFormat)
}
