use crate::error::ValidationError;
use chrono::{Datelike, Days, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const MAX_WINDOW_DAYS: i64 = 365;

pub fn validate_window_days(days: i64) -> Result<u32, ValidationError> {
    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(ValidationError::InvalidWindowDays(days));
    }
    u32::try_from(days).map_err(|_| ValidationError::InvalidWindowDays(days))
}

/// Month/day match against today and against `today + window_days`.
///
/// A date qualifies when it falls later in the current month, or early enough
/// in the month the window ends in. Months are compared by raw number, so a
/// window spanning two month boundaries only sees its first and last month.
pub fn birthday_in_window(today: NaiveDate, month: u32, day: u32, window_days: u32) -> bool {
    if month == today.month() && day >= today.day() {
        return true;
    }

    match today.checked_add_days(Days::new(window_days.into())) {
        Some(end) => month == end.month() && day <= end.day(),
        None => false,
    }
}
