use crate::book::AddressBook;
use crate::time::format_day_month_year;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthdaysDto {
    pub today: String,
    pub window_days: u32,
    pub names: Vec<String>,
}

impl UpcomingBirthdaysDto {
    pub fn from_book(book: &AddressBook, today: NaiveDate, window_days: u32) -> Self {
        Self {
            today: format_day_month_year(today),
            window_days,
            names: book.upcoming_birthdays(today, window_days),
        }
    }
}
