use crate::domain::Record;
use crate::rules::{birthday_in_window, DEFAULT_WINDOW_DAYS};
use crate::time::local_today;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory contact directory keyed by name.
///
/// Iteration and query results are ordered by name. Inserting a record whose
/// name is already present replaces the earlier record wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    contacts: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if let Some(previous) = self.contacts.insert(key, record) {
            debug!(name = %previous.name(), "replaced existing record");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.contacts.get(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.contacts.values()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Names with a birthday in the default window starting at the local date.
    pub fn get_upcoming_birthdays(&self) -> Vec<String> {
        self.upcoming_birthdays(local_today(), DEFAULT_WINDOW_DAYS)
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<String> {
        self.contacts
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                birthday_in_window(today, birthday.month(), birthday.day(), window_days)
                    .then(|| record.name().as_str().to_string())
            })
            .collect()
    }
}
