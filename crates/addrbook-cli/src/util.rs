use crate::error::invalid_input;
use addrbook_core::time::{local_today, parse_day_month_year};
use addrbook_core::Record;
use anyhow::{Context as _, Result};
use chrono::NaiveDate;

const FIELD_SEPARATOR: char = ';';
const BIRTHDAY_MARKER: char = '@';

pub fn resolve_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(value) => parse_day_month_year(value.trim())
            .with_context(|| format!("invalid --today value {value:?}")),
        None => Ok(local_today()),
    }
}

/// Parses `NAME[;PHONE...][;@DD.MM.YYYY]`. The name is taken verbatim; phone
/// and birthday fields are trimmed.
pub fn parse_contact(raw: &str) -> Result<Record> {
    let mut fields = raw.split(FIELD_SEPARATOR);
    let name = fields.next().unwrap_or_default();
    let mut record = Record::new(name).with_context(|| format!("invalid contact {raw:?}"))?;

    for field in fields {
        let field = field.trim();
        if field.is_empty() {
            return Err(invalid_input(format!("contact {raw:?} has an empty field")));
        }
        match field.strip_prefix(BIRTHDAY_MARKER) {
            Some(birthday) => record
                .set_birthday(birthday)
                .with_context(|| format!("invalid contact {raw:?}"))?,
            None => record
                .add_phone(field)
                .with_context(|| format!("invalid contact {raw:?}"))?,
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::{parse_contact, resolve_today};
    use addrbook_core::ValidationError;
    use chrono::NaiveDate;

    #[test]
    fn parse_contact_name_only() {
        let record = parse_contact("Sophia").unwrap();
        assert_eq!(record.name().as_str(), "Sophia");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn parse_contact_with_phones_and_birthday() {
        let record = parse_contact("Oleh;+380504923485; +380987654321 ;@05.11.1999").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["+380504923485", "+380987654321"]);
        assert_eq!(
            record.get_birthday(),
            Some(NaiveDate::from_ymd_opt(1999, 11, 5).unwrap())
        );
    }

    #[test]
    fn parse_contact_last_birthday_wins() {
        let record = parse_contact("Anna;@12.11.2003;@01.01.2001").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.2001");
    }

    #[test]
    fn parse_contact_rejects_empty_name() {
        let err = parse_contact(";+380504923485").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::EmptyName)
        );
    }

    #[test]
    fn parse_contact_rejects_bad_phone() {
        let err = parse_contact("Oleh;0504923485").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::InvalidPhone(_))
        ));
    }

    #[test]
    fn parse_contact_rejects_empty_field() {
        assert!(parse_contact("Oleh;;@05.11.1999").is_err());
    }

    #[test]
    fn resolve_today_parses_override() {
        let today = resolve_today(Some(" 05.11.2025 ")).unwrap();
        assert_eq!(today, NaiveDate::from_ymd_opt(2025, 11, 5).unwrap());
        assert!(resolve_today(Some("2025-11-05")).is_err());
    }
}
