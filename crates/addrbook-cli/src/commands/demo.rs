use crate::commands::{print_upcoming, Context};
use crate::util::resolve_today;
use addrbook_core::time::{format_day_month_year, local_today};
use addrbook_core::{AddressBook, Record, UpcomingBirthdaysDto, DEFAULT_WINDOW_DAYS};
use anyhow::{Context as _, Result};
use clap::Args;
use tracing::debug;

struct SampleContact {
    name: &'static str,
    phone: &'static str,
    birthday: Option<&'static str>,
}

const SAMPLE_CONTACTS: [SampleContact; 3] = [
    SampleContact {
        name: "Oleh",
        phone: "+380504923485",
        birthday: Some("05.11.1999"),
    },
    SampleContact {
        name: "Anna",
        phone: "+380987654321",
        birthday: Some("12.11.2003"),
    },
    SampleContact {
        name: "Sophia",
        phone: "+380634321987",
        birthday: None,
    },
];

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Evaluate the window as if today were this date
    #[arg(long, value_name = "DD.MM.YYYY")]
    pub today: Option<String>,
}

/// Always uses the default seven-day window; `upcoming_days` does not apply.
pub fn run_demo(ctx: &Context<'_>, args: DemoArgs) -> Result<()> {
    let book = sample_book()?;
    let output = match args.today.as_deref() {
        Some(raw) => {
            let today = resolve_today(Some(raw))?;
            UpcomingBirthdaysDto::from_book(&book, today, DEFAULT_WINDOW_DAYS)
        }
        None => UpcomingBirthdaysDto {
            today: format_day_month_year(local_today()),
            window_days: DEFAULT_WINDOW_DAYS,
            names: book.get_upcoming_birthdays(),
        },
    };
    print_upcoming(ctx, &output)
}

pub fn sample_book() -> Result<AddressBook> {
    let mut book = AddressBook::new();
    for sample in &SAMPLE_CONTACTS {
        let mut record = Record::new(sample.name)
            .with_context(|| format!("sample contact {}", sample.name))?;
        record
            .add_phone(sample.phone)
            .with_context(|| format!("sample phone for {}", sample.name))?;
        if let Some(birthday) = sample.birthday {
            record
                .set_birthday(birthday)
                .with_context(|| format!("sample birthday for {}", sample.name))?;
        }
        debug!(name = sample.name, "sample record added");
        book.add_record(record);
    }
    Ok(book)
}
