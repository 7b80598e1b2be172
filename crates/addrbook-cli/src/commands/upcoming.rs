use crate::commands::{print_upcoming, Context};
use crate::util::{parse_contact, resolve_today};
use addrbook_core::rules::validate_window_days;
use addrbook_core::{AddressBook, UpcomingBirthdaysDto};
use anyhow::{Context as _, Result};
use clap::Args;
use tracing::debug;

#[derive(Debug, Args)]
pub struct UpcomingArgs {
    /// Contact as NAME[;PHONE...][;@DD.MM.YYYY]
    #[arg(long = "contact", value_name = "CONTACT")]
    pub contacts: Vec<String>,
    /// Evaluate the window as if today were this date
    #[arg(long, value_name = "DD.MM.YYYY")]
    pub today: Option<String>,
    /// Look-ahead in days (defaults to the configured upcoming_days)
    #[arg(long)]
    pub days: Option<i64>,
}

pub fn list_upcoming(ctx: &Context<'_>, args: UpcomingArgs) -> Result<()> {
    let window_days = match args.days {
        Some(days) => validate_window_days(days)
            .with_context(|| format!("invalid --days value {days}"))?,
        None => ctx.config.upcoming_days,
    };
    let today = resolve_today(args.today.as_deref())?;

    let mut book = AddressBook::new();
    for raw in &args.contacts {
        let record = parse_contact(raw)?;
        book.add_record(record);
    }
    debug!(contacts = book.len(), window_days, %today, "evaluating upcoming birthdays");

    let output = UpcomingBirthdaysDto::from_book(&book, today, window_days);
    print_upcoming(ctx, &output)
}
