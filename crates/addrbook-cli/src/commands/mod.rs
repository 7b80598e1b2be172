use addrbook_config::AppConfig;
use addrbook_core::UpcomingBirthdaysDto;
use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

pub mod demo;
pub mod upcoming;

pub const UPCOMING_PREFIX: &str = "Upcoming birthdays: ";

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn print_upcoming(ctx: &Context<'_>, output: &UpcomingBirthdaysDto) -> Result<()> {
    if ctx.json {
        return print_json(output);
    }
    println!("{}", format_upcoming(&output.names));
    Ok(())
}

pub fn format_upcoming(names: &[String]) -> String {
    format!("{UPCOMING_PREFIX}{}", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::format_upcoming;

    #[test]
    fn format_upcoming_joins_names() {
        let names = vec!["Anna".to_string(), "Oleh".to_string()];
        assert_eq!(format_upcoming(&names), "Upcoming birthdays: Anna, Oleh");
    }

    #[test]
    fn format_upcoming_empty_keeps_prefix() {
        assert_eq!(format_upcoming(&[]), "Upcoming birthdays: ");
    }
}
