//! Calendar command - Print the schedule view for a month.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Args;

use receptionist_chat::{render_schedule, BookingStore, CalendarMonth};

#[derive(Args)]
pub struct CalendarArgs {
    /// Year to show (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month to show, 1-12 (defaults to the current month)
    #[arg(long)]
    pub month: Option<u32>,
}

pub async fn execute(args: CalendarArgs) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let month = resolve_month(&args, today)?;

    print!("{}", render_schedule(month, &BookingStore::new(), today));
    Ok(())
}

fn resolve_month(args: &CalendarArgs, today: NaiveDate) -> Result<CalendarMonth> {
    let year = args.year.unwrap_or_else(|| today.year());
    let month = args.month.unwrap_or_else(|| today.month());
    CalendarMonth::new(year, month).context("Cannot show calendar")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_defaults_to_current_month() {
        let args = CalendarArgs {
            year: None,
            month: None,
        };
        let month = resolve_month(&args, today()).unwrap();
        assert_eq!(month.title(), "October 2026");
    }

    #[test]
    fn test_explicit_month() {
        let args = CalendarArgs {
            year: Some(2027),
            month: Some(2),
        };
        let month = resolve_month(&args, today()).unwrap();
        assert_eq!(month.days_in_month(), 28);
    }

    #[test]
    fn test_invalid_month() {
        let args = CalendarArgs {
            year: None,
            month: Some(13),
        };
        assert!(resolve_month(&args, today()).is_err());
    }
}
