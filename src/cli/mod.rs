pub mod expenses;
pub mod format;
pub mod list;
pub mod settings;
pub mod setup;
pub mod summary;
pub mod ui;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` date given on the command line. Dates after
/// `today` are rejected.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{input}', expected YYYY-MM-DD"))?;
    if date > today {
        bail!("Date {date} is in the future");
    }
    Ok(date)
}
