//! Calendar arithmetic over the proleptic Gregorian calendar.
//!
//! Pure functions, no state. Everything is backed by chrono's `NaiveDate`,
//! which implements the standard Gregorian leap-year rule (divisible by 4,
//! except centuries not divisible by 400).

use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate};

/// Returns the number of days in the given month (28-31).
///
/// # Examples
///
/// ```
/// # use daygrid_core::calendar::days_in_month;
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2023, 2).unwrap(), 28);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("not a valid month: {year}-{month:02}"))?;
    // The day before the first of the following month is the last day of this
    // one. December is closed out directly so the year never has to roll over.
    let last = match month {
        12 => NaiveDate::from_ymd_opt(year, 12, 31),
        _ => first.with_month(month + 1).and_then(|d| d.pred_opt()),
    }
    .ok_or_else(|| anyhow!("no last day for {year}-{month:02}"))?;
    Ok(last.day())
}

/// Returns the full English weekday name ("Monday".."Sunday") for a date.
///
/// Fails when the triple is not a real calendar date (e.g. 2023-02-30).
pub fn weekday_name(year: i32, month: u32, day: u32) -> Result<String> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("not a valid calendar date: {year}-{month:02}-{day:02}"))?;
    Ok(date.format("%A").to_string())
}
