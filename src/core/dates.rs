//! Calendar date business logic.
//!
//! This module derives a contract's end date from its effective date and execution
//! delay, and renders dates the way the French locale displays them. All arithmetic
//! happens on time-zone-free `NaiveDate` values so a result can never drift by a day
//! around midnight.
//!
//! Month overflow policy: adding months clamps to the last day of the target month
//! when the original day does not exist there. `2024-01-31` plus one month is
//! `2024-02-29`, and `2023-01-31` plus one month is `2023-02-28`.

use super::delay::format_execution_delay;
use crate::{
    entities::DelayUnit,
    errors::{Error, Result},
};
use chrono::{DateTime, Days, Months, NaiveDate, Utc};

/// Storage format of calendar dates (`YYYY-MM-DD`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format of the French locale (`DD/MM/YYYY`).
pub const FRENCH_DATE_FORMAT: &str = "%d/%m/%Y";

const DAYS_PER_WEEK: u64 = 7;

/// Parses a calendar date.
///
/// Accepts exactly `YYYY-MM-DD` (four-digit year, zero-padded month and day) with
/// optional surrounding whitespace. An RFC 3339 timestamp is also accepted and
/// reduced to its UTC calendar date.
///
/// # Errors
/// Returns `Error::InvalidDate` if the input is neither form, or names a day that
/// does not exist (e.g. `2023-02-29`).
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    // chrono's %Y-%m-%d also takes "24-3-5" or "+2024-03-15"
    let parsed = if has_iso_date_shape(trimmed) {
        NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).ok()
    } else {
        DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    };

    parsed.ok_or_else(|| Error::InvalidDate {
        input: input.to_string(),
    })
}

fn has_iso_date_shape(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Adds an execution delay to an effective date.
///
/// Weeks add exactly `delay * 7` days. Months add calendar months, clamping to the
/// end of the target month.
///
/// # Errors
/// Returns `Error::DateOutOfRange` if the result falls outside the supported calendar.
pub fn end_date_from(effective: NaiveDate, delay: u32, unit: DelayUnit) -> Result<NaiveDate> {
    let end = match unit {
        DelayUnit::Months => effective.checked_add_months(Months::new(delay)),
        DelayUnit::Weeks => effective.checked_add_days(Days::new(u64::from(delay) * DAYS_PER_WEEK)),
    };

    end.ok_or_else(|| Error::DateOutOfRange {
        date: effective.format(ISO_DATE_FORMAT).to_string(),
        delay: format_execution_delay(delay, unit),
    })
}

/// Computes a contract end date from its textual effective date.
///
/// # Returns
/// The end date as `YYYY-MM-DD`
///
/// # Errors
/// * `Error::InvalidDate` - `effective_date` does not parse
/// * `Error::DateOutOfRange` - the delay runs past the supported calendar
pub fn calculate_end_date(effective_date: &str, delay: u32, unit: DelayUnit) -> Result<String> {
    let effective = parse_calendar_date(effective_date)?;
    let end = end_date_from(effective, delay, unit)?;
    Ok(end.format(ISO_DATE_FORMAT).to_string())
}

/// Formats a date as `DD/MM/YYYY`.
#[must_use]
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(FRENCH_DATE_FORMAT).to_string()
}

/// Formats a textual date as `DD/MM/YYYY`, or `None` when it does not parse.
#[must_use]
pub fn format_date(input: &str) -> Option<String> {
    parse_calendar_date(input).ok().map(format_calendar_date)
}
