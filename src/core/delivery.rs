//! Delivery-date rule: exactly one calendar day is acceptable, tomorrow or,
//! when today is a Friday, the following Monday.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("date required")]
    Missing,

    #[error("invalid date: {0}")]
    Unparseable(String),

    #[error("date in the past")]
    Past,

    #[error("today not allowed")]
    Today,

    #[error("too far in the future")]
    TooFar,

    #[error("wrong date, must be the next valid delivery day")]
    WrongDay,
}

/// `None` only when the calendar ends before that day.
pub fn next_delivery_day(today: NaiveDate) -> Option<NaiveDate> {
    let offset = if today.weekday() == Weekday::Fri { 3 } else { 1 };
    today.checked_add_days(Days::new(offset))
}

/// Accepts `YYYY-MM-DD`, or a date-time whose time of day is dropped.
pub fn parse_requested_date(input: &str) -> Result<NaiveDate, Rejection> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Rejection::Missing);
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|datetime| datetime.date())
        .ok_or_else(|| Rejection::Unparseable(input.to_string()))
}

/// Returns the accepted delivery day, or the first rule the request breaks.
pub fn validate_delivery_date(
    now: NaiveDateTime,
    input: Option<&str>,
) -> Result<NaiveDate, Rejection> {
    let requested = parse_requested_date(input.unwrap_or_default())?;
    let today = now.date();

    if requested < today {
        return Err(Rejection::Past);
    }
    if requested == today {
        return Err(Rejection::Today);
    }

    let next_valid = next_delivery_day(today).ok_or(Rejection::TooFar)?;
    if requested > next_valid {
        Err(Rejection::TooFar)
    } else if requested < next_valid {
        Err(Rejection::WrongDay)
    } else {
        Ok(requested)
    }
}
