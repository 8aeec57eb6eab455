//! `ISODate` and `ISODateTime` validators.
//!
//! Both run in two stages: a shape check (`PatternError`) and then a
//! calendar check through `chrono` (`CalendarError`), so `2023-13-45` is
//! well-formed but does not exist.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::foundation::{Validate, ValidationError};

static DATE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("static regex")
});

static DATE_TIME_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{3}))?Z?$")
        .expect("static regex")
});

// ============================================================================
// ISO DATE
// ============================================================================

/// Validates `YYYY-MM-DD` calendar dates.
///
/// # Examples
///
/// ```
/// use isomsg_validator::foundation::{ConstraintKind, Validate};
/// use isomsg_validator::validators::iso_date;
///
/// assert!(iso_date().validate("2023-12-25").is_ok());
/// assert_eq!(iso_date().validate("25-12-2023").unwrap_err().kind, ConstraintKind::Pattern);
/// assert_eq!(iso_date().validate("2023-13-45").unwrap_err().kind, ConstraintKind::Calendar);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDate;

impl Validate for IsoDate {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Some(caps) = DATE_REGEX.captures(input) else {
            return Err(ValidationError::malformed("date must be in YYYY-MM-DD format"));
        };
        date_of(&caps)
            .map(|_| ())
            .ok_or_else(|| ValidationError::calendar("invalid date value"))
    }
}

#[must_use]
pub const fn iso_date() -> IsoDate {
    IsoDate
}

// ============================================================================
// ISO DATE TIME
// ============================================================================

/// Validates `YYYY-MM-DDTHH:MM:SS` with optional `.mmm` milliseconds and
/// optional trailing `Z`.
///
/// Numeric offsets such as `+02:00` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDateTime;

impl Validate for IsoDateTime {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if !DATE_TIME_REGEX.is_match(input) {
            return Err(ValidationError::malformed(
                "datetime must be in YYYY-MM-DDTHH:MM:SS format",
            ));
        }
        parse_iso_date_time(input)
            .map(|_| ())
            .ok_or_else(|| ValidationError::calendar("invalid datetime value"))
    }
}

#[must_use]
pub const fn iso_date_time() -> IsoDateTime {
    IsoDateTime
}

// ============================================================================
// PARSING AND FORMATTING
// ============================================================================

/// Parses a `YYYY-MM-DD` date, `None` if malformed or nonexistent.
#[must_use]
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let caps = DATE_REGEX.captures(input)?;
    date_of(&caps)
}

/// Parses an `ISODateTime` in the accepted subset, `None` if malformed or
/// nonexistent.
#[must_use]
pub fn parse_iso_date_time(input: &str) -> Option<NaiveDateTime> {
    let caps = DATE_TIME_REGEX.captures(input)?;
    let date = date_of(&caps)?;
    let millis = match caps.get(7) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let time = NaiveTime::from_hms_milli_opt(
        number(&caps, 4)?,
        number(&caps, 5)?,
        number(&caps, 6)?,
        millis,
    )?;
    Some(date.and_time(time))
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS`, dropping sub-seconds.
#[must_use]
pub fn format_iso_date_time(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn number(caps: &regex::Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn date_of(caps: &regex::Captures<'_>) -> Option<NaiveDate> {
    let year = i32::try_from(number(caps, 1)?).ok()?;
    NaiveDate::from_ymd_opt(year, number(caps, 2)?, number(caps, 3)?)
}

// ============================================================================
// TESTS
// ============================================================================
