// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::{Date, Weekday};

/// Earliest target year accepted by the planner.
pub const MIN_YEAR: i32 = 1900;

/// Latest target year accepted by the planner.
pub const MAX_YEAR: i32 = 2200;

/// Validates that a target year is a reasonable calendar year.
///
/// # Arguments
///
/// * `year` - The year to validate
///
/// # Returns
///
/// * `Ok(())` if the year is valid
/// * `Err(DomainError::InvalidYear)` if the year is invalid
///
/// # Errors
///
/// Returns an error if the year is not between 1900 and 2200.
pub fn validate_year(year: i32) -> Result<(), DomainError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DomainError::InvalidYear(format!(
            "Year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
        )));
    }
    Ok(())
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(
        value.trim(),
        time::macros::format_description!("[year]-[month]-[day]"),
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Converts a weekday index into a `Weekday`.
///
/// Indices count from Sunday: 0 = Sunday, 1 = Monday, ... 6 = Saturday.
///
/// # Errors
///
/// Returns `DomainError::InvalidWeekday` if the index is greater than 6.
pub fn weekday_from_index(index: u8) -> Result<Weekday, DomainError> {
    match index {
        0 => Ok(Weekday::Sunday),
        1 => Ok(Weekday::Monday),
        2 => Ok(Weekday::Tuesday),
        3 => Ok(Weekday::Wednesday),
        4 => Ok(Weekday::Thursday),
        5 => Ok(Weekday::Friday),
        6 => Ok(Weekday::Saturday),
        _ => Err(DomainError::InvalidWeekday(format!(
            "Weekday index must be between 0 (Sunday) and 6 (Saturday), got {index}"
        ))),
    }
}

/// Parses a weekday from its English name or three-letter abbreviation.
///
/// Matching is case-insensitive. A numeric string is treated as an index
/// (see [`weekday_from_index`]).
///
/// # Errors
///
/// Returns `DomainError::InvalidWeekday` if the name is not recognized.
pub fn weekday_from_name(name: &str) -> Result<Weekday, DomainError> {
    let normalized: String = name.trim().to_lowercase();

    if let Ok(index) = normalized.parse::<u8>() {
        return weekday_from_index(index);
    }

    match normalized.as_str() {
        "sun" | "sunday" => Ok(Weekday::Sunday),
        "mon" | "monday" => Ok(Weekday::Monday),
        "tue" | "tues" | "tuesday" => Ok(Weekday::Tuesday),
        "wed" | "wednesday" => Ok(Weekday::Wednesday),
        "thu" | "thur" | "thurs" | "thursday" => Ok(Weekday::Thursday),
        "fri" | "friday" => Ok(Weekday::Friday),
        "sat" | "saturday" => Ok(Weekday::Saturday),
        _ => Err(DomainError::InvalidWeekday(format!(
            "Unknown weekday '{name}'"
        ))),
    }
}
