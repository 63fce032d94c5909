// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar import from CSV and JSON.
//!
//! Holiday files carry `date,name` columns. Company day files carry a `name`
//! column plus either `date` (single days) or `weekday,start_date,end_date`
//! (weekly recurrences); a file may mix both kinds of rows. Headers are
//! matched case-insensitively and tolerate surrounding whitespace.
//!
//! Every row is checked before anything is returned. All row errors are
//! reported together, numbered from 1 excluding the header.

use csv::StringRecord;
use cto_planner_domain::{Date, parse_date, weekday_from_name};
use std::collections::HashMap;

use crate::error::ApiError;
use crate::request_response::{CompanyDayInput, HolidayInput};

/// Required holiday CSV column headers (case-insensitive, normalized).
const HOLIDAY_HEADERS: &[&str] = &["date", "name"];

/// Required company day CSV column headers (case-insensitive, normalized).
const COMPANY_DAY_HEADERS: &[&str] = &["name"];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(
    headers: &StringRecord,
    required: &[&str],
) -> Result<HashMap<String, usize>, ApiError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<&str> = required
        .iter()
        .filter(|name| !header_map.contains_key(**name))
        .copied()
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Reads every record of a CSV document, handing each to `parse_row`.
///
/// Row errors are collected; the document is rejected if any row failed.
fn read_rows<T>(
    csv_content: &str,
    required: &[&str],
    parse_row: impl Fn(&dyn Fn(&str) -> Option<String>) -> Result<T, Vec<String>>,
) -> Result<Vec<T>, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();
    let header_map: HashMap<String, usize> = validate_headers(&headers, required)?;

    let mut entries: Vec<T> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                errors.push(format!("row {row_number}: CSV parse error: {e}"));
                continue;
            }
        };

        let get_field = |name: &str| -> Option<String> {
            header_map
                .get(name)
                .and_then(|&idx| record.get(idx))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        match parse_row(&get_field) {
            Ok(entry) => entries.push(entry),
            Err(row_errors) => errors.extend(
                row_errors
                    .into_iter()
                    .map(|e| format!("row {row_number}: {e}")),
            ),
        }
    }

    if !errors.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: errors.join("; "),
        });
    }

    Ok(entries)
}

/// Checks a date field and returns it in canonical form.
fn check_date(field_name: &str, value: Option<String>, errors: &mut Vec<String>) -> String {
    let Some(value) = value.filter(|s| !s.trim().is_empty()) else {
        errors.push(format!("{field_name}: required field is missing or empty"));
        return String::new();
    };

    match parse_date(&value) {
        Ok(date) => date.to_string(),
        Err(e) => {
            errors.push(format!("{field_name}: {e}"));
            value
        }
    }
}

/// Checks a required text field.
fn check_required(field_name: &str, value: Option<String>, errors: &mut Vec<String>) -> String {
    value.unwrap_or_else(|| {
        errors.push(format!("{field_name}: required field is missing or empty"));
        String::new()
    })
}

fn check_holiday(holiday: HolidayInput) -> Result<HolidayInput, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();
    let name: String = check_required(
        "name",
        Some(holiday.name).filter(|s| !s.trim().is_empty()),
        &mut errors,
    );
    let date: String = check_date("date", Some(holiday.date), &mut errors);

    if errors.is_empty() {
        Ok(HolidayInput {
            date,
            name: name.trim().to_string(),
        })
    } else {
        Err(errors)
    }
}

fn check_company_day(entry: CompanyDayInput) -> Result<CompanyDayInput, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();
    let name: String = check_required(
        "name",
        Some(entry.name).filter(|s| !s.trim().is_empty()),
        &mut errors,
    );
    let blank = |value: Option<String>| value.filter(|s| !s.trim().is_empty());

    let checked: CompanyDayInput = match (blank(entry.date), blank(entry.weekday)) {
        (Some(date), None) => CompanyDayInput {
            name: name.trim().to_string(),
            date: Some(check_date("date", Some(date), &mut errors)),
            ..CompanyDayInput::default()
        },
        (None, Some(weekday)) => {
            if let Err(e) = weekday_from_name(&weekday) {
                errors.push(format!("weekday: {e}"));
            }
            let start_date: String = check_date("start_date", blank(entry.start_date), &mut errors);
            let end_date: String = check_date("end_date", blank(entry.end_date), &mut errors);
            let reversed: Option<(Date, Date)> = parse_date(&start_date)
                .ok()
                .zip(parse_date(&end_date).ok())
                .filter(|(start, end)| end < start);
            if let Some((start, end)) = reversed {
                errors.push(format!("end_date: {end} is before start_date {start}"));
            }
            CompanyDayInput {
                name: name.trim().to_string(),
                date: None,
                weekday: Some(weekday.trim().to_string()),
                start_date: Some(start_date),
                end_date: Some(end_date),
            }
        }
        (Some(_), Some(_)) => {
            errors.push(String::from(
                "date and weekday are mutually exclusive; use one per row",
            ));
            CompanyDayInput::default()
        }
        (None, None) => {
            errors.push(String::from(
                "either date, or weekday with start_date and end_date, is required",
            ));
            CompanyDayInput::default()
        }
    };

    if errors.is_empty() {
        Ok(checked)
    } else {
        Err(errors)
    }
}

/// Parses a holiday calendar from CSV.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content with `date` and `name` columns
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if a header is missing or any row
/// has a missing or malformed field.
pub fn parse_holidays_csv(csv_content: &str) -> Result<Vec<HolidayInput>, ApiError> {
    read_rows(csv_content, HOLIDAY_HEADERS, |get_field| {
        check_holiday(HolidayInput {
            date: get_field("date").unwrap_or_default(),
            name: get_field("name").unwrap_or_default(),
        })
    })
}

/// Parses company days off from CSV.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content with a `name` column and either a
///   `date` column or `weekday`, `start_date` and `end_date` columns
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if a header is missing or any row
/// is malformed.
pub fn parse_company_days_csv(csv_content: &str) -> Result<Vec<CompanyDayInput>, ApiError> {
    read_rows(csv_content, COMPANY_DAY_HEADERS, |get_field| {
        check_company_day(CompanyDayInput {
            name: get_field("name").unwrap_or_default(),
            date: get_field("date"),
            weekday: get_field("weekday"),
            start_date: get_field("start_date"),
            end_date: get_field("end_date"),
        })
    })
}

/// Collects per-entry errors of a JSON array into one `InvalidJson`.
fn check_entries<T>(
    entries: Vec<T>,
    check: impl Fn(T) -> Result<T, Vec<String>>,
) -> Result<Vec<T>, ApiError> {
    let mut checked: Vec<T> = Vec::with_capacity(entries.len());
    let mut errors: Vec<String> = Vec::new();

    for (idx, entry) in entries.into_iter().enumerate() {
        match check(entry) {
            Ok(entry) => checked.push(entry),
            Err(entry_errors) => {
                errors.extend(entry_errors.into_iter().map(|e| format!("entry {idx}: {e}")));
            }
        }
    }

    if errors.is_empty() {
        Ok(checked)
    } else {
        Err(ApiError::InvalidJson {
            reason: errors.join("; "),
        })
    }
}

/// Parses a holiday calendar from a JSON array of `{ "date", "name" }`.
///
/// # Errors
///
/// Returns `ApiError::InvalidJson` if the document is not such an array or
/// any entry has a malformed date.
pub fn parse_holidays_json(json: &str) -> Result<Vec<HolidayInput>, ApiError> {
    let entries: Vec<HolidayInput> =
        serde_json::from_str(json).map_err(|e| ApiError::InvalidJson {
            reason: e.to_string(),
        })?;
    check_entries(entries, check_holiday)
}

/// Parses company days off from a JSON array.
///
/// Each entry has a `name` and either a `date` or a `weekday`, `start_date`
/// and `end_date`.
///
/// # Errors
///
/// Returns `ApiError::InvalidJson` if the document is malformed or any
/// entry is invalid.
pub fn parse_company_days_json(json: &str) -> Result<Vec<CompanyDayInput>, ApiError> {
    let entries: Vec<CompanyDayInput> =
        serde_json::from_str(json).map_err(|e| ApiError::InvalidJson {
            reason: e.to_string(),
        })?;
    check_entries(entries, check_company_day)
}

/// Returns the dates of holidays that fall outside `year`.
///
/// Such entries are ignored by the planner; callers may want to warn.
#[must_use]
pub fn holidays_outside_year(holidays: &[HolidayInput], year: i32) -> Vec<String> {
    holidays
        .iter()
        .filter(|h| parse_date(&h.date).is_ok_and(|date: Date| date.year() != year))
        .map(|h| h.date.clone())
        .collect()
}
