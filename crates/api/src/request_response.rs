// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross the boundary as ISO 8601 strings (`YYYY-MM-DD`).

use cto_planner::{Break, Commitment, OptimizationStats};
use cto_planner_domain::CalendarDay;
use serde::{Deserialize, Serialize};

/// A public holiday as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayInput {
    /// The holiday date (ISO 8601).
    pub date: String,
    /// The holiday name.
    pub name: String,
}

impl HolidayInput {
    /// Creates a new holiday input.
    #[must_use]
    pub fn new(date: &str, name: &str) -> Self {
        Self {
            date: date.to_string(),
            name: name.to_string(),
        }
    }
}

/// A company day off as supplied by the caller.
///
/// Either `date` is set (a single day) or `weekday`, `start_date` and
/// `end_date` are set (a weekly recurrence over an inclusive range).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanyDayInput {
    /// The display name.
    pub name: String,
    /// The date of a single day off (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// The repeating weekday, by name or index (0 = Sunday).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<String>,
    /// The first date of the recurrence (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// The last date of the recurrence (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl CompanyDayInput {
    /// Creates a single company day off.
    #[must_use]
    pub fn single(date: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            date: Some(date.to_string()),
            ..Self::default()
        }
    }

    /// Creates a weekly company day off.
    #[must_use]
    pub fn weekly(weekday: &str, start_date: &str, end_date: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            date: None,
            weekday: Some(weekday.to_string()),
            start_date: Some(start_date.to_string()),
            end_date: Some(end_date.to_string()),
        }
    }
}

/// API request to plan CTO days.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// The CTO budget. Must be greater than 0.
    pub number_of_days: i32,
    /// The strategy name (defaults to `balanced`).
    #[serde(default)]
    pub strategy: Option<String>,
    /// The target year (defaults to the year of `today`).
    #[serde(default)]
    pub year: Option<i32>,
    /// The current date (ISO 8601). Overrides the caller's clock.
    #[serde(default)]
    pub today: Option<String>,
    /// Public holidays.
    #[serde(default)]
    pub holidays: Vec<HolidayInput>,
    /// Company days off.
    #[serde(default)]
    pub company_days_off: Vec<CompanyDayInput>,
    /// Weekend weekday indices, 0 = Sunday (defaults to `[0, 6]`).
    #[serde(default)]
    pub weekend_days: Option<Vec<u8>>,
}

impl OptimizeRequest {
    /// Creates a request with every optional field left at its default.
    #[must_use]
    pub const fn new(number_of_days: i32) -> Self {
        Self {
            number_of_days,
            strategy: None,
            year: None,
            today: None,
            holidays: Vec::new(),
            company_days_off: Vec::new(),
            weekend_days: None,
        }
    }
}

/// Information about a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct DayInfo {
    /// The date (ISO 8601).
    pub date: String,
    /// The weekday name.
    pub weekday: String,
    /// Whether the day is a weekend day.
    pub is_weekend: bool,
    /// Whether the day is a public holiday.
    pub is_public_holiday: bool,
    /// The holiday name, if any.
    pub holiday_name: Option<String>,
    /// Whether the day is a company day off.
    pub is_company_day_off: bool,
    /// The company day off name, if any.
    pub company_day_name: Option<String>,
    /// Whether a CTO day was spent on this day.
    pub is_cto: bool,
    /// Whether the day belongs to a break.
    pub is_part_of_break: bool,
}

impl From<&CalendarDay> for DayInfo {
    fn from(day: &CalendarDay) -> Self {
        Self {
            date: day.date().to_string(),
            weekday: day.date().weekday().to_string(),
            is_weekend: day.is_weekend(),
            is_public_holiday: day.is_public_holiday(),
            holiday_name: day.holiday_name().map(str::to_string),
            is_company_day_off: day.is_company_day_off(),
            company_day_name: day.company_day_name().map(str::to_string),
            is_cto: day.is_cto(),
            is_part_of_break: day.is_part_of_break(),
        }
    }
}

/// Information about a detected break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInfo {
    /// The first day of the break (ISO 8601).
    pub start_date: String,
    /// The last day of the break (ISO 8601).
    pub end_date: String,
    /// Number of days in the break.
    pub total_days: usize,
    /// CTO days spent inside the break.
    pub cto_days: usize,
    /// Public holidays inside the break.
    pub holidays: usize,
    /// Weekend days inside the break.
    pub weekends: usize,
    /// Company days off inside the break.
    pub company_days_off: usize,
    /// The length category (e.g., "long weekend").
    pub category: String,
}

impl From<&Break> for BreakInfo {
    fn from(found: &Break) -> Self {
        Self {
            start_date: found.start_date.to_string(),
            end_date: found.end_date.to_string(),
            total_days: found.total_days,
            cto_days: found.cto_days,
            holidays: found.holidays,
            weekends: found.weekends,
            company_days_off: found.company_days_off,
            category: found.category.to_string(),
        }
    }
}

/// One committed CTO day, in commitment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitmentInfo {
    /// The date (ISO 8601).
    pub date: String,
    /// The score improvement of this commitment.
    pub gain: f64,
}

impl From<&Commitment> for CommitmentInfo {
    fn from(commitment: &Commitment) -> Self {
        Self {
            date: commitment.date.to_string(),
            gain: commitment.gain,
        }
    }
}

/// API response for a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    /// The target year.
    pub year: i32,
    /// The strategy used.
    pub strategy: String,
    /// The requested CTO budget.
    pub number_of_days: i32,
    /// CTO days that could not be placed (0 on full allocation).
    pub unallocated_days: u32,
    /// The final strategy score.
    pub score: f64,
    /// Dates of every CTO day, in date order.
    pub cto_dates: Vec<String>,
    /// Breaks in date order.
    pub breaks: Vec<BreakInfo>,
    /// Summary counts.
    pub stats: OptimizationStats,
    /// CTO days in the order they were chosen.
    pub commitments: Vec<CommitmentInfo>,
    /// Every day of the target year.
    pub days: Vec<DayInfo>,
    /// Non-fatal issues (e.g., a partial allocation).
    pub warnings: Vec<String>,
}
