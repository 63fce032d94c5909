// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for planning requests.

use cto_planner::{
    CoreError, OptimizationParams, OptimizationResult, OptimizationStrategy, optimize,
};
use cto_planner_domain::{
    CompanyDayOff, Date, NamedDate, Weekday, WeekendDays, parse_date, validate_year,
    weekday_from_name,
};
use tracing::{info, warn};

use crate::calendar_import::holidays_outside_year;
use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    BreakInfo, CommitmentInfo, CompanyDayInput, DayInfo, HolidayInput, OptimizeRequest,
    OptimizeResponse,
};

/// Parses a date field, naming the field in the error.
fn parse_date_field(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|e| ApiError::invalid_input(field, e.to_string()))
}

/// Translates holiday inputs into domain entries.
fn to_holidays(holidays: &[HolidayInput]) -> Result<Vec<NamedDate>, ApiError> {
    holidays
        .iter()
        .enumerate()
        .map(|(idx, holiday)| {
            let date: Date = parse_date_field(&format!("holidays[{idx}].date"), &holiday.date)?;
            if holiday.name.trim().is_empty() {
                return Err(ApiError::invalid_input(
                    &format!("holidays[{idx}].name"),
                    "name must not be empty",
                ));
            }
            Ok(NamedDate::new(date, holiday.name.trim()))
        })
        .collect()
}

/// Translates one company day input into a domain entry.
fn to_company_day(idx: usize, entry: &CompanyDayInput) -> Result<CompanyDayOff, ApiError> {
    let field = |name: &str| format!("company_days_off[{idx}].{name}");

    let name: &str = entry.name.trim();
    if name.is_empty() {
        return Err(ApiError::invalid_input(
            &field("name"),
            "name must not be empty",
        ));
    }

    match (&entry.date, &entry.weekday) {
        (Some(date), None) => Ok(CompanyDayOff::single(
            parse_date_field(&field("date"), date)?,
            name,
        )),
        (None, Some(weekday)) => {
            let weekday: Weekday = weekday_from_name(weekday)
                .map_err(|e| ApiError::invalid_input(&field("weekday"), e.to_string()))?;
            let start_date: &str = entry.start_date.as_deref().ok_or_else(|| {
                ApiError::invalid_input(&field("start_date"), "required for a weekly recurrence")
            })?;
            let end_date: &str = entry.end_date.as_deref().ok_or_else(|| {
                ApiError::invalid_input(&field("end_date"), "required for a weekly recurrence")
            })?;

            CompanyDayOff::weekly(
                weekday,
                parse_date_field(&field("start_date"), start_date)?,
                parse_date_field(&field("end_date"), end_date)?,
                name,
            )
            .map_err(|e| ApiError::invalid_input(&field("end_date"), e.to_string()))
        }
        (Some(_), Some(_)) => Err(ApiError::invalid_input(
            &field("date"),
            "date and weekday are mutually exclusive",
        )),
        (None, None) => Err(ApiError::invalid_input(
            &field("date"),
            "either date, or weekday with start_date and end_date, is required",
        )),
    }
}

/// Validates a request and translates it into core parameters.
///
/// # Arguments
///
/// * `request` - The planning request
/// * `today` - The caller's current date, used unless the request overrides it
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming the first invalid field.
pub fn to_params(request: &OptimizeRequest, today: Date) -> Result<OptimizationParams, ApiError> {
    // Budget is checked first so nothing else is parsed for a hopeless request
    if request.number_of_days <= 0 {
        return Err(translate_core_error(CoreError::InvalidBudget {
            requested: request.number_of_days,
        }));
    }

    let today: Date = match &request.today {
        Some(value) => parse_date_field("today", value)?,
        None => today,
    };

    let year: i32 = request.year.unwrap_or_else(|| today.year());
    validate_year(year).map_err(|e| ApiError::invalid_input("year", e.to_string()))?;

    let strategy: OptimizationStrategy = match &request.strategy {
        Some(name) => name.parse().map_err(translate_core_error)?,
        None => OptimizationStrategy::default(),
    };

    let weekend_days: WeekendDays = match &request.weekend_days {
        Some(indices) => WeekendDays::from_indices(indices)
            .map_err(|e| ApiError::invalid_input("weekend_days", e.to_string()))?,
        None => WeekendDays::default(),
    };

    let holidays: Vec<NamedDate> = to_holidays(&request.holidays)?;
    let company_days_off: Vec<CompanyDayOff> = request
        .company_days_off
        .iter()
        .enumerate()
        .map(|(idx, entry)| to_company_day(idx, entry))
        .collect::<Result<Vec<CompanyDayOff>, ApiError>>()?;

    Ok(OptimizationParams::new(today, year, request.number_of_days)
        .with_strategy(strategy)
        .with_weekend_days(weekend_days)
        .with_holidays(holidays)
        .with_company_days_off(company_days_off))
}

/// Builds the response for a (possibly partial) result.
fn to_response(
    request: &OptimizeRequest,
    year: i32,
    result: &OptimizationResult,
    unallocated_days: u32,
    warnings: Vec<String>,
) -> OptimizeResponse {
    OptimizeResponse {
        year,
        strategy: result.strategy.to_string(),
        number_of_days: request.number_of_days,
        unallocated_days,
        score: result.score,
        cto_dates: result
            .cto_dates()
            .iter()
            .map(ToString::to_string)
            .collect(),
        breaks: result.breaks.iter().map(BreakInfo::from).collect(),
        stats: result.stats,
        commitments: result.commitments.iter().map(CommitmentInfo::from).collect(),
        days: result.days.iter().map(DayInfo::from).collect(),
        warnings,
    }
}

/// Plans CTO days for a request.
///
/// This function:
/// - Validates every request field
/// - Runs the planner
/// - Maps the result into a serializable response
///
/// A partial allocation (the year ran out of selectable working days) is not
/// an error here: the response carries `unallocated_days > 0` and a warning.
///
/// # Arguments
///
/// * `request` - The planning request
/// * `today` - The caller's current date, used unless the request overrides it
///
/// # Errors
///
/// Returns an error if:
/// - `number_of_days` is not positive
/// - Any date, the year, the strategy, or a weekday is invalid
pub fn optimize_request(
    request: &OptimizeRequest,
    today: Date,
) -> Result<OptimizeResponse, ApiError> {
    let params: OptimizationParams = to_params(request, today)?;

    let mut warnings: Vec<String> = Vec::new();
    let ignored: Vec<String> = holidays_outside_year(&request.holidays, params.year);
    if !ignored.is_empty() {
        warn!(year = params.year, ignored = ?ignored, "Holidays outside the target year");
        warnings.push(format!(
            "{} holiday(s) outside {} ignored: {}",
            ignored.len(),
            params.year,
            ignored.join(", ")
        ));
    }

    let response: OptimizeResponse = match optimize(&params) {
        Ok(result) => to_response(request, params.year, &result, 0, warnings),
        Err(CoreError::PartialAllocation {
            result,
            unallocated,
        }) => {
            warnings.push(format!(
                "Only {} of {} CTO days could be placed: no working days left after {}",
                result.stats.total_cto_days, request.number_of_days, params.today
            ));
            to_response(request, params.year, &result, unallocated, warnings)
        }
        Err(err) => return Err(translate_core_error(err)),
    };

    info!(
        year = response.year,
        strategy = %response.strategy,
        cto_days = response.cto_dates.len(),
        unallocated = response.unallocated_days,
        "Planning request served"
    );

    Ok(response)
}
