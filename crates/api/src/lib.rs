// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Request boundary of the CTO planner.
//!
//! Callers hand in string-typed requests and calendar files; this crate
//! validates them into domain values, runs the planner, and maps the result
//! into serializable responses. Domain and core errors never cross this
//! boundary untranslated.

mod calendar_import;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use calendar_import::{
    holidays_outside_year, parse_company_days_csv, parse_company_days_json, parse_holidays_csv,
    parse_holidays_json,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{optimize_request, to_params};
pub use request_response::{
    BreakInfo, CommitmentInfo, CompanyDayInput, DayInfo, HolidayInput, OptimizeRequest,
    OptimizeResponse,
};
