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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod classifier;
mod company_days;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use classifier::{FixedDayCalendar, build_year, classify};
pub use company_days::{CompanyDayOff, expand_company_days};
pub use error::DomainError;
pub use types::{CalendarDay, NamedDate, WeekendDays};
pub use validation::{
    MAX_YEAR, MIN_YEAR, parse_date, validate_year, weekday_from_index, weekday_from_name,
};

// Calendar primitives used throughout the public API.
pub use time::{Date, Month, Weekday};
