// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-day classification.
//!
//! Determines, for each date, whether it is a weekend day, a public holiday,
//! or a company day off. Classification is a pure lookup against the
//! externally supplied calendars.
//!
//! ## Invariants
//!
//! - Flags are independent: a weekend may also be a holiday
//! - Classified days never carry a CTO flag
//! - When two entries share a date, the first declared name wins

use crate::error::DomainError;
use crate::types::{CalendarDay, NamedDate, WeekendDays};
use crate::validation::validate_year;
use std::collections::BTreeMap;
use time::{Date, Month};

/// Lookup tables for the fixed days off of a planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDayCalendar {
    weekend_days: WeekendDays,
    holidays: BTreeMap<Date, String>,
    company_days_off: BTreeMap<Date, String>,
}

impl FixedDayCalendar {
    /// Builds the lookup tables.
    ///
    /// # Arguments
    ///
    /// * `weekend_days` - The weekdays that are always off
    /// * `holidays` - Public holidays in declaration order
    /// * `company_days_off` - Expanded company days off in declaration order
    #[must_use]
    pub fn new(
        weekend_days: WeekendDays,
        holidays: &[NamedDate],
        company_days_off: &[NamedDate],
    ) -> Self {
        Self {
            weekend_days,
            holidays: first_name_per_date(holidays),
            company_days_off: first_name_per_date(company_days_off),
        }
    }

    /// Returns the weekend definition.
    #[must_use]
    pub const fn weekend_days(&self) -> WeekendDays {
        self.weekend_days
    }

    /// Classifies a single date.
    #[must_use]
    pub fn classify(&self, date: Date) -> CalendarDay {
        let mut day: CalendarDay =
            CalendarDay::new(date).with_weekend(self.weekend_days.is_weekend(date));

        if let Some(name) = self.holidays.get(&date) {
            day = day.with_holiday(name);
        }
        if let Some(name) = self.company_days_off.get(&date) {
            day = day.with_company_day_off(name);
        }

        day
    }

    /// Classifies every date of `year`, January 1 through December 31.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is out of range.
    pub fn build_year(&self, year: i32) -> Result<Vec<CalendarDay>, DomainError> {
        validate_year(year)?;

        let first: Date = Date::from_calendar_date(year, Month::January, 1).map_err(|e| {
            DomainError::InvalidYear(format!("Cannot build calendar for {year}: {e}"))
        })?;

        let mut days: Vec<CalendarDay> =
            Vec::with_capacity(usize::from(time::util::days_in_year(year)));
        let mut current: Option<Date> = Some(first);

        while let Some(date) = current {
            if date.year() != year {
                break;
            }
            days.push(self.classify(date));
            current = date.next_day();
        }

        Ok(days)
    }
}

/// Classifies a single date against the supplied calendars.
///
/// Convenience wrapper around [`FixedDayCalendar::classify`] for one-off
/// lookups.
#[must_use]
pub fn classify(
    date: Date,
    weekend_days: WeekendDays,
    holidays: &[NamedDate],
    company_days_off: &[NamedDate],
) -> CalendarDay {
    FixedDayCalendar::new(weekend_days, holidays, company_days_off).classify(date)
}

/// Builds the classified day sequence for a whole year.
///
/// # Errors
///
/// Returns an error if the year is out of range.
pub fn build_year(
    year: i32,
    weekend_days: WeekendDays,
    holidays: &[NamedDate],
    company_days_off: &[NamedDate],
) -> Result<Vec<CalendarDay>, DomainError> {
    FixedDayCalendar::new(weekend_days, holidays, company_days_off).build_year(year)
}

fn first_name_per_date(entries: &[NamedDate]) -> BTreeMap<Date, String> {
    let mut by_date: BTreeMap<Date, String> = BTreeMap::new();
    for entry in entries {
        by_date
            .entry(entry.date)
            .or_insert_with(|| entry.name.clone());
    }
    by_date
}
