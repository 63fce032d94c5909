// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employer-mandated days off.
//!
//! A company day off is either a single dated entry or a weekly recurrence
//! (the same weekday repeated across an inclusive date range). Both forms
//! expand into plain dated entries before classification.

use crate::error::DomainError;
use crate::types::NamedDate;
use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

/// A day off mandated by the employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompanyDayOff {
    /// A single dated day off.
    Single {
        /// The day off.
        date: Date,
        /// The display name.
        name: String,
    },
    /// A weekday repeated every week across an inclusive date range.
    Weekly {
        /// The weekday that is off.
        weekday: Weekday,
        /// The first date of the range (inclusive).
        start_date: Date,
        /// The last date of the range (inclusive).
        end_date: Date,
        /// The display name.
        name: String,
    },
}

impl CompanyDayOff {
    /// Creates a single dated company day off.
    #[must_use]
    pub fn single(date: Date, name: &str) -> Self {
        Self::Single {
            date,
            name: name.to_string(),
        }
    }

    /// Creates a weekly recurring company day off.
    ///
    /// # Arguments
    ///
    /// * `weekday` - The weekday that repeats
    /// * `start_date` - The first date of the range (inclusive)
    /// * `end_date` - The last date of the range (inclusive)
    /// * `name` - The display name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRecurrence` if `end_date` precedes `start_date`.
    pub fn weekly(
        weekday: Weekday,
        start_date: Date,
        end_date: Date,
        name: &str,
    ) -> Result<Self, DomainError> {
        if end_date < start_date {
            return Err(DomainError::InvalidRecurrence {
                name: name.to_string(),
                start_date,
                end_date,
            });
        }

        Ok(Self::Weekly {
            weekday,
            start_date,
            end_date,
            name: name.to_string(),
        })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Single { name, .. } | Self::Weekly { name, .. } => name,
        }
    }

    /// Expands this entry into dated days off, in ascending date order.
    ///
    /// A weekly recurrence whose range contains no matching weekday expands
    /// to nothing.
    #[must_use]
    pub fn expand(&self) -> Vec<NamedDate> {
        match self {
            Self::Single { date, name } => vec![NamedDate::new(*date, name)],
            Self::Weekly {
                weekday,
                start_date,
                end_date,
                name,
            } => {
                let mut dates: Vec<NamedDate> = Vec::new();
                let mut current: Option<Date> = first_on_or_after(*start_date, *weekday);

                // Stepping past the last representable date ends the recurrence.
                while let Some(date) = current.filter(|date| date <= end_date) {
                    dates.push(NamedDate::new(date, name));
                    current = date.checked_add(time::Duration::weeks(1));
                }

                dates
            }
        }
    }
}

/// Expands a list of company days off into dated entries.
///
/// Output is sorted by date; entry order is preserved for equal dates so the
/// first declared name wins during classification.
#[must_use]
pub fn expand_company_days(entries: &[CompanyDayOff]) -> Vec<NamedDate> {
    let mut dates: Vec<NamedDate> = entries.iter().flat_map(CompanyDayOff::expand).collect();
    dates.sort_by_key(|entry| entry.date);
    dates
}

/// Returns the first date on or after `date` that falls on `weekday`, or
/// `None` if that date is not representable.
fn first_on_or_after(date: Date, weekday: Weekday) -> Option<Date> {
    let offset: u8 =
        (weekday.number_days_from_monday() + 7 - date.weekday().number_days_from_monday()) % 7;
    date.checked_add(time::Duration::days(i64::from(offset)))
}
