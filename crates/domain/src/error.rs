// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Invalid target year value.
    InvalidYear(String),
    /// Weekday index or name is not recognized.
    InvalidWeekday(String),
    /// A weekly recurrence ends before it starts.
    InvalidRecurrence {
        /// The name of the recurring entry.
        name: String,
        /// The first date of the recurrence.
        start_date: Date,
        /// The last date of the recurrence.
        end_date: Date,
    },
    /// A CTO day was requested on a day that is already off.
    NotAWorkingDay {
        /// The offending date.
        date: Date,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidYear(msg) => write!(f, "Invalid year: {msg}"),
            Self::InvalidWeekday(msg) => write!(f, "Invalid weekday: {msg}"),
            Self::InvalidRecurrence {
                name,
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Recurring day off '{name}' ends on {end_date}, before its start {start_date}"
                )
            }
            Self::NotAWorkingDay { date } => {
                write!(
                    f,
                    "Cannot use a CTO day on {date}: it is already a day off"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
