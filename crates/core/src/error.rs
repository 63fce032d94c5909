// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::breaks::MIN_BREAK_LENGTH;
use crate::optimize::OptimizationResult;
use cto_planner_domain::DomainError;

/// Errors that can occur while planning CTO days.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated (malformed dates, invalid year, ...).
    DomainViolation(DomainError),
    /// The CTO budget is not a positive number of days.
    InvalidBudget {
        /// The requested number of CTO days.
        requested: i32,
    },
    /// The calendar ran out of working days before the budget was spent.
    ///
    /// Recoverable: the partial result is kept.
    PartialAllocation {
        /// Everything computed before the candidates ran out.
        result: Box<OptimizationResult>,
        /// CTO days that could not be placed.
        unallocated: u32,
    },
    /// The strategy name is not recognized.
    UnknownStrategy(String),
    /// Break length category bounds are out of order or too short.
    InvalidBreakBounds {
        /// Requested longest `LongWeekend` break.
        long_weekend_max: usize,
        /// Requested longest `MiniBreak` break.
        mini_break_max: usize,
        /// Requested longest `WeekLong` break.
        week_long_max: usize,
    },
}

impl CoreError {
    /// Returns the partial result carried by a `PartialAllocation`.
    #[must_use]
    pub fn partial_result(&self) -> Option<&OptimizationResult> {
        match self {
            Self::PartialAllocation { result, .. } => Some(result.as_ref()),
            _ => None,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidBudget { requested } => {
                write!(
                    f,
                    "number of CTO days must be greater than 0 (got {requested})"
                )
            }
            Self::PartialAllocation {
                result,
                unallocated,
            } => {
                write!(
                    f,
                    "Only {} CTO days could be placed; {unallocated} left unallocated",
                    result.stats.total_cto_days
                )
            }
            Self::UnknownStrategy(name) => {
                write!(
                    f,
                    "Unknown strategy '{name}'. Expected one of: balanced, mini-breaks, long-weekends, week-long-breaks, extended-vacations"
                )
            }
            Self::InvalidBreakBounds {
                long_weekend_max,
                mini_break_max,
                week_long_max,
            } => {
                write!(
                    f,
                    "Break length bounds must satisfy {MIN_BREAK_LENGTH} <= long weekend ({long_weekend_max}) <= mini break ({mini_break_max}) <= week-long ({week_long_max})"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
