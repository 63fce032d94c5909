// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cto_planner::CoreError;
use cto_planner_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A calendar CSV file could not be read.
    InvalidCsvFormat {
        /// Why the file was rejected.
        reason: String,
    },
    /// A calendar JSON document could not be read.
    InvalidJson {
        /// Why the document was rejected.
        reason: String,
    },
}

impl ApiError {
    /// Shorthand for an `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidCsvFormat { reason } => {
                write!(f, "Invalid CSV format: {reason}")
            }
            Self::InvalidJson { reason } => {
                write!(f, "Invalid JSON: {reason}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DateParseError { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message: err.to_string(),
        },
        DomainError::InvalidYear(msg) => ApiError::InvalidInput {
            field: String::from("year"),
            message: msg,
        },
        DomainError::InvalidWeekday(msg) => ApiError::InvalidInput {
            field: String::from("weekday"),
            message: msg,
        },
        DomainError::InvalidRecurrence { .. } => ApiError::InvalidInput {
            field: String::from("company_days_off"),
            message: err.to_string(),
        },
        DomainError::NotAWorkingDay { .. } => ApiError::DomainRuleViolation {
            rule: String::from("cto_on_working_day"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// `PartialAllocation` is normally turned into a response with a warning
/// before it reaches this point.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidBudget { .. } => ApiError::InvalidInput {
            field: String::from("number_of_days"),
            message: err.to_string(),
        },
        CoreError::PartialAllocation { .. } => ApiError::DomainRuleViolation {
            rule: String::from("full_allocation"),
            message: err.to_string(),
        },
        CoreError::UnknownStrategy(_) => ApiError::InvalidInput {
            field: String::from("strategy"),
            message: err.to_string(),
        },
        CoreError::InvalidBreakBounds { .. } => ApiError::InvalidInput {
            field: String::from("break_bounds"),
            message: err.to_string(),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}
