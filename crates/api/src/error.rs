// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shiftboard::CoreError;
use shiftboard_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A payload did not have the expected shape.
    #[error("Malformed {payload} payload: {message}")]
    Malformed {
        /// The payload being parsed.
        payload: &'static str,
        /// The deserialization error.
        message: String,
    },
    /// The remote API answered with an error body.
    #[error("Remote error: {message}")]
    Remote {
        /// The error reported by the server.
        message: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The rosters do not allow a schedule to be generated.
    #[error("Cannot generate schedule: {reason}")]
    NotReady {
        /// Why generation is refused.
        reason: String,
    },
}

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidMonth(_) => ApiError::InvalidInput {
            field: String::from("month"),
            message,
        },
        DomainError::EmptySchedule { .. }
        | DomainError::TooManyDays { .. }
        | DomainError::EmptyDay { .. } => ApiError::DomainRuleViolation {
            rule: String::from("schedule_shape"),
            message,
        },
        DomainError::DuplicateEmployeeId(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_employee_id"),
            message,
        },
        DomainError::DuplicateShiftId(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_shift_id"),
            message,
        },
        DomainError::InvalidEmployeeName { .. } => ApiError::InvalidInput {
            field: String::from("employee_name"),
            message,
        },
        DomainError::InvalidShiftName { .. } => ApiError::InvalidInput {
            field: String::from("shift_name"),
            message,
        },
        DomainError::InvalidWorkHourBounds { .. } => ApiError::DomainRuleViolation {
            rule: String::from("work_hour_bounds"),
            message,
        },
        DomainError::InvalidShiftTime { .. } => ApiError::InvalidInput {
            field: String::from("shift_time"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_error) => translate_domain_error(domain_error),
        CoreError::ScheduleNotFound { year, month } => ApiError::ResourceNotFound {
            resource_type: String::from("Schedule"),
            message: format!("No schedule exists for {month} {year}"),
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
