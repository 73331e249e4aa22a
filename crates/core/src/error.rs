// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftboard_domain::{DomainError, ScheduleMonth};

/// Errors raised by the schedule store.
///
/// An employee ID missing from the roster is not an error; it is recorded as
/// an invalid month instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input handed to the store broke a domain rule.
    DomainViolation(DomainError),
    /// No schedule is stored for the requested month.
    ScheduleNotFound {
        /// The schedule year.
        year: i32,
        /// The schedule month.
        month: ScheduleMonth,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ScheduleNotFound { year, month } => {
                write!(f, "No schedule stored for {month} {year}")
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
