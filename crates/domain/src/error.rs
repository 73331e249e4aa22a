// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{EmployeeId, ShiftId};

/// Errors that can occur during domain validation.
///
/// These represent contract violations in data handed to the domain, never
/// the expected drift between a stored schedule and the current roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Month index is outside 0-11.
    InvalidMonth(u8),
    /// A raw schedule contained no days.
    EmptySchedule {
        /// The schedule year.
        year: i32,
        /// The 0-based month index.
        month: u8,
    },
    /// A raw schedule contained more days than its calendar month.
    TooManyDays {
        /// The number of days received.
        days: usize,
        /// The number of days in the month.
        max: u8,
    },
    /// A day of a raw schedule contained no shifts.
    EmptyDay {
        /// The 0-based day index.
        day: usize,
    },
    /// Two employees in a roster share an ID.
    DuplicateEmployeeId(EmployeeId),
    /// Two shifts in a roster share an ID.
    DuplicateShiftId(ShiftId),
    /// Employee name is empty.
    InvalidEmployeeName {
        /// The offending employee.
        employee_id: EmployeeId,
    },
    /// Shift name is empty.
    InvalidShiftName {
        /// The offending shift.
        shift_id: ShiftId,
    },
    /// Minimum work hours exceed maximum work hours.
    InvalidWorkHourBounds {
        /// The offending employee.
        employee_id: EmployeeId,
        /// The declared minimum.
        min: u32,
        /// The declared maximum.
        max: u32,
    },
    /// A shift time could not be parsed.
    InvalidShiftTime {
        /// The raw time string.
        value: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month index: {month}. Must be between 0 and 11")
            }
            Self::EmptySchedule { year, month } => {
                write!(f, "Schedule for {year}-{month} contains no days")
            }
            Self::TooManyDays { days, max } => {
                write!(
                    f,
                    "Schedule contains {days} days but the month only has {max}"
                )
            }
            Self::EmptyDay { day } => write!(f, "Day {day} of the schedule has no shifts"),
            Self::DuplicateEmployeeId(id) => {
                write!(f, "Employee ID {id} appears more than once in the roster")
            }
            Self::DuplicateShiftId(id) => {
                write!(f, "Shift ID {id} appears more than once in the roster")
            }
            Self::InvalidEmployeeName { employee_id } => {
                write!(f, "Employee {employee_id} has an empty name")
            }
            Self::InvalidShiftName { shift_id } => {
                write!(f, "Shift {shift_id} has an empty name")
            }
            Self::InvalidWorkHourBounds {
                employee_id,
                min,
                max,
            } => {
                write!(
                    f,
                    "Employee {employee_id} has minimum work hours {min} above maximum {max}"
                )
            }
            Self::InvalidShiftTime { value, error } => {
                write!(f, "Failed to parse shift time '{value}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
