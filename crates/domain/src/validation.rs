// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::month::ScheduleMonth;
use crate::types::{Employee, EmployeeId, RawSchedule, Shift, ShiftId};
use std::collections::HashSet;

/// Validates the shape of a raw schedule for a month.
///
/// This does NOT check whether the referenced employees exist; missing
/// employees are expected drift and are handled during resolution. Only
/// shapes the engine can never legitimately produce are rejected.
///
/// Days are not required to agree on their shift count.
///
/// # Arguments
///
/// * `raw` - The raw schedule
/// * `year` - The schedule year
/// * `month` - The schedule month
///
/// # Errors
///
/// Returns an error if:
/// - The schedule has no days
/// - The schedule has more days than the calendar month
/// - Any day has no shifts
pub fn validate_raw_schedule(
    raw: &RawSchedule,
    year: i32,
    month: ScheduleMonth,
) -> Result<(), DomainError> {
    // Rule: a schedule covers at least one day
    if raw.day_count() == 0 {
        return Err(DomainError::EmptySchedule {
            year,
            month: month.value(),
        });
    }

    // Rule: a schedule never covers more days than its month
    let max: u8 = month.days_in(year);
    if raw.day_count() > usize::from(max) {
        return Err(DomainError::TooManyDays {
            days: raw.day_count(),
            max,
        });
    }

    // Rule: every day has at least one shift
    if let Some(day) = raw.days().iter().position(Vec::is_empty) {
        return Err(DomainError::EmptyDay { day });
    }

    Ok(())
}

/// Validates an employee roster as received from the API.
///
/// # Errors
///
/// Returns an error if:
/// - Two employees share an ID
/// - An employee name is empty
/// - An employee's minimum work hours exceed the maximum
pub fn validate_employee_roster(employees: &[Employee]) -> Result<(), DomainError> {
    let mut seen: HashSet<EmployeeId> = HashSet::with_capacity(employees.len());
    for employee in employees {
        if !seen.insert(employee.id) {
            return Err(DomainError::DuplicateEmployeeId(employee.id));
        }
        if employee.name.trim().is_empty() {
            return Err(DomainError::InvalidEmployeeName {
                employee_id: employee.id,
            });
        }
        if let (Some(min), Some(max)) = (employee.min_work_hours, employee.max_work_hours)
            && min > max
        {
            return Err(DomainError::InvalidWorkHourBounds {
                employee_id: employee.id,
                min,
                max,
            });
        }
    }
    Ok(())
}

/// Validates a shift roster as received from the API.
///
/// # Errors
///
/// Returns an error if:
/// - Two shifts share an ID
/// - A shift name is empty
/// - A start or end time cannot be parsed
pub fn validate_shift_roster(shifts: &[Shift]) -> Result<(), DomainError> {
    let mut seen: HashSet<ShiftId> = HashSet::with_capacity(shifts.len());
    for shift in shifts {
        if !seen.insert(shift.id) {
            return Err(DomainError::DuplicateShiftId(shift.id));
        }
        if shift.name.trim().is_empty() {
            return Err(DomainError::InvalidShiftName { shift_id: shift.id });
        }
        shift.length_minutes()?;
    }
    Ok(())
}
