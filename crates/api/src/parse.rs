// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary parsing of API response bodies into validated domain values.

use crate::error::ApiResult;
use crate::payload::{EmployeeRecord, ScheduleRecord, ShiftRecord, open_envelope};
use shiftboard::ScheduleEntry;
use shiftboard_domain::{
    Employee, Shift, validate_employee_roster, validate_raw_schedule, validate_shift_roster,
};
use tracing::debug;

/// Parses an employee roster.
///
/// # Arguments
///
/// * `body` - The JSON body of the employees endpoint
///
/// # Returns
///
/// The roster in the order the server listed it.
///
/// # Errors
///
/// Returns an error if:
/// - The body is not a list of employee records, or is an error body
/// - Two employees share an ID
/// - An employee has an empty name or inverted work hour bounds
pub fn parse_employees(body: &str) -> ApiResult<Vec<Employee>> {
    let records: Vec<EmployeeRecord> = open_envelope("employees", body)?;
    let employees: Vec<Employee> = records.into_iter().map(Employee::from).collect();

    validate_employee_roster(&employees)?;

    debug!(count = employees.len(), "Parsed employee roster");
    Ok(employees)
}

/// Parses a shift roster.
///
/// # Arguments
///
/// * `body` - The JSON body of the shifts endpoint
///
/// # Returns
///
/// The roster in the order the server listed it. This order is the order of
/// shift slots within every schedule day.
///
/// # Errors
///
/// Returns an error if:
/// - The body is not a list of shift records, or is an error body
/// - Two shifts share an ID
/// - A shift has an empty name or an unparseable time
pub fn parse_shifts(body: &str) -> ApiResult<Vec<Shift>> {
    let records: Vec<ShiftRecord> = open_envelope("shifts", body)?;
    let shifts: Vec<Shift> = records.into_iter().map(Shift::from).collect();

    validate_shift_roster(&shifts)?;

    debug!(count = shifts.len(), "Parsed shift roster");
    Ok(shifts)
}

/// Parses every stored schedule of an account.
///
/// # Arguments
///
/// * `body` - The JSON body of the schedules endpoint
///
/// # Errors
///
/// Returns an error if the body is malformed or any schedule has an invalid
/// month or shape.
pub fn parse_schedules(body: &str) -> ApiResult<Vec<ScheduleEntry>> {
    let records: Vec<ScheduleRecord> = open_envelope("schedules", body)?;

    let mut entries: Vec<ScheduleEntry> = Vec::with_capacity(records.len());
    for record in records {
        entries.push(checked_entry(record)?);
    }

    debug!(count = entries.len(), "Parsed schedules");
    Ok(entries)
}

/// Parses a single schedule record, as answered when a generated schedule is
/// stored or overwritten.
///
/// # Arguments
///
/// * `body` - The JSON body of the store or update endpoint
///
/// # Errors
///
/// Returns an error if the body is malformed or the schedule has an invalid
/// month or shape.
pub fn parse_schedule(body: &str) -> ApiResult<ScheduleEntry> {
    let record: ScheduleRecord = open_envelope("schedule", body)?;
    checked_entry(record)
}

fn checked_entry(record: ScheduleRecord) -> ApiResult<ScheduleEntry> {
    let entry: ScheduleEntry = record.into_entry()?;
    validate_raw_schedule(&entry.raw, entry.year, entry.month)?;
    Ok(entry)
}
