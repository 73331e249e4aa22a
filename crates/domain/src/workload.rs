// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-employee shift counts and work hours for a resolved schedule.
//!
//! ## Invariants
//!
//! - Tallies are listed in order of each employee's first appearance
//!   (day, then shift, then position within the shift)
//! - Placeholders are tallied under their own ID
//! - A shift contributes whole hours only (`minutes / 60`)
//! - Slots beyond the configured shifts contribute no hours

use crate::error::DomainError;
use crate::types::{Employee, EmployeeId, Schedule, Shift};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of shifts an employee is assigned in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTally {
    /// The employee as resolved in the schedule.
    pub employee: Employee,
    /// Number of shift slots occupied.
    pub shifts: usize,
}

/// How an employee's scheduled hours compare to their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkHoursStatus {
    /// The employee has no bounds.
    Unbounded,
    /// The hours satisfy every declared bound.
    WithinBounds,
    /// The hours fall short of the minimum.
    BelowMinimum {
        /// The declared minimum.
        minimum: u32,
    },
    /// The hours exceed the maximum.
    AboveMaximum {
        /// The declared maximum.
        maximum: u32,
    },
}

impl WorkHoursStatus {
    const fn evaluate(employee: &Employee, hours: u32) -> Self {
        match (employee.min_work_hours, employee.max_work_hours) {
            (None, None) => Self::Unbounded,
            (Some(minimum), _) if hours < minimum => Self::BelowMinimum { minimum },
            (_, Some(maximum)) if hours > maximum => Self::AboveMaximum { maximum },
            _ => Self::WithinBounds,
        }
    }
}

/// Shift count and work hours of an employee in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadTally {
    /// The employee as resolved in the schedule.
    pub employee: Employee,
    /// Number of shift slots occupied.
    pub shifts: usize,
    /// Total whole hours worked.
    pub hours: u32,
    /// Comparison against the employee's bounds.
    pub status: WorkHoursStatus,
}

/// Counts the shifts each employee occupies in a schedule.
///
/// # Arguments
///
/// * `schedule` - The resolved schedule
#[must_use]
pub fn tally_shifts(schedule: &Schedule) -> Vec<ShiftTally> {
    let mut tallies: Vec<ShiftTally> = Vec::new();
    let mut positions: HashMap<EmployeeId, usize> = HashMap::new();

    for employee in schedule.resolved_schedule.iter().flatten().flatten() {
        if let Some(&position) = positions.get(&employee.id) {
            tallies[position].shifts += 1;
        } else {
            positions.insert(employee.id, tallies.len());
            tallies.push(ShiftTally {
                employee: employee.clone(),
                shifts: 1,
            });
        }
    }

    tallies
}

/// Computes shift counts and work hours per employee.
///
/// Shift lengths are taken positionally from `shifts`: the n-th slot of a
/// day is the n-th configured shift.
///
/// # Arguments
///
/// * `schedule` - The resolved schedule
/// * `shifts` - The shift roster in display order
///
/// # Errors
///
/// Returns `DomainError::InvalidShiftTime` if a shift time cannot be parsed.
pub fn tally_work_hours(
    schedule: &Schedule,
    shifts: &[Shift],
) -> Result<Vec<WorkloadTally>, DomainError> {
    let hours_per_shift: Vec<u32> = shifts
        .iter()
        .map(|shift| shift.length_minutes().map(|minutes| minutes / 60))
        .collect::<Result<_, _>>()?;

    let mut tallies: Vec<WorkloadTally> = Vec::new();
    let mut positions: HashMap<EmployeeId, usize> = HashMap::new();

    for day in &schedule.resolved_schedule {
        for (shift_index, assigned) in day.iter().enumerate() {
            let hours: u32 = hours_per_shift.get(shift_index).copied().unwrap_or(0);
            for employee in assigned {
                if let Some(&position) = positions.get(&employee.id) {
                    let tally: &mut WorkloadTally = &mut tallies[position];
                    tally.shifts += 1;
                    tally.hours += hours;
                } else {
                    positions.insert(employee.id, tallies.len());
                    tallies.push(WorkloadTally {
                        employee: employee.clone(),
                        shifts: 1,
                        hours,
                        status: WorkHoursStatus::Unbounded,
                    });
                }
            }
        }
    }

    for tally in &mut tallies {
        tally.status = WorkHoursStatus::evaluate(&tally.employee, tally.hours);
    }

    Ok(tallies)
}
