// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only views of the reconciled schedule state.
//!
//! Reports are what the dashboard renders: a month grid with employee names,
//! per-employee workload and links to the neighboring months, and an overview
//! of every stored month.

use crate::error::{ApiError, ApiResult};
use serde::Serialize;
use shiftboard::ScheduleStore;
use shiftboard_domain::{
    Employee, Schedule, ScheduleId, ScheduleMonth, Shift, ShiftTally, WorkHoursStatus,
    WorkloadTally, tally_shifts, tally_work_hours,
};
use std::fmt;
use time::Date;

/// Employees assigned to one shift of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftAssignment {
    /// The shift name, or a positional label when the slot has no
    /// configured shift.
    pub shift: String,
    /// Display names of the assigned employees.
    pub employees: Vec<String>,
}

/// One day of a month report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    /// The 1-based day of the month.
    pub day: u8,
    /// The weekday name.
    pub weekday: String,
    /// Assignments in shift order.
    pub shifts: Vec<ShiftAssignment>,
}

/// A neighboring month a report links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLink {
    /// The schedule year.
    pub year: i32,
    /// The 0-based month index.
    pub month: u8,
    /// The English month name.
    pub month_name: &'static str,
    /// The schedule stored for that month, if any.
    pub schedule_id: Option<ScheduleId>,
}

impl MonthLink {
    fn new(store: &ScheduleStore, (year, month): (i32, ScheduleMonth)) -> Self {
        Self {
            year,
            month: month.value(),
            month_name: month.name(),
            schedule_id: store.schedule(year, month).map(|schedule| schedule.id),
        }
    }
}

/// The reconciled state of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthReport {
    /// The schedule year.
    pub year: i32,
    /// The 0-based month index.
    pub month: u8,
    /// The English month name.
    pub month_name: &'static str,
    /// Whether the schedule still matches the rosters.
    pub valid: bool,
    /// The stored schedule, if any.
    pub schedule_id: Option<ScheduleId>,
    /// The schedule grid. Empty when no schedule is stored.
    pub days: Vec<DayReport>,
    /// Shift counts and hours per employee.
    pub workload: Vec<WorkloadTally>,
    /// The month before, wrapping into December of the previous year.
    pub previous: MonthLink,
    /// The month after, wrapping into January of the next year.
    pub next: MonthLink,
}

/// Summary of one stored month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthStatus {
    /// The schedule year.
    pub year: i32,
    /// The 0-based month index.
    pub month: u8,
    /// The English month name.
    pub month_name: &'static str,
    /// The stored schedule.
    pub schedule_id: ScheduleId,
    /// Number of scheduled days.
    pub days: usize,
    /// Whether the schedule still matches the rosters.
    pub valid: bool,
    /// Shift counts per employee, in order of first appearance.
    pub shift_counts: Vec<ShiftTally>,
}

/// Builds the report of one month.
///
/// A month without a schedule yields an empty, valid report. A flag that was
/// never set reads as invalid, matching how the dashboard treats it.
///
/// # Arguments
///
/// * `store` - The schedule store
/// * `shifts` - The shift roster in slot order
/// * `year` - The schedule year
/// * `month` - The schedule month
///
/// # Errors
///
/// Returns an error if a shift time cannot be parsed or a stored day falls
/// outside the calendar month.
pub fn build_month_report(
    store: &ScheduleStore,
    shifts: &[Shift],
    year: i32,
    month: ScheduleMonth,
) -> ApiResult<MonthReport> {
    let valid: bool = store.validity(year, month).unwrap_or(false);
    let previous: MonthLink = MonthLink::new(store, month.previous_in(year));
    let next: MonthLink = MonthLink::new(store, month.next_in(year));

    let Some(schedule) = store.schedule(year, month) else {
        return Ok(MonthReport {
            year,
            month: month.value(),
            month_name: month.name(),
            valid,
            schedule_id: None,
            days: Vec::new(),
            workload: Vec::new(),
            previous,
            next,
        });
    };

    let days: Vec<DayReport> = day_reports(schedule, shifts, year, month)?;
    let workload: Vec<WorkloadTally> = tally_work_hours(schedule, shifts)?;

    Ok(MonthReport {
        year,
        month: month.value(),
        month_name: month.name(),
        valid,
        schedule_id: Some(schedule.id),
        days,
        workload,
        previous,
        next,
    })
}

/// Summarizes every stored month in calendar order.
#[must_use]
pub fn build_overview(store: &ScheduleStore) -> Vec<MonthStatus> {
    store
        .schedules()
        .iter()
        .flat_map(|(&year, slots)| {
            slots.occupied().map(move |(month, schedule)| (year, month, schedule))
        })
        .map(|(year, month, schedule)| MonthStatus {
            year,
            month: month.value(),
            month_name: month.name(),
            schedule_id: schedule.id,
            days: schedule.day_count(),
            valid: store.validity(year, month).unwrap_or(false),
            shift_counts: tally_shifts(schedule),
        })
        .collect()
}

fn day_reports(
    schedule: &Schedule,
    shifts: &[Shift],
    year: i32,
    month: ScheduleMonth,
) -> ApiResult<Vec<DayReport>> {
    let mut days: Vec<DayReport> = Vec::with_capacity(schedule.day_count());

    for (index, resolved_day) in schedule.resolved_schedule.iter().enumerate() {
        let day: u8 = u8::try_from(index + 1).map_err(|_| out_of_month(index))?;
        let date: Date = Date::from_calendar_date(year, month.calendar(), day)
            .map_err(|_| out_of_month(index))?;

        let assignments: Vec<ShiftAssignment> = resolved_day
            .iter()
            .enumerate()
            .map(|(slot, assigned)| ShiftAssignment {
                shift: shifts
                    .get(slot)
                    .map_or_else(|| format!("Shift {}", slot + 1), |shift| shift.name.clone()),
                employees: assigned
                    .iter()
                    .map(|employee| employee.display_name().to_string())
                    .collect(),
            })
            .collect();

        days.push(DayReport {
            day,
            weekday: date.weekday().to_string(),
            shifts: assignments,
        });
    }

    Ok(days)
}

fn out_of_month(index: usize) -> ApiError {
    ApiError::InvalidInput {
        field: String::from("schedule"),
        message: format!("Day {} is outside the calendar month", index + 1),
    }
}

fn describe_status(status: WorkHoursStatus) -> String {
    match status {
        WorkHoursStatus::Unbounded => String::from("no bounds"),
        WorkHoursStatus::WithinBounds => String::from("within bounds"),
        WorkHoursStatus::BelowMinimum { minimum } => format!("below minimum of {minimum}"),
        WorkHoursStatus::AboveMaximum { maximum } => format!("above maximum of {maximum}"),
    }
}

const fn validity_label(valid: bool) -> &'static str {
    if valid { "valid" } else { "out of date" }
}

impl fmt::Display for MonthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(schedule_id) = self.schedule_id else {
            return writeln!(f, "{} {}: no schedule", self.month_name, self.year);
        };

        writeln!(
            f,
            "{} {} (schedule {schedule_id}, {})",
            self.month_name,
            self.year,
            validity_label(self.valid)
        )?;

        for day in &self.days {
            writeln!(f, "Day {} ({})", day.day, day.weekday)?;
            for assignment in &day.shifts {
                writeln!(f, "  {}: {}", assignment.shift, assignment.employees.join(", "))?;
            }
        }

        writeln!(f, "Workload")?;
        for tally in &self.workload {
            let employee: &Employee = &tally.employee;
            writeln!(
                f,
                "  {} [{}]: {} shifts, {} hours ({})",
                employee.display_name(),
                employee.id,
                tally.shifts,
                tally.hours,
                describe_status(tally.status)
            )?;
        }

        writeln!(f, "Previous: {}, next: {}", self.previous, self.next)
    }
}

impl fmt::Display for MonthLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name, self.year)?;
        if let Some(schedule_id) = self.schedule_id {
            write!(f, " (schedule {schedule_id})")?;
        }
        Ok(())
    }
}

impl fmt::Display for MonthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: schedule {}, {} days, {}",
            self.month_name,
            self.year,
            self.schedule_id,
            self.days,
            validity_label(self.valid)
        )
    }
}
