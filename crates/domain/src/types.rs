// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Time;
use time::macros::format_description;

/// Server-assigned employee identifier.
pub type EmployeeId = i64;
/// Server-assigned shift identifier.
pub type ShiftId = i64;
/// Server-assigned schedule identifier.
pub type ScheduleId = i64;

/// One day of a resolved schedule: shifts in roster order, each holding the
/// employees assigned to it.
pub type ResolvedDay = Vec<Vec<Employee>>;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Represents an employee on the roster.
///
/// Identity is the `id`. Employees are owned by the remote roster; schedules
/// only hold copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// The server-assigned identifier.
    pub id: EmployeeId,
    /// The display name. Empty for a pending placeholder.
    pub name: String,
    /// Minimum monthly work hours, if bounded.
    pub min_work_hours: Option<u32>,
    /// Maximum monthly work hours, if bounded.
    pub max_work_hours: Option<u32>,
}

impl Employee {
    /// Name carried by the placeholder for an ID missing from the roster.
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Creates a new `Employee`.
    ///
    /// # Arguments
    ///
    /// * `id` - The server-assigned identifier
    /// * `name` - The display name
    /// * `min_work_hours` - Optional minimum monthly work hours
    /// * `max_work_hours` - Optional maximum monthly work hours
    #[must_use]
    pub fn new(
        id: EmployeeId,
        name: &str,
        min_work_hours: Option<u32>,
        max_work_hours: Option<u32>,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            min_work_hours,
            max_work_hours,
        }
    }

    /// Placeholder for an ID that no longer exists in a loaded roster.
    #[must_use]
    pub fn unknown(id: EmployeeId) -> Self {
        Self::new(id, Self::UNKNOWN_NAME, None, None)
    }

    /// Placeholder used while the roster has not been loaded yet.
    ///
    /// The ID is kept so the slot can be resolved once the roster arrives.
    #[must_use]
    pub const fn pending(id: EmployeeId) -> Self {
        Self {
            id,
            name: String::new(),
            min_work_hours: None,
            max_work_hours: None,
        }
    }

    /// Returns the name to render, falling back to `"Unknown"` for a pending
    /// placeholder.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            Self::UNKNOWN_NAME
        } else {
            &self.name
        }
    }
}

/// Represents a shift configured for every day.
///
/// Times are wall-clock strings (`HH:MM` or `HH:MM:SS`). A shift whose end is
/// earlier than its start runs past midnight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shift {
    /// The server-assigned identifier.
    pub id: ShiftId,
    /// The display name.
    pub name: String,
    /// Start time.
    pub start_time: String,
    /// End time.
    pub end_time: String,
}

impl Shift {
    /// Creates a new `Shift`.
    ///
    /// # Arguments
    ///
    /// * `id` - The server-assigned identifier
    /// * `name` - The display name
    /// * `start_time` - Start time (`HH:MM` or `HH:MM:SS`)
    /// * `end_time` - End time (`HH:MM` or `HH:MM:SS`)
    #[must_use]
    pub fn new(id: ShiftId, name: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }

    /// Returns the shift length in minutes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidShiftTime` if either time fails to parse.
    pub fn length_minutes(&self) -> Result<u32, DomainError> {
        let start: u32 = minutes_since_midnight(parse_clock(&self.start_time)?);
        let mut end: u32 = minutes_since_midnight(parse_clock(&self.end_time)?);
        if end < start {
            end += MINUTES_PER_DAY;
        }
        Ok(end - start)
    }
}

fn parse_clock(value: &str) -> Result<Time, DomainError> {
    let with_seconds = format_description!("[hour]:[minute]:[second]");
    let without_seconds = format_description!("[hour]:[minute]");
    Time::parse(value, &with_seconds)
        .or_else(|_| Time::parse(value, &without_seconds))
        .map_err(|err| DomainError::InvalidShiftTime {
            value: value.to_string(),
            error: err.to_string(),
        })
}

fn minutes_since_midnight(time: Time) -> u32 {
    u32::from(time.hour()) * 60 + u32::from(time.minute())
}

/// A generated schedule as returned by the engine: days, then shifts in
/// roster order, then the IDs of the employees assigned to each shift.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSchedule(Vec<Vec<Vec<EmployeeId>>>);

impl RawSchedule {
    /// Creates a new `RawSchedule` from nested ID arrays.
    #[must_use]
    pub const fn new(days: Vec<Vec<Vec<EmployeeId>>>) -> Self {
        Self(days)
    }

    /// Returns the days of the schedule.
    #[must_use]
    pub fn days(&self) -> &[Vec<Vec<EmployeeId>>] {
        &self.0
    }

    /// Returns the number of days.
    #[must_use]
    pub const fn day_count(&self) -> usize {
        self.0.len()
    }
}

/// A schedule whose employee IDs have been resolved to employee records.
///
/// Resolution is one to one: every slot holds exactly as many employees as
/// the raw schedule held IDs, with placeholders standing in for IDs that
/// could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// The server-assigned identifier.
    pub id: ScheduleId,
    /// Days, then shifts, then assigned employees.
    pub resolved_schedule: Vec<ResolvedDay>,
}

impl Schedule {
    /// Creates a new `Schedule`.
    #[must_use]
    pub const fn new(id: ScheduleId, resolved_schedule: Vec<ResolvedDay>) -> Self {
        Self {
            id,
            resolved_schedule,
        }
    }

    /// Returns the number of days.
    #[must_use]
    pub const fn day_count(&self) -> usize {
        self.resolved_schedule.len()
    }

    /// Returns the number of shifts on the first day, if any day exists.
    #[must_use]
    pub fn shifts_on_first_day(&self) -> Option<usize> {
        self.resolved_schedule.first().map(Vec::len)
    }

    /// Recovers the ID-only form of this schedule.
    ///
    /// Placeholders keep the ID they were created for, so this is the inverse
    /// of resolution regardless of how each slot was resolved.
    #[must_use]
    pub fn to_raw(&self) -> RawSchedule {
        RawSchedule::new(
            self.resolved_schedule
                .iter()
                .map(|day| {
                    day.iter()
                        .map(|shift| shift.iter().map(|employee| employee.id).collect())
                        .collect()
                })
                .collect(),
        )
    }
}
