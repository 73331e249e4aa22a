// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use shiftboard_domain::{RawSchedule, Schedule, ScheduleId, ScheduleMonth};
use std::collections::BTreeMap;

/// The twelve month slots of one year, each either empty or holding a
/// resolved schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySchedules([Option<Schedule>; 12]);

impl MonthlySchedules {
    /// Creates a year with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the schedule stored for a month.
    #[must_use]
    pub const fn get(&self, month: ScheduleMonth) -> Option<&Schedule> {
        self.0[month.index()].as_ref()
    }

    /// Stores a schedule for a month, replacing any previous one.
    pub(crate) fn set(&mut self, month: ScheduleMonth, schedule: Schedule) {
        self.0[month.index()] = Some(schedule);
    }

    /// Iterates over the occupied slots in month order.
    pub fn occupied(&self) -> impl Iterator<Item = (ScheduleMonth, &Schedule)> {
        ScheduleMonth::ALL
            .into_iter()
            .zip(self.0.iter())
            .filter_map(|(month, slot)| slot.as_ref().map(|schedule| (month, schedule)))
    }
}

/// Resolved schedules keyed by year.
pub type YearToSchedules = BTreeMap<i32, MonthlySchedules>;

/// Validity flags for the twelve months of one year.
///
/// A year's flags are created all at once, defaulting to valid, so no month
/// of a touched year ever reads as unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearValidity([bool; 12]);

impl YearValidity {
    /// Creates flags with every month valid.
    #[must_use]
    pub const fn all_valid() -> Self {
        Self([true; 12])
    }

    /// Returns the flag for a month.
    #[must_use]
    pub const fn get(&self, month: ScheduleMonth) -> bool {
        self.0[month.index()]
    }

    pub(crate) const fn set(&mut self, month: ScheduleMonth, value: bool) {
        self.0[month.index()] = value;
    }
}

impl Default for YearValidity {
    fn default() -> Self {
        Self::all_valid()
    }
}

/// Validity flags keyed by year.
pub type ScheduleValidity = BTreeMap<i32, YearValidity>;

/// A raw schedule as returned by the schedules or generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// The server-assigned schedule identifier.
    pub schedule_id: ScheduleId,
    /// The schedule year.
    pub year: i32,
    /// The schedule month.
    pub month: ScheduleMonth,
    /// Employee IDs per day and shift.
    pub raw: RawSchedule,
}

impl ScheduleEntry {
    /// Creates a new `ScheduleEntry`.
    ///
    /// # Arguments
    ///
    /// * `schedule_id` - The server-assigned identifier
    /// * `year` - The schedule year
    /// * `month` - The schedule month
    /// * `raw` - Employee IDs per day and shift
    #[must_use]
    pub const fn new(
        schedule_id: ScheduleId,
        year: i32,
        month: ScheduleMonth,
        raw: RawSchedule,
    ) -> Self {
        Self {
            schedule_id,
            year,
            month,
            raw,
        }
    }
}
