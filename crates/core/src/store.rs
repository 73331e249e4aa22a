// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The schedule store.
//!
//! Holds every resolved schedule by year and month together with a validity
//! flag per month, and keeps both consistent with the current rosters.
//!
//! ## Invariants
//!
//! - Resolution is one to one: a resolved slot holds exactly as many
//!   employees as the raw slot held IDs
//! - A month without a stored schedule always reads as valid
//! - A year with any flag set has flags for all 12 months
//! - An ID missing from a loaded roster resolves to `Employee::unknown` and
//!   marks its month invalid
//! - An empty roster resolves to `Employee::pending`; resolving against it
//!   never changes a flag in either direction
//! - A month only becomes valid again through a new resolution pass or an
//!   explicit `set_validity(true, ..)`

use crate::error::CoreError;
use crate::state::{MonthlySchedules, ScheduleEntry, ScheduleValidity, YearToSchedules};
use shiftboard_domain::{
    Employee, EmployeeId, RawSchedule, ResolvedDay, Schedule, ScheduleId, ScheduleMonth,
    validate_raw_schedule,
};
use tracing::{debug, info, warn};

/// Owns resolved schedules and their validity flags.
///
/// The store performs no I/O. Callers feed it API payloads and the current
/// rosters; cloning the store yields an independent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleStore {
    /// Resolved schedules by year.
    schedules: YearToSchedules,
    /// Validity flags by year.
    validity: ScheduleValidity,
}

impl ScheduleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored schedule.
    #[must_use]
    pub const fn schedules(&self) -> &YearToSchedules {
        &self.schedules
    }

    /// Returns the schedule stored for a month.
    #[must_use]
    pub fn schedule(&self, year: i32, month: ScheduleMonth) -> Option<&Schedule> {
        self.schedules.get(&year).and_then(|slots| slots.get(month))
    }

    /// Returns whether a non-empty schedule is stored for a month.
    #[must_use]
    pub fn has_schedule(&self, year: i32, month: ScheduleMonth) -> bool {
        self.schedule(year, month)
            .is_some_and(|schedule| schedule.day_count() > 0)
    }

    /// Returns the identifier of the schedule stored for a month.
    ///
    /// Regeneration overwrites an existing schedule and needs its ID.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ScheduleNotFound` if the month has no schedule.
    pub fn schedule_id(&self, year: i32, month: ScheduleMonth) -> Result<ScheduleId, CoreError> {
        self.schedule(year, month)
            .map(|schedule| schedule.id)
            .ok_or(CoreError::ScheduleNotFound { year, month })
    }

    /// Returns whether the schedule for a month is consistent with the
    /// rosters.
    ///
    /// # Returns
    ///
    /// * `Some(true)` if no schedule is stored for the month
    /// * `Some(flag)` with the stored flag otherwise
    /// * `None` if a schedule exists but its year was never flagged
    #[must_use]
    pub fn validity(&self, year: i32, month: ScheduleMonth) -> Option<bool> {
        if !self.has_schedule(year, month) {
            return Some(true);
        }
        self.validity.get(&year).map(|flags| flags.get(month))
    }

    /// Returns the validity flags of every year that has been flagged.
    #[must_use]
    pub const fn validity_flags(&self) -> &ScheduleValidity {
        &self.validity
    }

    /// Returns every month with a stored schedule that is currently invalid.
    #[must_use]
    pub fn invalid_months(&self) -> Vec<(i32, ScheduleMonth)> {
        self.schedules
            .iter()
            .flat_map(|(&year, slots)| slots.occupied().map(move |(month, _)| (year, month)))
            .filter(|&(year, month)| self.validity(year, month) == Some(false))
            .collect()
    }

    /// Overwrites the validity flag for a month.
    ///
    /// Used both for automatic invalidation and for the user dismissing the
    /// invalid-schedule warning. A year touched for the first time has all
    /// its months set to valid before the override is applied.
    ///
    /// # Arguments
    ///
    /// * `value` - The new flag
    /// * `year` - The schedule year
    /// * `month` - The schedule month
    pub fn set_validity(&mut self, value: bool, year: i32, month: ScheduleMonth) {
        self.validity.entry(year).or_default().set(month, value);
    }

    /// Resolves one employee ID against the roster.
    ///
    /// An ID missing from a loaded roster is expected drift (the employee was
    /// deleted after generation): it resolves to `Employee::unknown` and marks
    /// the month invalid. An empty roster means it has not been loaded yet, so
    /// the ID resolves to `Employee::pending` and validity is untouched.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The referenced employee
    /// * `roster` - The current employee roster
    /// * `year` - The year of the referencing schedule
    /// * `month` - The month of the referencing schedule
    pub fn resolve_employee_reference(
        &mut self,
        employee_id: EmployeeId,
        roster: &[Employee],
        year: i32,
        month: ScheduleMonth,
    ) -> Employee {
        if roster.is_empty() {
            return Employee::pending(employee_id);
        }

        match roster.iter().find(|employee| employee.id == employee_id) {
            Some(employee) => employee.clone(),
            None => {
                warn!(
                    employee_id,
                    year,
                    month = month.value(),
                    "Employee missing from roster, marking schedule invalid"
                );
                self.set_validity(false, year, month);
                Employee::unknown(employee_id)
            }
        }
    }

    /// Replaces every stored schedule with a freshly resolved set.
    ///
    /// Each entry's month is flagged valid before its IDs are resolved, so the
    /// flag ends up reflecting this resolution pass only. Entries are all
    /// validated before anything is changed.
    ///
    /// # Arguments
    ///
    /// * `entries` - Every schedule the API returned
    /// * `roster` - The current employee roster
    ///
    /// # Returns
    ///
    /// The replaced schedules.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if any entry has an invalid
    /// shape. The store is unchanged in that case.
    pub fn ingest_schedules(
        &mut self,
        entries: &[ScheduleEntry],
        roster: &[Employee],
    ) -> Result<&YearToSchedules, CoreError> {
        for entry in entries {
            validate_raw_schedule(&entry.raw, entry.year, entry.month)?;
        }

        self.validity = ScheduleValidity::new();
        let mut schedules: YearToSchedules = YearToSchedules::new();
        for entry in entries {
            self.set_validity(true, entry.year, entry.month);
            let schedule: Schedule = self.resolve_schedule(
                entry.schedule_id,
                &entry.raw,
                roster,
                entry.year,
                entry.month,
            );
            schedules
                .entry(entry.year)
                .or_insert_with(MonthlySchedules::new)
                .set(entry.month, schedule);
        }
        self.schedules = schedules;

        info!(
            schedules = entries.len(),
            invalid = self.invalid_months().len(),
            "Ingested schedules"
        );
        Ok(&self.schedules)
    }

    /// Stores a newly generated schedule for one month, replacing any
    /// existing one.
    ///
    /// The month is flagged valid before resolution, so a regeneration whose
    /// IDs all resolve clears an earlier invalidation. Other months are not
    /// touched.
    ///
    /// # Arguments
    ///
    /// * `year` - The schedule year
    /// * `month` - The schedule month
    /// * `schedule_id` - The server-assigned identifier
    /// * `raw` - Employee IDs per day and shift
    /// * `roster` - The current employee roster
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` if the shape is invalid.
    pub fn store_or_replace_schedule(
        &mut self,
        year: i32,
        month: ScheduleMonth,
        schedule_id: ScheduleId,
        raw: &RawSchedule,
        roster: &[Employee],
    ) -> Result<Schedule, CoreError> {
        validate_raw_schedule(raw, year, month)?;

        let replacing: bool = self.has_schedule(year, month);
        self.set_validity(true, year, month);
        let schedule: Schedule = self.resolve_schedule(schedule_id, raw, roster, year, month);
        self.schedules
            .entry(year)
            .or_insert_with(MonthlySchedules::new)
            .set(month, schedule.clone());

        debug!(
            schedule_id,
            year,
            month = month.value(),
            replacing,
            "Stored generated schedule"
        );
        Ok(schedule)
    }

    /// Marks a month invalid when its schedule no longer fits the rosters.
    ///
    /// The schedule is out of date when its first day has a different number
    /// of shifts than are configured, or when a loaded employee roster has
    /// fewer employees than shifts. Only the first day is compared. Nothing
    /// happens while the shift roster is empty or when no schedule is stored,
    /// and a consistent schedule keeps whatever flag it had.
    ///
    /// # Arguments
    ///
    /// * `year` - The schedule year
    /// * `month` - The schedule month
    /// * `employee_count` - Size of the current employee roster
    /// * `shift_count` - Size of the current shift roster
    pub fn check_roster_consistency(
        &mut self,
        year: i32,
        month: ScheduleMonth,
        employee_count: usize,
        shift_count: usize,
    ) {
        let Some(shifts_in_schedule) = self
            .schedule(year, month)
            .and_then(Schedule::shifts_on_first_day)
        else {
            return;
        };
        if shift_count == 0 {
            return;
        }

        let understaffed: bool = employee_count > 0 && employee_count < shift_count;
        if understaffed || shifts_in_schedule != shift_count {
            warn!(
                year,
                month = month.value(),
                employee_count,
                shift_count,
                shifts_in_schedule,
                "Schedule no longer matches rosters, marking invalid"
            );
            self.set_validity(false, year, month);
        }
    }

    /// Re-resolves every stored schedule after a roster change.
    ///
    /// Each schedule is rebuilt from the IDs carried by its slots, its flag
    /// reset to valid, and then re-derived from unresolved IDs and roster
    /// consistency. An empty employee roster resolves nothing, so flags are
    /// kept as they are in that case.
    ///
    /// # Arguments
    ///
    /// * `roster` - The current employee roster
    /// * `shift_count` - Size of the current shift roster
    pub fn refresh_rosters(&mut self, roster: &[Employee], shift_count: usize) {
        let stored: Vec<ScheduleEntry> = self
            .schedules
            .iter()
            .flat_map(|(&year, slots)| {
                slots.occupied().map(move |(month, schedule)| {
                    ScheduleEntry::new(schedule.id, year, month, schedule.to_raw())
                })
            })
            .collect();

        for entry in &stored {
            if !roster.is_empty() {
                self.set_validity(true, entry.year, entry.month);
            }
            let schedule: Schedule = self.resolve_schedule(
                entry.schedule_id,
                &entry.raw,
                roster,
                entry.year,
                entry.month,
            );
            self.schedules
                .entry(entry.year)
                .or_insert_with(MonthlySchedules::new)
                .set(entry.month, schedule);
        }

        for entry in &stored {
            self.check_roster_consistency(entry.year, entry.month, roster.len(), shift_count);
        }

        info!(
            schedules = stored.len(),
            employees = roster.len(),
            shift_count,
            "Refreshed schedules against rosters"
        );
    }

    fn resolve_schedule(
        &mut self,
        schedule_id: ScheduleId,
        raw: &RawSchedule,
        roster: &[Employee],
        year: i32,
        month: ScheduleMonth,
    ) -> Schedule {
        let mut resolved: Vec<ResolvedDay> = Vec::with_capacity(raw.day_count());
        for day in raw.days() {
            let mut resolved_day: ResolvedDay = Vec::with_capacity(day.len());
            for shift in day {
                let mut assigned: Vec<Employee> = Vec::with_capacity(shift.len());
                for &employee_id in shift {
                    assigned.push(self.resolve_employee_reference(
                        employee_id,
                        roster,
                        year,
                        month,
                    ));
                }
                resolved_day.push(assigned);
            }
            resolved.push(resolved_day);
        }
        Schedule::new(schedule_id, resolved)
    }
}
