// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The dashboard application shell.
//!
//! `Dashboard` owns the employee roster, the shift roster and the schedule
//! store. Every API response the dashboard receives is fed through it so the
//! store is re-reconciled whenever either roster changes.

use crate::error::{ApiError, ApiResult};
use crate::parse::{parse_employees, parse_schedule, parse_schedules, parse_shifts};
use crate::payload::GenerateScheduleRequest;
use crate::report::{MonthReport, MonthStatus, build_month_report, build_overview};
use shiftboard::{ScheduleEntry, ScheduleStore};
use shiftboard_domain::{Employee, GenerationReadiness, Schedule, ScheduleMonth, Shift};
use tracing::{debug, info};

/// Rosters and schedules of one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    store: ScheduleStore,
}

impl Dashboard {
    /// Creates a dashboard with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the employee roster.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the shift roster.
    #[must_use]
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Returns the schedule store.
    #[must_use]
    pub const fn store(&self) -> &ScheduleStore {
        &self.store
    }

    /// Replaces the employee roster.
    ///
    /// Stored schedules are re-resolved against the new roster.
    ///
    /// # Arguments
    ///
    /// * `body` - The JSON body of the employees endpoint
    ///
    /// # Returns
    ///
    /// The number of employees loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be parsed or violates a roster
    /// rule. The dashboard is unchanged in that case.
    pub fn load_employees(&mut self, body: &str) -> ApiResult<usize> {
        let employees: Vec<Employee> = parse_employees(body)?;
        self.employees = employees;

        info!(count = self.employees.len(), "Loaded employee roster");
        self.refresh();
        Ok(self.employees.len())
    }

    /// Replaces the shift roster.
    ///
    /// Stored schedules are re-checked against the new shift count.
    ///
    /// # Arguments
    ///
    /// * `body` - The JSON body of the shifts endpoint
    ///
    /// # Returns
    ///
    /// The number of shifts loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be parsed or violates a roster
    /// rule. The dashboard is unchanged in that case.
    pub fn load_shifts(&mut self, body: &str) -> ApiResult<usize> {
        let shifts: Vec<Shift> = parse_shifts(body)?;
        self.shifts = shifts;

        info!(count = self.shifts.len(), "Loaded shift roster");
        self.refresh();
        Ok(self.shifts.len())
    }

    /// Replaces every stored schedule with the account's schedules.
    ///
    /// # Arguments
    ///
    /// * `body` - The JSON body of the schedules endpoint
    ///
    /// # Returns
    ///
    /// The number of schedules stored.
    ///
    /// # Errors
    ///
    /// Returns an error if any schedule is malformed. No schedule is stored
    /// in that case.
    pub fn load_schedules(&mut self, body: &str) -> ApiResult<usize> {
        let entries: Vec<ScheduleEntry> = parse_schedules(body)?;
        self.store.ingest_schedules(&entries, &self.employees)?;

        for entry in &entries {
            self.store.check_roster_consistency(
                entry.year,
                entry.month,
                self.employees.len(),
                self.shifts.len(),
            );
        }

        Ok(entries.len())
    }

    /// Stores a generated schedule, replacing the month's previous one.
    ///
    /// # Arguments
    ///
    /// * `body` - The JSON body returned when the schedule was saved
    ///
    /// # Returns
    ///
    /// The resolved schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule is malformed. The store is unchanged
    /// in that case.
    pub fn apply_generated(&mut self, body: &str) -> ApiResult<Schedule> {
        let entry: ScheduleEntry = parse_schedule(body)?;
        let schedule: Schedule = self.store.store_or_replace_schedule(
            entry.year,
            entry.month,
            entry.schedule_id,
            &entry.raw,
            &self.employees,
        )?;

        self.store.check_roster_consistency(
            entry.year,
            entry.month,
            self.employees.len(),
            self.shifts.len(),
        );

        Ok(schedule)
    }

    /// Marks a month valid after the user dismissed its warning.
    ///
    /// # Arguments
    ///
    /// * `year` - The schedule year
    /// * `month` - The schedule month
    pub fn dismiss_invalid_warning(&mut self, year: i32, month: ScheduleMonth) {
        info!(year, month = month.value(), "Dismissed invalid schedule warning");
        self.store.set_validity(true, year, month);
    }

    /// Returns whether a month's schedule matches the rosters.
    ///
    /// See `ScheduleStore::validity`.
    #[must_use]
    pub fn validity(&self, year: i32, month: ScheduleMonth) -> Option<bool> {
        self.store.validity(year, month)
    }

    /// Returns whether the rosters allow a schedule to be generated.
    #[must_use]
    pub const fn readiness(&self) -> GenerationReadiness {
        GenerationReadiness::assess(self.employees.len(), self.shifts.len())
    }

    /// Builds the request for generating a month's schedule.
    ///
    /// When the month already has a schedule the request carries its ID so
    /// the generated schedule overwrites it.
    ///
    /// # Arguments
    ///
    /// * `account_id` - The requesting account
    /// * `year` - The schedule year
    /// * `month` - The schedule month
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotReady` if the rosters are not ready for
    /// generation.
    pub fn generation_request(
        &self,
        account_id: i64,
        year: i32,
        month: ScheduleMonth,
    ) -> ApiResult<GenerateScheduleRequest> {
        // Rule: one employee per shift per day
        let readiness: GenerationReadiness = self.readiness();
        if !readiness.is_ready() {
            return Err(ApiError::NotReady {
                reason: readiness.message().to_string(),
            });
        }

        let request: GenerateScheduleRequest = GenerateScheduleRequest {
            account_id,
            year,
            month: month.value(),
            num_shifts_per_day: self.shifts.len(),
            num_days: month.days_in(year),
            schedule_id: self.store.schedule(year, month).map(|schedule| schedule.id),
        };

        debug!(
            account_id,
            year,
            month = month.value(),
            regenerate = request.schedule_id.is_some(),
            "Built generation request"
        );
        Ok(request)
    }

    /// Builds the report of one month.
    ///
    /// # Errors
    ///
    /// Returns an error if a shift time cannot be parsed.
    pub fn month_report(&self, year: i32, month: ScheduleMonth) -> ApiResult<MonthReport> {
        build_month_report(&self.store, &self.shifts, year, month)
    }

    /// Summarizes every stored month.
    #[must_use]
    pub fn overview(&self) -> Vec<MonthStatus> {
        build_overview(&self.store)
    }

    fn refresh(&mut self) {
        if self.store.schedules().is_empty() {
            return;
        }
        self.store.refresh_rosters(&self.employees, self.shifts.len());
    }
}
