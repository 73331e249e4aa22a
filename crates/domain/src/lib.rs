// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod month;
mod readiness;
mod types;
mod validation;
mod workload;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use month::ScheduleMonth;
pub use readiness::GenerationReadiness;
pub use types::{
    Employee, EmployeeId, RawSchedule, ResolvedDay, Schedule, ScheduleId, Shift, ShiftId,
};
pub use validation::{validate_employee_roster, validate_raw_schedule, validate_shift_roster};
pub use workload::{ShiftTally, WorkHoursStatus, WorkloadTally, tally_shifts, tally_work_hours};
