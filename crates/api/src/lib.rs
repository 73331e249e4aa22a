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

mod dashboard;
mod error;
mod parse;
mod payload;
mod report;

#[cfg(test)]
mod tests;

// Re-export public types
pub use dashboard::Dashboard;
pub use error::{ApiError, ApiResult, translate_core_error, translate_domain_error};
pub use parse::{parse_employees, parse_schedule, parse_schedules, parse_shifts};
pub use payload::{
    EmployeeRecord, GenerateScheduleRequest, ScheduleRecord, ShiftRecord, open_envelope,
};
pub use report::{
    DayReport, MonthLink, MonthReport, MonthStatus, ShiftAssignment, build_month_report,
    build_overview,
};
