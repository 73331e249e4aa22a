// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use shiftboard_domain::ScheduleMonth;

use crate::Dashboard;

pub fn month(index: u8) -> ScheduleMonth {
    ScheduleMonth::new(index).unwrap()
}

/// Alice is bounded to 16-40 hours, Bob and Carol are unbounded.
pub const EMPLOYEES_JSON: &str = r#"[
    {"employee_id": 1, "employee_name": "Alice", "min_work_hours": 16, "max_work_hours": 40},
    {"employee_id": 2, "employee_name": "Bob", "min_work_hours": null, "max_work_hours": null},
    {"employee_id": 3, "employee_name": "Carol"}
]"#;

/// Two 8-hour shifts, the second running past midnight.
pub const SHIFTS_JSON: &str = r#"[
    {"shift_id": 10, "shift_name": "Day", "start_time": "07:00:00", "end_time": "15:00:00"},
    {"shift_id": 11, "shift_name": "Night", "start_time": "23:00:00", "end_time": "07:00:00"}
]"#;

pub const THREE_SHIFTS_JSON: &str = r#"[
    {"shift_id": 10, "shift_name": "Day", "start_time": "07:00", "end_time": "15:00"},
    {"shift_id": 11, "shift_name": "Night", "start_time": "23:00", "end_time": "07:00"},
    {"shift_id": 12, "shift_name": "Swing", "start_time": "15:00", "end_time": "23:00"}
]"#;

/// March 2025 references known employees only; January 2026 references
/// employee 99, who is not on the roster.
pub const SCHEDULES_JSON: &str = r#"[
    {"account_id": 5, "schedule_id": 11, "year": 2025, "month": 2,
     "schedule": [[[1], [2]], [[3], [1]]]},
    {"account_id": 5, "schedule_id": 12, "year": 2026, "month": 0,
     "schedule": [[[1], [99]]]}
]"#;

/// A regenerated January 2026 without the missing employee.
pub const REGENERATED_JSON: &str = r#"{
    "schedule_id": 12, "year": 2026, "month": 0,
    "schedule": [[[1], [2]], [[2], [3]]]
}"#;

pub fn create_loaded_dashboard() -> Dashboard {
    let mut dashboard: Dashboard = Dashboard::new();
    dashboard.load_employees(EMPLOYEES_JSON).unwrap();
    dashboard.load_shifts(SHIFTS_JSON).unwrap();
    dashboard.load_schedules(SCHEDULES_JSON).unwrap();
    dashboard
}
