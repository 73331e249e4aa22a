// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ScheduleEntry;
use shiftboard_domain::{Employee, EmployeeId, RawSchedule, ScheduleMonth};

pub fn month(index: u8) -> ScheduleMonth {
    ScheduleMonth::new(index).unwrap()
}

pub fn employee_a() -> Employee {
    Employee::new(1, "A", None, None)
}

pub fn employee_b() -> Employee {
    Employee::new(2, "B", Some(80), Some(160))
}

pub fn create_test_roster() -> Vec<Employee> {
    vec![employee_a(), employee_b()]
}

pub fn raw(days: Vec<Vec<Vec<EmployeeId>>>) -> RawSchedule {
    RawSchedule::new(days)
}

pub fn entry(
    schedule_id: i64,
    year: i32,
    month_index: u8,
    days: Vec<Vec<Vec<EmployeeId>>>,
) -> ScheduleEntry {
    ScheduleEntry::new(schedule_id, year, month(month_index), raw(days))
}
