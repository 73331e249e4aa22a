// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, Employee, RawSchedule, ScheduleMonth, Shift, validate_employee_roster,
    validate_raw_schedule, validate_shift_roster,
};

fn april() -> ScheduleMonth {
    ScheduleMonth::new(3).unwrap()
}

#[test]
fn test_validate_raw_schedule_accepts_distant_years() {
    let raw: RawSchedule = RawSchedule::new(vec![vec![vec![1]]]);
    assert!(validate_raw_schedule(&raw, 1850, april()).is_ok());
    assert!(validate_raw_schedule(&raw, 2201, april()).is_ok());
}

#[test]
fn test_validate_raw_schedule_accepts_ragged_days() {
    let raw: RawSchedule = RawSchedule::new(vec![vec![vec![1], vec![2]], vec![vec![1]]]);
    assert!(validate_raw_schedule(&raw, 2024, april()).is_ok());
}

#[test]
fn test_validate_raw_schedule_rejects_empty_schedule() {
    let raw: RawSchedule = RawSchedule::default();
    assert_eq!(
        validate_raw_schedule(&raw, 2024, april()),
        Err(DomainError::EmptySchedule {
            year: 2024,
            month: 3
        })
    );
}

#[test]
fn test_validate_raw_schedule_rejects_more_days_than_month() {
    let raw: RawSchedule = RawSchedule::new(vec![vec![vec![1]]; 31]);
    assert_eq!(
        validate_raw_schedule(&raw, 2024, april()),
        Err(DomainError::TooManyDays { days: 31, max: 30 })
    );

    let raw: RawSchedule = RawSchedule::new(vec![vec![vec![1]]; 30]);
    assert!(validate_raw_schedule(&raw, 2024, april()).is_ok());
}

#[test]
fn test_validate_raw_schedule_rejects_day_without_shifts() {
    let raw: RawSchedule = RawSchedule::new(vec![vec![vec![1]], vec![]]);
    assert_eq!(
        validate_raw_schedule(&raw, 2024, april()),
        Err(DomainError::EmptyDay { day: 1 })
    );
}

#[test]
fn test_validate_raw_schedule_allows_unstaffed_shift() {
    let raw: RawSchedule = RawSchedule::new(vec![vec![vec![]]]);
    assert!(validate_raw_schedule(&raw, 2024, april()).is_ok());
}

#[test]
fn test_validate_employee_roster_accepts_unique_ids() {
    let roster: Vec<Employee> = vec![
        Employee::new(1, "A", None, None),
        Employee::new(2, "B", Some(10), Some(10)),
    ];
    assert!(validate_employee_roster(&roster).is_ok());
    assert!(validate_employee_roster(&[]).is_ok());
}

#[test]
fn test_validate_employee_roster_rejects_duplicate_ids() {
    let roster: Vec<Employee> = vec![
        Employee::new(1, "A", None, None),
        Employee::new(1, "B", None, None),
    ];
    assert_eq!(
        validate_employee_roster(&roster),
        Err(DomainError::DuplicateEmployeeId(1))
    );
}

#[test]
fn test_validate_employee_roster_rejects_blank_names() {
    let roster: Vec<Employee> = vec![Employee::new(3, "  ", None, None)];
    assert_eq!(
        validate_employee_roster(&roster),
        Err(DomainError::InvalidEmployeeName { employee_id: 3 })
    );
}

#[test]
fn test_validate_employee_roster_rejects_inverted_bounds() {
    let roster: Vec<Employee> = vec![Employee::new(3, "C", Some(50), Some(40))];
    assert_eq!(
        validate_employee_roster(&roster),
        Err(DomainError::InvalidWorkHourBounds {
            employee_id: 3,
            min: 50,
            max: 40
        })
    );
}

#[test]
fn test_validate_shift_roster() {
    let shifts: Vec<Shift> = vec![
        Shift::new(1, "Day", "07:00", "15:00"),
        Shift::new(2, "Night", "23:00", "07:00"),
    ];
    assert!(validate_shift_roster(&shifts).is_ok());

    let duplicated: Vec<Shift> = vec![
        Shift::new(1, "Day", "07:00", "15:00"),
        Shift::new(1, "Late", "15:00", "23:00"),
    ];
    assert_eq!(
        validate_shift_roster(&duplicated),
        Err(DomainError::DuplicateShiftId(1))
    );

    let unnamed: Vec<Shift> = vec![Shift::new(4, "", "07:00", "15:00")];
    assert_eq!(
        validate_shift_roster(&unnamed),
        Err(DomainError::InvalidShiftName { shift_id: 4 })
    );

    let broken: Vec<Shift> = vec![Shift::new(5, "Broken", "noon", "15:00")];
    assert!(matches!(
        validate_shift_roster(&broken),
        Err(DomainError::InvalidShiftTime { .. })
    ));
}
