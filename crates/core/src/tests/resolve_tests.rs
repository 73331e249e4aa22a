// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ScheduleStore;
use crate::tests::helpers::{create_test_roster, employee_b, month};
use shiftboard_domain::Employee;

#[test]
fn test_resolve_known_employee_returns_roster_entry() {
    let mut store: ScheduleStore = ScheduleStore::new();

    let employee: Employee =
        store.resolve_employee_reference(2, &create_test_roster(), 2024, month(3));

    assert_eq!(employee, employee_b());
    assert_eq!(store, ScheduleStore::new());
}

#[test]
fn test_resolve_missing_employee_returns_unknown_and_invalidates() {
    let mut store: ScheduleStore = ScheduleStore::new();

    let employee: Employee =
        store.resolve_employee_reference(99, &create_test_roster(), 2024, month(3));

    assert_eq!(employee, Employee::unknown(99));
    assert_eq!(employee.name, "Unknown");
    // No schedule is stored yet, so the month still reads as valid.
    assert_eq!(store.validity(2024, month(3)), Some(true));

    store
        .store_or_replace_schedule(
            2024,
            month(3),
            1,
            &crate::tests::helpers::raw(vec![vec![vec![99]]]),
            &create_test_roster(),
        )
        .unwrap();
    assert_eq!(store.validity(2024, month(3)), Some(false));
}

#[test]
fn test_resolve_against_empty_roster_returns_pending_without_invalidating() {
    let mut store: ScheduleStore = ScheduleStore::new();

    let employee: Employee = store.resolve_employee_reference(99, &[], 2024, month(3));

    assert_eq!(employee, Employee::pending(99));
    assert!(employee.name.is_empty());
    assert_eq!(employee.min_work_hours, None);
    assert_eq!(employee.max_work_hours, None);
    assert_eq!(store, ScheduleStore::new());
}

#[test]
fn test_resolve_missing_employee_initializes_whole_year() {
    let mut store: ScheduleStore = ScheduleStore::new();

    store.resolve_employee_reference(99, &create_test_roster(), 2024, month(3));
    store
        .store_or_replace_schedule(
            2024,
            month(7),
            5,
            &crate::tests::helpers::raw(vec![vec![vec![1]]]),
            &create_test_roster(),
        )
        .unwrap();

    assert_eq!(store.validity(2024, month(7)), Some(true));
}
