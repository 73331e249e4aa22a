// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Whether the rosters allow a schedule to be generated.
///
/// Each employee works at most one shift per day, so generation needs at
/// least as many employees as shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationReadiness {
    /// No employees are registered.
    NoEmployees,
    /// No shifts are registered.
    NoShifts,
    /// Fewer employees than shifts per day.
    InsufficientEmployees {
        /// Registered employees.
        employees: usize,
        /// Registered shifts.
        shifts: usize,
    },
    /// Generation may be requested.
    Ready,
}

impl GenerationReadiness {
    /// Assesses readiness from roster sizes.
    ///
    /// # Arguments
    ///
    /// * `employees` - Number of registered employees
    /// * `shifts` - Number of registered shifts
    #[must_use]
    pub const fn assess(employees: usize, shifts: usize) -> Self {
        if employees == 0 {
            Self::NoEmployees
        } else if shifts == 0 {
            Self::NoShifts
        } else if employees < shifts {
            Self::InsufficientEmployees { employees, shifts }
        } else {
            Self::Ready
        }
    }

    /// Returns whether generation may be requested.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns a human-readable explanation for the dashboard.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoEmployees => "Please register employees first.",
            Self::NoShifts => "Please register shifts first.",
            Self::InsufficientEmployees { .. } => {
                "The number of employees is not sufficient for the number of shifts per day."
            }
            Self::Ready => "Ready to generate.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess_checks_employees_before_shifts() {
        assert_eq!(
            GenerationReadiness::assess(0, 0),
            GenerationReadiness::NoEmployees
        );
        assert_eq!(
            GenerationReadiness::assess(3, 0),
            GenerationReadiness::NoShifts
        );
    }

    #[test]
    fn test_assess_requires_one_employee_per_shift() {
        assert_eq!(
            GenerationReadiness::assess(2, 3),
            GenerationReadiness::InsufficientEmployees {
                employees: 2,
                shifts: 3
            }
        );
        assert!(GenerationReadiness::assess(3, 3).is_ready());
        assert!(!GenerationReadiness::assess(2, 3).is_ready());
    }
}
