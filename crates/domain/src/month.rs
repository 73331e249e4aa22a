// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Checked 0-based month index used to key schedules within a year.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Month;

const CALENDAR: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

const NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A month of the year as a 0-based index (0 = January, 11 = December).
///
/// Construction is checked, so a `ScheduleMonth` is always a valid index
/// into a year's 12 month slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ScheduleMonth(u8);

impl ScheduleMonth {
    /// All months of the year in order.
    pub const ALL: [Self; 12] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
        Self(11),
    ];

    /// Creates a new `ScheduleMonth`.
    ///
    /// # Arguments
    ///
    /// * `index` - The 0-based month index
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if `index` is above 11.
    pub const fn new(index: u8) -> Result<Self, DomainError> {
        if index > 11 {
            return Err(DomainError::InvalidMonth(index));
        }
        Ok(Self(index))
    }

    /// Returns the 0-based index.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the index as a slot position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the English month name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Returns the calendar month.
    #[must_use]
    pub const fn calendar(self) -> Month {
        CALENDAR[self.index()]
    }

    /// Returns the number of days in this month of `year`.
    #[must_use]
    pub const fn days_in(self, year: i32) -> u8 {
        match self.calendar() {
            Month::February => {
                if time::util::is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// Returns the following month, rolling December over into January of
    /// the next year.
    #[must_use]
    pub const fn next_in(self, year: i32) -> (i32, Self) {
        if self.0 == 11 {
            (year + 1, Self(0))
        } else {
            (year, Self(self.0 + 1))
        }
    }

    /// Returns the preceding month, rolling January back into December of
    /// the previous year.
    #[must_use]
    pub const fn previous_in(self, year: i32) -> (i32, Self) {
        if self.0 == 0 {
            (year - 1, Self(11))
        } else {
            (year, Self(self.0 - 1))
        }
    }
}

impl TryFrom<u8> for ScheduleMonth {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScheduleMonth> for u8 {
    fn from(month: ScheduleMonth) -> Self {
        month.0
    }
}

impl std::fmt::Display for ScheduleMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
