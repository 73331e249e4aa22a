// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire records exchanged with the accounts and engine API.
//!
//! Records mirror the server's snake-case JSON and are converted into domain
//! types before anything reaches the store.

use crate::error::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shiftboard::ScheduleEntry;
use shiftboard_domain::{
    Employee, EmployeeId, RawSchedule, ScheduleId, ScheduleMonth, Shift, ShiftId,
};

/// An employee as listed by `accounts/{id}/employees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee identifier.
    pub employee_id: EmployeeId,
    /// The employee name.
    pub employee_name: String,
    /// Minimum monthly work hours.
    #[serde(default)]
    pub min_work_hours: Option<u32>,
    /// Maximum monthly work hours.
    #[serde(default)]
    pub max_work_hours: Option<u32>,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.employee_id,
            name: record.employee_name,
            min_work_hours: record.min_work_hours,
            max_work_hours: record.max_work_hours,
        }
    }
}

/// A shift as listed by `accounts/{id}/shifts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The shift identifier.
    pub shift_id: ShiftId,
    /// The shift name.
    pub shift_name: String,
    /// Start time.
    pub start_time: String,
    /// End time.
    pub end_time: String,
}

impl From<ShiftRecord> for Shift {
    fn from(record: ShiftRecord) -> Self {
        Self {
            id: record.shift_id,
            name: record.shift_name,
            start_time: record.start_time,
            end_time: record.end_time,
        }
    }
}

/// A stored schedule as returned by the schedules endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// The owning account, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    /// The schedule identifier.
    pub schedule_id: ScheduleId,
    /// The 0-based month index.
    pub month: u8,
    /// The schedule year.
    pub year: i32,
    /// Employee IDs per day and shift.
    pub schedule: RawSchedule,
}

impl ScheduleRecord {
    /// Converts this record into a store entry.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the month index is out of range.
    pub fn into_entry(self) -> ApiResult<ScheduleEntry> {
        let month: ScheduleMonth = ScheduleMonth::new(self.month)?;
        Ok(ScheduleEntry::new(
            self.schedule_id,
            self.year,
            month,
            self.schedule,
        ))
    }
}

/// Parameters of a generation request to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateScheduleRequest {
    /// The requesting account.
    pub account_id: i64,
    /// The schedule year.
    pub year: i32,
    /// The 0-based month index.
    pub month: u8,
    /// Number of shifts configured per day.
    pub num_shifts_per_day: usize,
    /// Number of days in the month.
    pub num_days: u8,
    /// The schedule being overwritten, for a regeneration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<ScheduleId>,
}

/// Decodes a response body, surfacing server error bodies as
/// `ApiError::Remote`.
///
/// The API reports failures as `{"error": ...}` or `{"detail": ...}`; a null
/// `detail` carries no message and is treated as an empty answer.
///
/// # Arguments
///
/// * `payload` - Name of the payload, for error messages
/// * `body` - The raw JSON body
///
/// # Errors
///
/// Returns an error if the body is not JSON, is an error body, or does not
/// match `T`.
pub fn open_envelope<T: DeserializeOwned>(payload: &'static str, body: &str) -> ApiResult<T> {
    let value: Value = serde_json::from_str(body).map_err(|err| ApiError::Malformed {
        payload,
        message: err.to_string(),
    })?;

    if let Some(object) = value.as_object() {
        let reported: Option<&Value> = object
            .get("error")
            .or_else(|| object.get("detail"))
            .filter(|message| !message.is_null());
        if let Some(message) = reported {
            let message: String = message
                .as_str()
                .map_or_else(|| message.to_string(), str::to_string);
            return Err(ApiError::Remote { message });
        }
    }

    serde_json::from_value(value).map_err(|err| ApiError::Malformed {
        payload,
        message: err.to_string(),
    })
}
