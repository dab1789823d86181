// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day schedules and their identity handles.
//!
//! Two day schedules are the same only when their handles are equal. The
//! time/value curve is carried for output but never used for comparison.

use serde::{Deserialize, Serialize};

/// The identity of a day schedule within one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayScheduleHandle(u64);

impl DayScheduleHandle {
    /// Wraps a raw handle value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DayScheduleHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One `until, value` step of a day schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeValue {
    /// Minutes after midnight at which this value stops applying (1 to 1440).
    pub until_minute: u16,
    /// The value applied up to `until_minute`.
    pub value: f64,
}

/// A named time-of-day value curve.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    /// The day schedule name.
    pub name: String,
    /// The time/value steps in ascending `until_minute` order.
    pub values: Vec<TimeValue>,
}

impl DaySchedule {
    /// Creates a day schedule with no values.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::new(),
        }
    }

    /// Creates a day schedule holding one value for the whole day.
    #[must_use]
    pub fn constant(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            values: vec![TimeValue {
                until_minute: 1440,
                value,
            }],
        }
    }

    /// Returns the value in effect at the given minute after midnight.
    ///
    /// Returns `None` for a schedule without values.
    #[must_use]
    pub fn value_at(&self, minute: u16) -> Option<f64> {
        self.values
            .iter()
            .find(|step| minute < step.until_minute)
            .or_else(|| self.values.last())
            .map(|step| step.value)
    }
}
