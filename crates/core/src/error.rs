// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;
use yearsched_domain::{DomainError, MonthDay};

/// Which end of the year a boundary check concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The first group must start on January 1.
    Start,
    /// The last group must end on December 31.
    End,
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Errors that abort the translation of one schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The schedule has no week groups.
    #[error("Schedule '{schedule}' has no week groups")]
    EmptySchedule {
        /// The schedule name.
        schedule: String,
    },
    /// The first group does not start on January 1 or the last does not end
    /// on December 31.
    #[error("Schedule '{schedule}' must {boundary} on {expected}, found {found}")]
    BoundaryViolation {
        /// The schedule name.
        schedule: String,
        /// Which boundary was violated.
        boundary: Boundary,
        /// The required date.
        expected: MonthDay,
        /// The date found in the input.
        found: MonthDay,
    },
    /// A group does not start the day after the previous group ends.
    #[error(
        "Schedule '{schedule}' group {index} starts on {found}, expected {expected} (gap or overlap)"
    )]
    MalformedInputRange {
        /// The schedule name.
        schedule: String,
        /// The zero-based index of the offending group.
        index: usize,
        /// The start date the group should have.
        expected: MonthDay,
        /// The start date the group has.
        found: MonthDay,
    },
    /// A group references a week schedule the catalog does not hold.
    #[error("Week schedule not found: {0}")]
    WeekScheduleNotFound(String),
    /// A calendar or model operation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl TranslationError {
    /// Returns a short name for the error kind, used in report entries.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptySchedule { .. } => "EmptySchedule",
            Self::BoundaryViolation { .. } => "BoundaryViolation",
            Self::MalformedInputRange { .. } => "MalformedInputRange",
            Self::WeekScheduleNotFound(_) => "WeekScheduleNotFound",
            Self::Domain(_) => "DomainViolation",
        }
    }
}
