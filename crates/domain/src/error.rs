// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::MonthDay;
use crate::day_type::DayType;

/// Errors that can occur while building or querying schedule domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The calendar year cannot be represented.
    InvalidCalendarYear(i32),
    /// A month/day pair does not exist in the assumed year.
    InvalidDate {
        /// The month number (1-based).
        month: u8,
        /// The day of month.
        day: u8,
        /// The assumed calendar year the date was resolved against.
        year: i32,
    },
    /// A date range ends before it starts.
    InvertedDateRange {
        /// The range start.
        start: MonthDay,
        /// The range end.
        end: MonthDay,
    },
    /// A compact week day-type token is not recognised.
    UnknownDayType(String),
    /// A rule index is outside the ruleset.
    RuleIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of rules in the ruleset.
        len: usize,
    },
    /// A special-day operation was given a weekday slot.
    NotASpecialDay(DayType),
    /// A day schedule handle or name is not present in the catalog.
    DayScheduleNotFound(String),
    /// Schedule year until-dates must be strictly increasing.
    NonIncreasingUntilDate {
        /// The last accepted until-date.
        previous: MonthDay,
        /// The rejected until-date.
        until: MonthDay,
    },
    /// A schedule year does not end on December 31.
    IncompleteYear {
        /// The last until-date present, if any.
        last: Option<MonthDay>,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCalendarYear(year) => write!(f, "Invalid calendar year: {year}"),
            Self::InvalidDate { month, day, year } => {
                write!(f, "Invalid date: month {month}, day {day} in year {year}")
            }
            Self::InvertedDateRange { start, end } => {
                write!(f, "Date range ends ({end}) before it starts ({start})")
            }
            Self::UnknownDayType(token) => write!(f, "Unknown day type: '{token}'"),
            Self::RuleIndexOutOfRange { index, len } => {
                write!(
                    f,
                    "Rule index {index} is out of range for a ruleset with {len} rules"
                )
            }
            Self::NotASpecialDay(day_type) => {
                write!(f, "{day_type} is not a special-day category")
            }
            Self::DayScheduleNotFound(what) => write!(f, "Day schedule not found: {what}"),
            Self::NonIncreasingUntilDate { previous, until } => {
                write!(
                    f,
                    "Until-date {until} does not follow the previous until-date {previous}"
                )
            }
            Self::IncompleteYear { last } => match last {
                Some(last) => write!(f, "Schedule year ends on {last} instead of Dec31"),
                None => write!(f, "Schedule year has no weeks"),
            },
        }
    }
}

impl std::error::Error for DomainError {}
