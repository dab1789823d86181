// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar utilities for schedule resolution.
//!
//! Schedule dates are month/day pairs that do not carry a year. They are
//! resolved against an assumed calendar year (a [`YearDescription`]) whenever
//! a leap-day or day-of-week question has to be answered.

use crate::error::DomainError;
use time::{Date, Duration, Month, Weekday};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar-year independent date.
///
/// Ordering follows the position of the date within a year, so
/// `Jan1 < Feb29 < Mar1` regardless of whether the assumed year is a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    /// The month number, 1 through 12.
    month: u8,
    /// The day of month.
    day: u8,
}

impl MonthDay {
    /// January 1.
    pub const JAN_1: Self = Self { month: 1, day: 1 };
    /// December 31.
    pub const DEC_31: Self = Self { month: 12, day: 31 };

    /// Creates a new `MonthDay`.
    ///
    /// The day is validated against the longest form of the month, so
    /// February 29 is accepted here and only rejected when resolved against
    /// a non-leap assumed year.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is not 1 through 12 or the day does not
    /// exist in that month.
    pub fn new(month: u8, day: u8) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidDate {
            month,
            day,
            year: 2000,
        };
        let month_value: Month = Month::try_from(month).map_err(|_| invalid())?;
        // 2000 is a leap year, so every month has its longest length
        Date::from_calendar_date(2000, month_value, day).map_err(|_| invalid())?;
        Ok(Self { month, day })
    }

    /// Extracts the month and day of a resolved date.
    #[must_use]
    pub fn from_date(date: Date) -> Self {
        Self {
            month: u8::from(date.month()),
            day: date.day(),
        }
    }

    /// Returns the month number (1-based).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the three letter English month abbreviation, e.g. `"Jan"`.
    #[must_use]
    pub fn month_abbrev(&self) -> &'static str {
        MONTH_ABBREVIATIONS[usize::from(self.month - 1)]
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.month_abbrev(), self.day)
    }
}

/// The assumed calendar year used to resolve month/day pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearDescription {
    /// The calendar year (e.g., 2009).
    calendar_year: i32,
    /// January 1 of the calendar year.
    first_day: Date,
    /// December 31 of the calendar year.
    last_day: Date,
}

impl YearDescription {
    /// Creates a new `YearDescription`.
    ///
    /// # Errors
    ///
    /// Returns an error if the year cannot be represented as a calendar date.
    pub fn new(calendar_year: i32) -> Result<Self, DomainError> {
        let first_day: Date = Date::from_calendar_date(calendar_year, Month::January, 1)
            .map_err(|_| DomainError::InvalidCalendarYear(calendar_year))?;
        let last_day: Date = Date::from_calendar_date(calendar_year, Month::December, 31)
            .map_err(|_| DomainError::InvalidCalendarYear(calendar_year))?;

        Ok(Self {
            calendar_year,
            first_day,
            last_day,
        })
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn calendar_year(&self) -> i32 {
        self.calendar_year
    }

    /// Returns whether the assumed year has a February 29.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        time::util::is_leap_year(self.calendar_year)
    }

    /// Returns the number of days in the assumed year.
    #[must_use]
    pub const fn days_in_year(&self) -> u16 {
        time::util::days_in_year(self.calendar_year)
    }

    /// Returns January 1 of the assumed year.
    #[must_use]
    pub const fn first_day(&self) -> Date {
        self.first_day
    }

    /// Returns December 31 of the assumed year.
    #[must_use]
    pub const fn last_day(&self) -> Date {
        self.last_day
    }

    /// Builds a date in the assumed year from a 1-based month and a day.
    ///
    /// # Errors
    ///
    /// Returns an error if the date does not exist in the assumed year.
    pub fn make_date(&self, month: u8, day: u8) -> Result<Date, DomainError> {
        let invalid = || DomainError::InvalidDate {
            month,
            day,
            year: self.calendar_year,
        };
        let month_value: Month = Month::try_from(month).map_err(|_| invalid())?;
        Date::from_calendar_date(self.calendar_year, month_value, day).map_err(|_| invalid())
    }

    /// Resolves a month/day pair against the assumed year.
    ///
    /// # Errors
    ///
    /// Returns an error for February 29 in a non-leap year.
    pub fn resolve(&self, date: MonthDay) -> Result<Date, DomainError> {
        self.make_date(date.month, date.day)
    }

    /// Returns the day of week the month/day pair falls on in the assumed year.
    ///
    /// # Errors
    ///
    /// Returns an error if the date does not exist in the assumed year.
    pub fn day_of_week(&self, date: MonthDay) -> Result<Weekday, DomainError> {
        Ok(self.resolve(date)?.weekday())
    }

    /// Counts the days from `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if either date does not exist in the assumed year or
    /// `start` falls after `end`.
    pub fn days_between(&self, start: MonthDay, end: MonthDay) -> Result<u16, DomainError> {
        if start > end {
            return Err(DomainError::InvertedDateRange { start, end });
        }
        let start_date: Date = self.resolve(start)?;
        let end_date: Date = self.resolve(end)?;
        let days: i64 = (end_date - start_date).whole_days() + 1;
        // Bounded by the length of one year
        u16::try_from(days).map_err(|_| DomainError::InvertedDateRange { start, end })
    }

    /// Returns the day after `date`, wrapping December 31 to January 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the date does not exist in the assumed year.
    pub fn next_day(&self, date: MonthDay) -> Result<MonthDay, DomainError> {
        let resolved: Date = self.resolve(date)?;
        if resolved == self.last_day {
            return Ok(MonthDay::JAN_1);
        }
        Ok(MonthDay::from_date(resolved + Duration::days(1)))
    }

    /// Returns the day before `date`, wrapping January 1 to December 31.
    ///
    /// # Errors
    ///
    /// Returns an error if the date does not exist in the assumed year.
    pub fn previous_day(&self, date: MonthDay) -> Result<MonthDay, DomainError> {
        let resolved: Date = self.resolve(date)?;
        if resolved == self.first_day {
            return Ok(MonthDay::DEC_31);
        }
        Ok(MonthDay::from_date(resolved - Duration::days(1)))
    }

    /// Iterates every date of the assumed year in order.
    pub fn days(&self) -> impl Iterator<Item = Date> + use<> {
        let last_day: Date = self.last_day;
        std::iter::successors(Some(self.first_day), move |day| {
            day.next_day().filter(|next| *next <= last_day)
        })
    }

    /// Iterates the dates from `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if either date does not exist in the assumed year or
    /// the range is inverted.
    pub fn days_in_range(
        &self,
        start: MonthDay,
        end: MonthDay,
    ) -> Result<impl Iterator<Item = Date> + use<>, DomainError> {
        if start > end {
            return Err(DomainError::InvertedDateRange { start, end });
        }
        let first: Date = self.resolve(start)?;
        let last: Date = self.resolve(end)?;
        Ok(std::iter::successors(Some(first), move |day| {
            day.next_day().filter(|next| *next <= last)
        }))
    }
}

impl Default for YearDescription {
    fn default() -> Self {
        Self {
            calendar_year: 2009,
            first_day: time::macros::date!(2009 - 01 - 01),
            last_day: time::macros::date!(2009 - 12 - 31),
        }
    }
}

/// An inclusive range of month/day pairs.
///
/// A range whose start falls after its end wraps around the year boundary,
/// covering `start..=Dec31` and `Jan1..=end`. Only [`DateRange::wrapping`]
/// creates such ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    start: MonthDay,
    /// The last day of the range (inclusive).
    end: MonthDay,
}

impl DateRange {
    /// Creates a non-wrapping range.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` falls after `end`.
    pub fn new(start: MonthDay, end: MonthDay) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range that may wrap across December 31.
    #[must_use]
    pub const fn wrapping(start: MonthDay, end: MonthDay) -> Self {
        Self { start, end }
    }

    /// The range covering the whole year.
    #[must_use]
    pub const fn full_year() -> Self {
        Self {
            start: MonthDay::JAN_1,
            end: MonthDay::DEC_31,
        }
    }

    /// Returns the first day (inclusive).
    #[must_use]
    pub const fn start(&self) -> MonthDay {
        self.start
    }

    /// Returns the last day (inclusive).
    #[must_use]
    pub const fn end(&self) -> MonthDay {
        self.end
    }

    /// Returns whether the range wraps across the year boundary.
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Returns whether the range contains the given day.
    #[must_use]
    pub fn contains(&self, date: MonthDay) -> bool {
        if self.wraps() {
            date >= self.start || date <= self.end
        } else {
            self.start <= date && date <= self.end
        }
    }

    /// Returns the `"Jan1-Dec31"` style label of the range.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
