// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{DateRange, MonthDay, YearDescription};
use crate::error::DomainError;
use crate::week::WeekAssignment;

/// One `(until date, week)` entry of a [`ScheduleYear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleYearWeek {
    /// The last day (inclusive) this week applies to.
    pub until: MonthDay,
    /// The week assignment in effect up to `until`.
    pub week: WeekAssignment,
}

/// A flat, date-ordered list of week assignments covering a year.
///
/// Each entry starts the day after the previous entry's until-date, or on
/// January 1 for the first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleYear {
    /// The schedule name.
    name: String,
    /// The schedule type limits name, if any.
    schedule_type_limits: Option<String>,
    /// The entries in ascending until-date order.
    weeks: Vec<ScheduleYearWeek>,
}

impl ScheduleYear {
    /// Creates an empty schedule year.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            schedule_type_limits: None,
            weeks: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn schedule_type_limits(&self) -> Option<&str> {
        self.schedule_type_limits.as_deref()
    }

    pub fn set_schedule_type_limits(&mut self, schedule_type_limits: Option<String>) {
        self.schedule_type_limits = schedule_type_limits;
    }

    #[must_use]
    pub fn weeks(&self) -> &[ScheduleYearWeek] {
        &self.weeks
    }

    /// Appends a week that applies up to and including `until`.
    ///
    /// # Errors
    ///
    /// Returns an error if `until` does not fall after the last until-date.
    pub fn add_week(&mut self, until: MonthDay, week: WeekAssignment) -> Result<(), DomainError> {
        if let Some(last) = self.weeks.last() {
            if until <= last.until {
                return Err(DomainError::NonIncreasingUntilDate {
                    previous: last.until,
                    until,
                });
            }
        }
        self.weeks.push(ScheduleYearWeek { until, week });
        Ok(())
    }

    /// Checks that the last entry ends on December 31.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is empty or ends early.
    pub fn validate_complete(&self) -> Result<(), DomainError> {
        match self.weeks.last() {
            Some(last) if last.until == MonthDay::DEC_31 => Ok(()),
            last => Err(DomainError::IncompleteYear {
                last: last.map(|week| week.until),
            }),
        }
    }

    /// Returns the until-dates in order.
    #[must_use]
    pub fn end_dates(&self) -> Vec<MonthDay> {
        self.weeks.iter().map(|week| week.until).collect()
    }

    /// Returns the first day of each entry in order.
    ///
    /// # Errors
    ///
    /// Returns an error if an until-date does not exist in the assumed year.
    pub fn start_dates(&self, year: &YearDescription) -> Result<Vec<MonthDay>, DomainError> {
        Ok(self
            .date_ranges(year)?
            .iter()
            .map(DateRange::start)
            .collect())
    }

    /// Returns the date range each entry covers.
    ///
    /// # Errors
    ///
    /// Returns an error if an until-date does not exist in the assumed year.
    pub fn date_ranges(&self, year: &YearDescription) -> Result<Vec<DateRange>, DomainError> {
        let mut start: MonthDay = MonthDay::JAN_1;
        let mut ranges: Vec<DateRange> = Vec::with_capacity(self.weeks.len());
        for week in &self.weeks {
            ranges.push(DateRange::new(start, week.until)?);
            start = year.next_day(week.until)?;
        }
        Ok(ranges)
    }

    /// Returns the week in effect on `date`.
    #[must_use]
    pub fn week_for(&self, date: MonthDay) -> Option<&WeekAssignment> {
        self.weeks
            .iter()
            .find(|week| date <= week.until)
            .map(|week| &week.week)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::day_schedule::DayScheduleHandle;

    fn md(month: u8, day: u8) -> MonthDay {
        MonthDay::new(month, day).unwrap()
    }

    fn week(name: &str, handle: u64) -> WeekAssignment {
        WeekAssignment::new(name).with_weekdays(
            DayScheduleHandle::new(handle),
            DayScheduleHandle::new(handle),
        )
    }

    fn two_season_year() -> ScheduleYear {
        let mut schedule: ScheduleYear = ScheduleYear::new("Year");
        schedule.add_week(md(5, 15), week("Winter", 1)).unwrap();
        schedule.add_week(md(8, 31), week("Summer", 2)).unwrap();
        schedule.add_week(MonthDay::DEC_31, week("Winter", 1)).unwrap();
        schedule
    }

    #[test]
    fn test_start_and_end_dates() {
        let year: YearDescription = YearDescription::new(2009).unwrap();
        let schedule: ScheduleYear = two_season_year();
        assert_eq!(
            schedule.start_dates(&year).unwrap(),
            vec![MonthDay::JAN_1, md(5, 16), md(9, 1)]
        );
        assert_eq!(
            schedule.end_dates(),
            vec![md(5, 15), md(8, 31), MonthDay::DEC_31]
        );
        assert!(schedule.validate_complete().is_ok());
    }

    #[test]
    fn test_week_for_date() {
        let schedule: ScheduleYear = two_season_year();
        assert_eq!(schedule.week_for(md(5, 15)).unwrap().name(), "Winter");
        assert_eq!(schedule.week_for(md(5, 16)).unwrap().name(), "Summer");
        assert_eq!(schedule.week_for(md(12, 25)).unwrap().name(), "Winter");
    }

    #[test]
    fn test_add_week_rejects_non_increasing_dates() {
        let mut schedule: ScheduleYear = ScheduleYear::new("Year");
        schedule.add_week(md(6, 30), week("A", 1)).unwrap();
        assert!(matches!(
            schedule.add_week(md(6, 30), week("B", 2)),
            Err(DomainError::NonIncreasingUntilDate { .. })
        ));
        assert!(matches!(
            schedule.validate_complete(),
            Err(DomainError::IncompleteYear { last: Some(_) })
        ));
    }

    #[test]
    fn test_empty_year_is_incomplete() {
        let schedule: ScheduleYear = ScheduleYear::new("Year");
        assert!(matches!(
            schedule.validate_complete(),
            Err(DomainError::IncompleteYear { last: None })
        ));
    }
}
