// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::TranslationError;
use crate::input::NormalizedYear;
use tracing::info;
use yearsched_domain::ScheduleYear;

/// Builds a [`ScheduleYear`] holding one `(until, week)` entry per range.
///
/// Adjacent ranges with identical weeks are kept apart.
///
/// # Errors
///
/// Returns an error if the until-dates are not strictly increasing or the
/// last range does not end on December 31.
pub fn build_schedule_year(year: &NormalizedYear) -> Result<ScheduleYear, TranslationError> {
    let mut schedule: ScheduleYear = ScheduleYear::new(&year.name);
    schedule.set_schedule_type_limits(year.schedule_type_limits.clone());

    for entry in &year.entries {
        schedule.add_week(entry.range.end(), entry.assignment.clone())?;
    }
    schedule.validate_complete()?;

    info!(
        schedule = %year.name,
        weeks = schedule.weeks().len(),
        "Built schedule year"
    );
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::input::WeekEntry;
    use yearsched_domain::{DateRange, DayScheduleHandle, DomainError, MonthDay, WeekAssignment};

    fn md(month: u8, day: u8) -> MonthDay {
        MonthDay::new(month, day).unwrap()
    }

    fn entry(start: MonthDay, end: MonthDay, name: &str) -> WeekEntry {
        WeekEntry {
            range: DateRange::new(start, end).unwrap(),
            assignment: WeekAssignment::new(name)
                .with_weekdays(DayScheduleHandle::new(0), DayScheduleHandle::new(1)),
        }
    }

    fn normalized(entries: Vec<WeekEntry>) -> NormalizedYear {
        NormalizedYear {
            name: String::from("Fallback"),
            schedule_type_limits: Some(String::from("Fraction")),
            entries,
            missing: Vec::new(),
        }
    }

    #[test]
    fn test_identical_adjacent_weeks_are_not_merged() {
        let year: NormalizedYear = normalized(vec![
            entry(MonthDay::JAN_1, md(6, 30), "Week"),
            entry(md(7, 1), MonthDay::DEC_31, "Week"),
        ]);

        let schedule: ScheduleYear = build_schedule_year(&year).unwrap();
        assert_eq!(schedule.name(), "Fallback");
        assert_eq!(schedule.schedule_type_limits(), Some("Fraction"));
        assert_eq!(schedule.end_dates(), vec![md(6, 30), MonthDay::DEC_31]);
        assert_eq!(schedule.weeks()[0].week, schedule.weeks()[1].week);
    }

    #[test]
    fn test_year_ending_early_is_rejected() {
        let year: NormalizedYear = normalized(vec![entry(MonthDay::JAN_1, md(6, 30), "Week")]);
        assert!(matches!(
            build_schedule_year(&year),
            Err(TranslationError::Domain(DomainError::IncompleteYear { .. }))
        ));
    }
}
