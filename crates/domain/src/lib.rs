// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod catalog;
mod day_schedule;
mod day_type;
mod error;
mod ruleset;
mod schedule_year;
mod week;

#[cfg(test)]
mod tests;

// Re-export public types
pub use calendar::{DateRange, MonthDay, YearDescription};
pub use catalog::ScheduleCatalog;
pub use day_schedule::{DaySchedule, DayScheduleHandle, TimeValue};
pub use day_type::{DayType, DayTypeSelector};
pub use error::DomainError;
pub use ruleset::{ScheduleRule, ScheduleRuleset, WEEKDAYS};
pub use schedule_year::{ScheduleYear, ScheduleYearWeek};
pub use week::{
    CompactWeekEntry, CompactWeekSchedule, DailyWeekSchedule, DayScheduleLookup,
    MissingDaySchedule, ResolvedWeek, WeekAssignment, WeekSchedule,
};
