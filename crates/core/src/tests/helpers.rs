// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use yearsched_domain::{
    DailyWeekSchedule, DaySchedule, DayScheduleHandle, DayType, MonthDay, ScheduleCatalog,
    WeekSchedule, YearDescription,
};

pub fn md(month: u8, day: u8) -> MonthDay {
    MonthDay::new(month, day).unwrap()
}

pub fn year(calendar_year: i32) -> YearDescription {
    YearDescription::new(calendar_year).unwrap()
}

/// Adds one constant day schedule per name and returns their handles.
pub fn add_day_schedules(catalog: &mut ScheduleCatalog, names: &[&str]) -> Vec<DayScheduleHandle> {
    names
        .iter()
        .map(|name| catalog.add_day_schedule(DaySchedule::constant(name, 1.0)))
        .collect()
}

/// A daily week schedule using `weekdays` Monday to Friday and `weekends`
/// on Saturday and Sunday.
pub fn daily_week(name: &str, weekdays: &str, weekends: &str) -> DailyWeekSchedule {
    let mut week: DailyWeekSchedule = DailyWeekSchedule::new(name);
    for day_type in DayType::WEEKDAYS {
        let day_schedule: &str = match day_type {
            DayType::Saturday | DayType::Sunday => weekends,
            _ => weekdays,
        };
        week = week.with(day_type, day_schedule);
    }
    week
}

/// A catalog with "Weekday", "Weekend", "Holiday A" and "Holiday B" day
/// schedules and an "Office Week" week schedule.
pub fn office_catalog() -> ScheduleCatalog {
    let mut catalog: ScheduleCatalog = ScheduleCatalog::new();
    add_day_schedules(
        &mut catalog,
        &["Weekday", "Weekend", "Holiday A", "Holiday B"],
    );
    catalog.add_week_schedule(WeekSchedule::Daily(daily_week(
        "Office Week",
        "Weekday",
        "Weekend",
    )));
    catalog
}
