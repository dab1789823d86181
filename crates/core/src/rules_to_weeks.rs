// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Splits a ruleset into date-ordered week schedules.
//!
//! The year is walked one day at a time in Sunday-to-Saturday blocks. A
//! seven-slot working week holds the day schedule last seen for each weekday;
//! it starts out filled with the default day schedule and is never reset, so
//! a partial first block keeps default slots and a partial last block keeps
//! the slots of the block before it. Whenever a finished block differs from
//! the previous one a new group starts on the block's first day.

use crate::error::TranslationError;
use crate::label::{LabelRegistry, week_rule_label};
use time::{Date, Weekday};
use tracing::{debug, info};
use yearsched_domain::{
    DateRange, DayScheduleHandle, DayType, MonthDay, ScheduleRuleset, WeekAssignment,
    YearDescription,
};

/// One `(week, start, end)` group of a generated `Schedule:Year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup {
    /// The name of the week schedule in effect.
    pub week_schedule: String,
    /// The dates the group covers.
    pub range: DateRange,
}

/// The week schedules and groups a ruleset translates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPartition {
    /// The name of the translated ruleset.
    pub schedule: String,
    /// The ruleset's schedule type limits name, if any.
    pub schedule_type_limits: Option<String>,
    /// The distinct week schedules, in order of first use.
    pub weeks: Vec<WeekAssignment>,
    /// The groups in date order, tiling the year.
    pub groups: Vec<YearGroup>,
}

impl WeekPartition {
    /// Returns the week schedule with the given name.
    #[must_use]
    pub fn week(&self, name: &str) -> Option<&WeekAssignment> {
        self.weeks.iter().find(|week| week.name() == name)
    }

    /// Returns the date ranges of the groups in order.
    #[must_use]
    pub fn ranges(&self) -> Vec<DateRange> {
        self.groups.iter().map(|group| group.range).collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Block {
    start: MonthDay,
    end: MonthDay,
    days: [DayScheduleHandle; 7],
}

/// Translates a ruleset into week schedules and year groups.
///
/// Week schedules are shared between groups with the same seven weekday
/// schedules and are named after the first group that uses them.
///
/// # Arguments
///
/// * `ruleset` - The ruleset to translate
/// * `year` - The assumed year
/// * `labels` - The run's issued names
///
/// # Errors
///
/// Returns an error if a special-day schedule cannot be read or a group
/// range cannot be built.
pub fn resolve_weeks(
    ruleset: &ScheduleRuleset,
    year: &YearDescription,
    labels: &mut LabelRegistry,
) -> Result<WeekPartition, TranslationError> {
    let blocks: Vec<Block> = merged_blocks(ruleset, year);

    let mut specials: Vec<(DayType, DayScheduleHandle)> = Vec::with_capacity(5);
    for day_type in DayType::SPECIAL_DAYS {
        specials.push((day_type, ruleset.special_day_schedule(day_type)?));
    }

    let mut weeks: Vec<WeekAssignment> = Vec::new();
    let mut signatures: Vec<[DayScheduleHandle; 7]> = Vec::new();
    let mut groups: Vec<YearGroup> = Vec::with_capacity(blocks.len());
    for block in blocks {
        let range: DateRange = DateRange::new(block.start, block.end)?;
        let index: usize = signatures
            .iter()
            .position(|days| *days == block.days)
            .unwrap_or_else(|| {
                let name: String = labels.issue(&week_rule_label(ruleset.name(), range));
                let mut week: WeekAssignment = WeekAssignment::new(&name);
                for (day_type, handle) in DayType::WEEKDAYS.into_iter().zip(block.days) {
                    week.set(day_type, Some(handle));
                }
                for (day_type, handle) in &specials {
                    week.set(*day_type, Some(*handle));
                }
                debug!(schedule = ruleset.name(), week = %name, %range, "Created week schedule");
                weeks.push(week);
                signatures.push(block.days);
                weeks.len() - 1
            });

        let week_schedule: String = weeks[index].name().to_string();
        groups.push(YearGroup {
            week_schedule,
            range,
        });
    }

    info!(
        schedule = ruleset.name(),
        weeks = weeks.len(),
        groups = groups.len(),
        "Resolved ruleset into week schedules"
    );
    Ok(WeekPartition {
        schedule: ruleset.name().to_string(),
        schedule_type_limits: ruleset.schedule_type_limits().map(str::to_string),
        weeks,
        groups,
    })
}

/// Walks the year and merges consecutive blocks with the same working week.
fn merged_blocks(ruleset: &ScheduleRuleset, year: &YearDescription) -> Vec<Block> {
    let mut working: [DayScheduleHandle; 7] = [ruleset.default_day_schedule(); 7];
    let mut block_start: Date = year.first_day();
    let mut blocks: Vec<Block> = Vec::new();

    for date in year.days() {
        let slot: usize = usize::from(date.weekday().number_days_from_sunday());
        working[slot] = ruleset.day_schedule_for(date);

        if date.weekday() != Weekday::Saturday && date != year.last_day() {
            continue;
        }

        let start: MonthDay = MonthDay::from_date(block_start);
        let end: MonthDay = MonthDay::from_date(date);
        match blocks.last_mut() {
            Some(last) if last.days == working => last.end = end,
            _ => blocks.push(Block {
                start,
                end,
                days: working,
            }),
        }
        if let Some(next) = date.next_day() {
            block_start = next;
        }
    }

    blocks
}
