// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule based schedules.
//!
//! A [`ScheduleRuleset`] holds an ordered list of [`ScheduleRule`]s. The rule
//! at index 0 has the highest priority: the first rule whose date range and
//! weekday flags match a date governs that date, and dates no rule matches
//! fall through to the default day schedule. New rules are inserted at
//! index 0.

use crate::calendar::{DateRange, MonthDay, YearDescription};
use crate::day_schedule::DayScheduleHandle;
use crate::day_type::DayType;
use crate::error::DomainError;
use time::{Date, Weekday};

/// The weekdays, Sunday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// A named, date-ranged, weekday-masked pointer to one day schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRule {
    /// The rule name.
    name: String,
    /// Weekday applicability, indexed by days from Sunday.
    apply: [bool; 7],
    /// The dates this rule is active on.
    date_range: DateRange,
    /// The day schedule applied on matching dates.
    day_schedule: DayScheduleHandle,
}

impl ScheduleRule {
    /// Creates a rule that does not yet apply to any weekday.
    #[must_use]
    pub fn new(name: &str, date_range: DateRange, day_schedule: DayScheduleHandle) -> Self {
        Self {
            name: name.to_string(),
            apply: [false; 7],
            date_range,
            day_schedule,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn date_range(&self) -> DateRange {
        self.date_range
    }

    #[must_use]
    pub const fn day_schedule(&self) -> DayScheduleHandle {
        self.day_schedule
    }

    /// Returns whether the rule applies on the given weekday.
    #[must_use]
    pub fn applies_on(&self, weekday: Weekday) -> bool {
        self.apply[usize::from(weekday.number_days_from_sunday())]
    }

    /// Sets whether the rule applies on the given weekday.
    pub fn set_apply(&mut self, weekday: Weekday, apply: bool) {
        self.apply[usize::from(weekday.number_days_from_sunday())] = apply;
    }

    /// Builder form of [`ScheduleRule::set_apply`] for several weekdays.
    #[must_use]
    pub fn applying_on(mut self, weekdays: &[Weekday]) -> Self {
        for weekday in weekdays {
            self.set_apply(*weekday, true);
        }
        self
    }

    /// Returns the weekdays the rule applies on, Sunday first.
    #[must_use]
    pub fn applied_weekdays(&self) -> Vec<Weekday> {
        WEEKDAYS
            .into_iter()
            .filter(|weekday| self.applies_on(*weekday))
            .collect()
    }

    /// Returns whether the rule governs the given date.
    #[must_use]
    pub fn matches(&self, date: Date) -> bool {
        self.applies_on(date.weekday()) && self.date_range.contains(MonthDay::from_date(date))
    }
}

/// A rule based schedule covering a full year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRuleset {
    /// The schedule name.
    name: String,
    /// The schedule type limits name, if any.
    schedule_type_limits: Option<String>,
    /// The day schedule used on days no rule governs.
    default_day_schedule: DayScheduleHandle,
    /// Explicit special-day schedules, indexed by category.
    special_days: [Option<DayScheduleHandle>; 5],
    /// The rules, highest priority first.
    rules: Vec<ScheduleRule>,
}

impl ScheduleRuleset {
    /// Creates a ruleset without rules or special-day schedules.
    #[must_use]
    pub fn new(name: &str, default_day_schedule: DayScheduleHandle) -> Self {
        Self {
            name: name.to_string(),
            schedule_type_limits: None,
            default_day_schedule,
            special_days: [None; 5],
            rules: Vec::new(),
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
    pub const fn default_day_schedule(&self) -> DayScheduleHandle {
        self.default_day_schedule
    }

    /// Returns the day schedule used for a special-day category, falling back
    /// to the default day schedule when none was set.
    ///
    /// # Errors
    ///
    /// Returns an error if `day_type` is a weekday.
    pub fn special_day_schedule(&self, day_type: DayType) -> Result<DayScheduleHandle, DomainError> {
        Ok(self
            .explicit_special_day_schedule(day_type)?
            .unwrap_or(self.default_day_schedule))
    }

    /// Returns the explicitly set schedule for a special-day category.
    ///
    /// # Errors
    ///
    /// Returns an error if `day_type` is a weekday.
    pub fn explicit_special_day_schedule(
        &self,
        day_type: DayType,
    ) -> Result<Option<DayScheduleHandle>, DomainError> {
        Ok(self.special_days[special_index(day_type)?])
    }

    /// Sets the schedule for a special-day category.
    ///
    /// # Errors
    ///
    /// Returns an error if `day_type` is a weekday.
    pub fn set_special_day_schedule(
        &mut self,
        day_type: DayType,
        day_schedule: DayScheduleHandle,
    ) -> Result<(), DomainError> {
        self.special_days[special_index(day_type)?] = Some(day_schedule);
        Ok(())
    }

    /// Clears a special-day category so it falls back to the default day schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if `day_type` is a weekday.
    pub fn reset_special_day_schedule(&mut self, day_type: DayType) -> Result<(), DomainError> {
        self.special_days[special_index(day_type)?] = None;
        Ok(())
    }

    /// Returns the holiday schedule (or the default day schedule).
    #[must_use]
    pub fn holiday_schedule(&self) -> DayScheduleHandle {
        self.special_days[0].unwrap_or(self.default_day_schedule)
    }

    /// Returns the rules, highest priority first.
    #[must_use]
    pub fn rules(&self) -> &[ScheduleRule] {
        &self.rules
    }

    /// Adds a rule with the highest priority (index 0).
    pub fn add_rule(&mut self, rule: ScheduleRule) {
        self.rules.insert(0, rule);
    }

    /// Returns the index of the first rule with the given name.
    #[must_use]
    pub fn rule_index(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.name() == name)
    }

    /// Moves the rule at `from` to `to`, shifting the rules in between.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn set_rule_index(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        let len: usize = self.rules.len();
        if from >= len {
            return Err(DomainError::RuleIndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(DomainError::RuleIndexOutOfRange { index: to, len });
        }
        let rule: ScheduleRule = self.rules.remove(from);
        self.rules.insert(to, rule);
        Ok(())
    }

    /// Removes and returns the rule at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range.
    pub fn remove_rule(&mut self, index: usize) -> Result<ScheduleRule, DomainError> {
        if index >= self.rules.len() {
            return Err(DomainError::RuleIndexOutOfRange {
                index,
                len: self.rules.len(),
            });
        }
        Ok(self.rules.remove(index))
    }

    /// Returns the index of the rule governing `date`, or `None` when the
    /// default day schedule applies.
    #[must_use]
    pub fn active_rule_index(&self, date: Date) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(date))
    }

    /// Returns the day schedule governing `date`.
    #[must_use]
    pub fn day_schedule_for(&self, date: Date) -> DayScheduleHandle {
        self.active_rule_index(date)
            .map_or(self.default_day_schedule, |index| self.rules[index].day_schedule())
    }

    /// Returns the governing rule index for every day from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted or does not exist in the
    /// assumed year.
    pub fn active_rule_indices(
        &self,
        year: &YearDescription,
        start: MonthDay,
        end: MonthDay,
    ) -> Result<Vec<Option<usize>>, DomainError> {
        Ok(year
            .days_in_range(start, end)?
            .map(|date| self.active_rule_index(date))
            .collect())
    }

    /// Returns the governing day schedule for every day from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted or does not exist in the
    /// assumed year.
    pub fn day_schedules(
        &self,
        year: &YearDescription,
        start: MonthDay,
        end: MonthDay,
    ) -> Result<Vec<DayScheduleHandle>, DomainError> {
        Ok(year
            .days_in_range(start, end)?
            .map(|date| self.day_schedule_for(date))
            .collect())
    }
}

fn special_index(day_type: DayType) -> Result<usize, DomainError> {
    if day_type.is_special() {
        Ok(day_type.index() - 7)
    } else {
        Err(DomainError::NotASpecialDay(day_type))
    }
}
