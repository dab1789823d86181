// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-range rule lookup keyed by day schedule identity.
//!
//! A scope lives for exactly one date range. Within it, every weekday that
//! uses the same day schedule handle shares one rule; a fresh scope is opened
//! for the next range, so a day schedule that recurs later in the year gets a
//! new rule there.

use std::collections::HashMap;
use time::Weekday;
use tracing::debug;
use yearsched_domain::{DateRange, DayScheduleHandle, ScheduleRule};

/// The rules created while scanning one date range, in creation order.
#[derive(Debug, Clone)]
pub struct RuleScope {
    /// The range every rule in this scope covers.
    range: DateRange,
    /// Rule position by day schedule identity.
    by_day_schedule: HashMap<DayScheduleHandle, usize>,
    /// The rules in creation order.
    rules: Vec<ScheduleRule>,
}

impl RuleScope {
    #[must_use]
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            by_day_schedule: HashMap::new(),
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the rule for `day_schedule`, creating it on first sight.
    ///
    /// `name` is only called when a rule is created, so names are drawn in
    /// creation order.
    pub fn get_or_create_rule(
        &mut self,
        day_schedule: DayScheduleHandle,
        name: impl FnOnce() -> String,
    ) -> &mut ScheduleRule {
        if let Some(position) = self.by_day_schedule.get(&day_schedule).copied() {
            return &mut self.rules[position];
        }

        let rule: ScheduleRule = ScheduleRule::new(&name(), self.range, day_schedule);
        debug!(rule = rule.name(), %day_schedule, range = %self.range, "Created rule");
        self.by_day_schedule.insert(day_schedule, self.rules.len());
        self.rules.push(rule);
        let last: usize = self.rules.len() - 1;
        &mut self.rules[last]
    }

    /// Marks `weekday` on the rule for `day_schedule`.
    pub fn apply(
        &mut self,
        weekday: Weekday,
        day_schedule: DayScheduleHandle,
        name: impl FnOnce() -> String,
    ) {
        self.get_or_create_rule(day_schedule, name)
            .set_apply(weekday, true);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consumes the scope, returning its rules in creation order.
    #[must_use]
    pub fn into_rules(self) -> Vec<ScheduleRule> {
        self.rules
    }
}
