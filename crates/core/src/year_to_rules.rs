// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Builds a [`ScheduleRuleset`] from a normalised schedule year.

use crate::error::TranslationError;
use crate::input::NormalizedYear;
use crate::label::{LabelRegistry, week_rule_label};
use crate::rule_scope::RuleScope;
use crate::special_days::SpecialDaySchedules;
use tracing::{debug, info};
use yearsched_domain::{
    DaySchedule, DayScheduleHandle, DayScheduleLookup, DayType, ScheduleCatalog, ScheduleRule,
    ScheduleRuleset, WEEKDAYS,
};

/// Resolves a schedule year into a ruleset.
///
/// Each date range gets its own [`RuleScope`]: the weekdays of a range that
/// share a day schedule share one rule, named with the range label. Rules are
/// added in creation order, so the rule created last ends up at index 0.
/// Weekdays without a day schedule get no rule and fall through to a new,
/// empty default day schedule named `"<schedule> Default"`, suffixed when a
/// day schedule with that name already exists.
///
/// Special-day schedules are taken from `special_days` where a category has a
/// single schedule; callers are expected to have checked
/// [`SpecialDaySchedules::is_simple`].
///
/// # Arguments
///
/// * `year` - The validated schedule year
/// * `special_days` - The special-day schedules collected from `year`
/// * `catalog` - Receives the default day schedule
/// * `labels` - The run's issued names
///
/// # Errors
///
/// Returns an error if a special-day schedule cannot be set.
pub fn resolve_rules(
    year: &NormalizedYear,
    special_days: &SpecialDaySchedules,
    catalog: &mut ScheduleCatalog,
    labels: &mut LabelRegistry,
) -> Result<ScheduleRuleset, TranslationError> {
    let mut created: Vec<ScheduleRule> = Vec::new();
    for entry in &year.entries {
        let mut scope: RuleScope = RuleScope::new(entry.range);
        for (day_type, weekday) in DayType::WEEKDAYS.into_iter().zip(WEEKDAYS) {
            let Some(day_schedule) = entry.assignment.get(day_type) else {
                debug!(
                    schedule = %year.name,
                    range = %entry.range,
                    %day_type,
                    "No day schedule, leaving weekday to the default"
                );
                continue;
            };
            scope.apply(weekday, day_schedule, || {
                labels.issue(&week_rule_label(&year.name, entry.range))
            });
        }
        created.extend(scope.into_rules());
    }

    let default_name: String = default_day_schedule_name(&year.name, catalog, labels);
    let default_day_schedule: DayScheduleHandle =
        catalog.add_day_schedule(DaySchedule::constant(&default_name, 0.0));
    let mut ruleset: ScheduleRuleset = ScheduleRuleset::new(&year.name, default_day_schedule);
    ruleset.set_schedule_type_limits(year.schedule_type_limits.clone());

    for rule in created {
        ruleset.add_rule(rule);
    }

    for day_type in DayType::SPECIAL_DAYS {
        if let Some(day_schedule) = special_days.unique(day_type) {
            ruleset.set_special_day_schedule(day_type, day_schedule)?;
        }
    }

    info!(
        schedule = %year.name,
        ranges = year.entries.len(),
        rules = ruleset.rules().len(),
        "Resolved schedule year into ruleset"
    );
    Ok(ruleset)
}

fn default_day_schedule_name(
    schedule_name: &str,
    catalog: &ScheduleCatalog,
    labels: &mut LabelRegistry,
) -> String {
    let base: String = format!("{schedule_name} Default");
    let mut name: String = labels.issue(&base);
    while catalog.find_day_schedule(&name).is_some() {
        name = labels.issue(&base);
    }
    name
}
