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

//! Schedule year resolution.
//!
//! Converts `Schedule:Year` week assignments into rule based schedules and
//! back:
//!
//! - [`Translator::translate_schedule_year`] turns date-ranged week schedules
//!   into a [`ScheduleRuleset`](yearsched_domain::ScheduleRuleset), or keeps
//!   them as a [`ScheduleYear`](yearsched_domain::ScheduleYear) when the
//!   special days differ between weeks.
//! - [`Translator::translate_ruleset`] splits a ruleset into week schedules
//!   and the date groups that use them.

mod error;
mod input;
mod label;
mod rule_scope;
mod rules_to_weeks;
mod special_days;
mod translator;
mod weeks_to_year;
mod year_to_rules;

#[cfg(test)]
mod tests;

pub use error::{Boundary, TranslationError};
pub use input::{
    MissingReference, NormalizedYear, ScheduleYearGroup, ScheduleYearSource, WeekEntry,
};
pub use label::{LabelRegistry, week_rule_label};
pub use rule_scope::RuleScope;
pub use rules_to_weeks::{WeekPartition, YearGroup, resolve_weeks};
pub use special_days::SpecialDaySchedules;
pub use translator::{
    ResolutionPath, Translator, TranslatorConfig, YearTranslation, resolve_year,
};
pub use weeks_to_year::build_schedule_year;
pub use year_to_rules::resolve_rules;
