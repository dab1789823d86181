// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Run-level translation.
//!
//! A [`Translator`] owns the state shared by every schedule translated in
//! one run: the assumed year, the issued names and the report. A schedule
//! that fails is logged, reported and left out; the run carries on.

use crate::error::TranslationError;
use crate::input::{NormalizedYear, ScheduleYearSource};
use crate::label::LabelRegistry;
use crate::rules_to_weeks::{WeekPartition, resolve_weeks};
use crate::special_days::SpecialDaySchedules;
use crate::weeks_to_year::build_schedule_year;
use crate::year_to_rules::resolve_rules;
use tracing::{error, warn};
use yearsched_domain::{ScheduleCatalog, ScheduleRuleset, ScheduleYear, YearDescription};
use yearsched_report::TranslationReport;

/// Settings for one translation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// The year month/day pairs are resolved against. Defaults to 2009.
    pub assumed_year: YearDescription,
}

/// Which resolver handled a schedule year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    /// Every special-day category had at most one schedule.
    Ruleset,
    /// Some special-day category had more than one schedule.
    WeekFallback,
}

impl std::fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ruleset => write!(f, "ruleset"),
            Self::WeekFallback => write!(f, "week fallback"),
        }
    }
}

/// The result of translating one schedule year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearTranslation {
    Ruleset(ScheduleRuleset),
    ScheduleYear(ScheduleYear),
}

impl YearTranslation {
    #[must_use]
    pub const fn path(&self) -> ResolutionPath {
        match self {
            Self::Ruleset(_) => ResolutionPath::Ruleset,
            Self::ScheduleYear(_) => ResolutionPath::WeekFallback,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ruleset(ruleset) => ruleset.name(),
            Self::ScheduleYear(schedule) => schedule.name(),
        }
    }

    #[must_use]
    pub const fn as_ruleset(&self) -> Option<&ScheduleRuleset> {
        match self {
            Self::Ruleset(ruleset) => Some(ruleset),
            Self::ScheduleYear(_) => None,
        }
    }

    #[must_use]
    pub const fn as_schedule_year(&self) -> Option<&ScheduleYear> {
        match self {
            Self::Ruleset(_) => None,
            Self::ScheduleYear(schedule) => Some(schedule),
        }
    }
}

/// Picks the resolver for a normalised year and runs it.
///
/// # Errors
///
/// Returns an error if the chosen resolver fails.
pub fn resolve_year(
    year: &NormalizedYear,
    catalog: &mut ScheduleCatalog,
    labels: &mut LabelRegistry,
) -> Result<YearTranslation, TranslationError> {
    let special_days: SpecialDaySchedules =
        SpecialDaySchedules::collect(year.entries.iter().map(|entry| &entry.assignment));

    if special_days.is_simple() {
        return Ok(YearTranslation::Ruleset(resolve_rules(
            year,
            &special_days,
            catalog,
            labels,
        )?));
    }

    warn!(
        schedule = %year.name,
        categories = ?special_days.ambiguous_categories(),
        "Special days differ between weeks, keeping schedule year"
    );
    Ok(YearTranslation::ScheduleYear(build_schedule_year(year)?))
}

/// Translates schedules for one run.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: TranslatorConfig,
    labels: LabelRegistry,
    report: TranslationReport,
}

impl Translator {
    #[must_use]
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            config,
            labels: LabelRegistry::new(),
            report: TranslationReport::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    #[must_use]
    pub const fn labels(&self) -> &LabelRegistry {
        &self.labels
    }

    #[must_use]
    pub const fn report(&self) -> &TranslationReport {
        &self.report
    }

    /// Consumes the translator, returning the run's report.
    #[must_use]
    pub fn into_report(self) -> TranslationReport {
        self.report
    }

    /// Translates one `Schedule:Year` into a ruleset, or into a schedule year
    /// when its special days are ambiguous.
    ///
    /// Unresolved day schedule references are reported as warnings and the
    /// affected slots are left to the default day schedule. The only thing
    /// written to `catalog` is the default day schedule of a new ruleset, and
    /// only once the input has been validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the source does not tile the assumed year or
    /// references an unknown week schedule. The failure is also recorded in
    /// the report.
    pub fn translate_schedule_year(
        &mut self,
        source: &ScheduleYearSource,
        catalog: &mut ScheduleCatalog,
    ) -> Result<YearTranslation, TranslationError> {
        let result: Result<YearTranslation, TranslationError> = source
            .normalize(catalog, &self.config.assumed_year)
            .and_then(|year| {
                for reference in &year.missing {
                    self.report.warning(
                        &year.name,
                        "MissingDaySchedule",
                        Some(format!(
                            "{} {} -> {}",
                            reference.week_schedule, reference.day_type, reference.day_schedule
                        )),
                    );
                }
                resolve_year(&year, catalog, &mut self.labels)
            });

        match &result {
            Ok(translation) => {
                let action: &str = match translation.path() {
                    ResolutionPath::Ruleset => "ResolvedRuleset",
                    ResolutionPath::WeekFallback => "ResolvedScheduleYear",
                };
                self.report.info(&source.name, action, None);
            }
            Err(err) => self.record_failure(&source.name, err),
        }
        result
    }

    /// Translates a ruleset into week schedules and year groups.
    ///
    /// # Errors
    ///
    /// Returns an error if the ruleset cannot be walked. The failure is also
    /// recorded in the report.
    pub fn translate_ruleset(
        &mut self,
        ruleset: &ScheduleRuleset,
    ) -> Result<WeekPartition, TranslationError> {
        let result: Result<WeekPartition, TranslationError> =
            resolve_weeks(ruleset, &self.config.assumed_year, &mut self.labels);

        match &result {
            Ok(partition) => self.report.info(
                ruleset.name(),
                "ResolvedWeekSchedules",
                Some(format!(
                    "{} weeks, {} groups",
                    partition.weeks.len(),
                    partition.groups.len()
                )),
            ),
            Err(err) => self.record_failure(ruleset.name(), err),
        }
        result
    }

    /// Translates every source, skipping the ones that fail.
    pub fn translate_schedule_years(
        &mut self,
        sources: &[ScheduleYearSource],
        catalog: &mut ScheduleCatalog,
    ) -> Vec<YearTranslation> {
        sources
            .iter()
            .filter_map(|source| self.translate_schedule_year(source, catalog).ok())
            .collect()
    }

    /// Translates every ruleset, skipping the ones that fail.
    pub fn translate_rulesets(&mut self, rulesets: &[ScheduleRuleset]) -> Vec<WeekPartition> {
        rulesets
            .iter()
            .filter_map(|ruleset| self.translate_ruleset(ruleset).ok())
            .collect()
    }

    fn record_failure(&mut self, schedule: &str, err: &TranslationError) {
        error!(schedule, error = %err, "Translation failed, schedule omitted");
        self.report
            .error(schedule, err.kind(), Some(err.to_string()));
    }
}
