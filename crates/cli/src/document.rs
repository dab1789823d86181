// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON schedule documents.
//!
//! A document lists day schedules, week schedules, `Schedule:Year` objects
//! and rulesets by name. The translation output is a document of the same
//! shape holding the generated objects, plus the run's report, so it can be
//! fed back in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use time::Weekday;
use yearsched::{ScheduleYearGroup, ScheduleYearSource, WeekPartition, YearGroup, YearTranslation};
use yearsched_domain::{
    CompactWeekEntry, CompactWeekSchedule, DailyWeekSchedule, DateRange, DaySchedule,
    DayScheduleHandle, DayScheduleLookup, DayType, DayTypeSelector, DomainError, MonthDay,
    ScheduleCatalog, ScheduleRule, ScheduleRuleset, ScheduleYear, TimeValue, WEEKDAYS,
    WeekAssignment, WeekSchedule, YearDescription,
};
use yearsched_report::TranslationReport;

/// Errors raised while turning a document into model objects or back.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("'{owner}' references unknown day schedule '{day_schedule}'")]
    UnknownDaySchedule { owner: String, day_schedule: String },
    #[error("Rule '{rule}' cannot apply to {day_type}; rules only apply to weekdays")]
    SpecialDayInRule { rule: String, day_type: DayType },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A complete schedule document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    /// The assumed calendar year; the CLI flag takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assumed_year: Option<i32>,
    #[serde(default)]
    pub day_schedules: Vec<DayScheduleDoc>,
    #[serde(default)]
    pub week_schedules: Vec<WeekScheduleDoc>,
    #[serde(default)]
    pub schedule_years: Vec<ScheduleYearDoc>,
    #[serde(default)]
    pub rulesets: Vec<RulesetDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayScheduleDoc {
    pub name: String,
    #[serde(default)]
    pub values: Vec<TimeValue>,
}

/// A week schedule in either source shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum WeekScheduleDoc {
    /// One day schedule name per slot, e.g. `{"Monday": "Office Day"}`.
    Daily {
        name: String,
        days: BTreeMap<DayType, String>,
    },
    /// `For:` day-type lists.
    Compact {
        name: String,
        entries: Vec<CompactEntryDoc>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactEntryDoc {
    /// E.g. `"For: Weekdays SummerDesignDay"`.
    pub day_types: String,
    pub day_schedule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleYearDoc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_type_limits: Option<String>,
    pub groups: Vec<GroupDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDoc {
    pub week_schedule: String,
    pub start_month: u8,
    pub start_day: u8,
    pub end_month: u8,
    pub end_day: u8,
}

/// A ruleset. Rules are listed highest priority first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetDoc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_type_limits: Option<String>,
    pub default_day_schedule: String,
    #[serde(default)]
    pub special_days: BTreeMap<DayType, String>,
    #[serde(default)]
    pub rules: Vec<RuleDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDoc {
    pub name: String,
    pub day_schedule: String,
    /// A day-type list such as `"Weekdays"` or `"Sunday Tuesday"`.
    pub applies_to: String,
    pub start_month: u8,
    pub start_day: u8,
    pub end_month: u8,
    pub end_day: u8,
}

/// The model objects a document describes.
#[derive(Debug, Clone)]
pub struct ScheduleModel {
    pub catalog: ScheduleCatalog,
    pub schedule_years: Vec<ScheduleYearSource>,
    pub rulesets: Vec<ScheduleRuleset>,
}

impl ScheduleDocument {
    /// Builds the catalog, the `Schedule:Year` sources and the rulesets.
    ///
    /// Day schedules get handles in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if a ruleset references an unknown day schedule,
    /// holds an invalid date, or has a rule naming a special day.
    pub fn to_model(&self) -> Result<ScheduleModel, DocumentError> {
        let mut catalog: ScheduleCatalog = ScheduleCatalog::new();
        for day in &self.day_schedules {
            catalog.add_day_schedule(DaySchedule {
                name: day.name.clone(),
                values: day.values.clone(),
            });
        }
        for week in &self.week_schedules {
            catalog.add_week_schedule(week.to_week_schedule());
        }

        let rulesets: Vec<ScheduleRuleset> = self
            .rulesets
            .iter()
            .map(|ruleset| ruleset.to_ruleset(&catalog))
            .collect::<Result<_, _>>()?;
        let schedule_years: Vec<ScheduleYearSource> = self
            .schedule_years
            .iter()
            .map(ScheduleYearDoc::to_source)
            .collect();

        Ok(ScheduleModel {
            catalog,
            schedule_years,
            rulesets,
        })
    }
}

fn lookup(
    catalog: &ScheduleCatalog,
    owner: &str,
    day_schedule: &str,
) -> Result<DayScheduleHandle, DocumentError> {
    catalog
        .find_day_schedule(day_schedule)
        .ok_or_else(|| DocumentError::UnknownDaySchedule {
            owner: owner.to_string(),
            day_schedule: day_schedule.to_string(),
        })
}

fn day_schedule_name(
    catalog: &ScheduleCatalog,
    handle: DayScheduleHandle,
) -> Result<String, DocumentError> {
    Ok(catalog.day_schedule_name(handle)?.to_string())
}

impl From<(DayScheduleHandle, &DaySchedule)> for DayScheduleDoc {
    fn from((_, day_schedule): (DayScheduleHandle, &DaySchedule)) -> Self {
        Self {
            name: day_schedule.name.clone(),
            values: day_schedule.values.clone(),
        }
    }
}

impl WeekScheduleDoc {
    #[must_use]
    pub fn to_week_schedule(&self) -> WeekSchedule {
        match self {
            Self::Daily { name, days } => {
                let mut week: DailyWeekSchedule = DailyWeekSchedule::new(name);
                for (day_type, day_schedule) in days {
                    week = week.with(*day_type, day_schedule);
                }
                WeekSchedule::Daily(week)
            }
            Self::Compact { name, entries } => WeekSchedule::Compact(CompactWeekSchedule {
                name: name.clone(),
                entries: entries
                    .iter()
                    .map(|entry| CompactWeekEntry {
                        day_types: entry.day_types.clone(),
                        day_schedule: entry.day_schedule.clone(),
                    })
                    .collect(),
            }),
        }
    }

    /// Writes a generated week as a daily week schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if a slot holds a handle the catalog does not know.
    pub fn from_assignment(
        week: &WeekAssignment,
        catalog: &ScheduleCatalog,
    ) -> Result<Self, DocumentError> {
        let mut days: BTreeMap<DayType, String> = BTreeMap::new();
        for day_type in DayType::ALL {
            if let Some(handle) = week.get(day_type) {
                days.insert(day_type, day_schedule_name(catalog, handle)?);
            }
        }
        Ok(Self::Daily {
            name: week.name().to_string(),
            days,
        })
    }
}

impl GroupDoc {
    fn new(week_schedule: &str, range: DateRange) -> Self {
        Self {
            week_schedule: week_schedule.to_string(),
            start_month: range.start().month(),
            start_day: range.start().day(),
            end_month: range.end().month(),
            end_day: range.end().day(),
        }
    }
}

impl ScheduleYearDoc {
    #[must_use]
    pub fn to_source(&self) -> ScheduleYearSource {
        ScheduleYearSource {
            name: self.name.clone(),
            schedule_type_limits: self.schedule_type_limits.clone(),
            groups: self
                .groups
                .iter()
                .map(|group| {
                    ScheduleYearGroup::new(
                        &group.week_schedule,
                        (group.start_month, group.start_day),
                        (group.end_month, group.end_day),
                    )
                })
                .collect(),
        }
    }

    /// Writes a schedule year kept by the fallback path.
    ///
    /// # Errors
    ///
    /// Returns an error if an until-date does not exist in the assumed year.
    pub fn from_schedule_year(
        schedule: &ScheduleYear,
        year: &YearDescription,
    ) -> Result<Self, DocumentError> {
        let ranges: Vec<DateRange> = schedule.date_ranges(year)?;
        Ok(Self {
            name: schedule.name().to_string(),
            schedule_type_limits: schedule.schedule_type_limits().map(str::to_string),
            groups: schedule
                .weeks()
                .iter()
                .zip(ranges)
                .map(|(week, range)| GroupDoc::new(week.week.name(), range))
                .collect(),
        })
    }

    /// Writes the groups generated from a ruleset.
    #[must_use]
    pub fn from_partition(partition: &WeekPartition) -> Self {
        Self {
            name: partition.schedule.clone(),
            schedule_type_limits: partition.schedule_type_limits.clone(),
            groups: partition
                .groups
                .iter()
                .map(|group: &YearGroup| GroupDoc::new(&group.week_schedule, group.range))
                .collect(),
        }
    }
}

impl RuleDoc {
    fn to_rule(&self, ruleset: &str, catalog: &ScheduleCatalog) -> Result<ScheduleRule, DocumentError> {
        let day_schedule: DayScheduleHandle = lookup(catalog, ruleset, &self.day_schedule)?;
        // Rule ranges may wrap across the year boundary
        let range: DateRange = DateRange::wrapping(
            MonthDay::new(self.start_month, self.start_day)?,
            MonthDay::new(self.end_month, self.end_day)?,
        );

        let mut weekdays: Vec<Weekday> = Vec::new();
        for selector in DayTypeSelector::parse_list(&self.applies_to)? {
            if let DayTypeSelector::Single(day_type) = selector {
                if day_type.is_special() {
                    return Err(DocumentError::SpecialDayInRule {
                        rule: self.name.clone(),
                        day_type,
                    });
                }
            }
            weekdays.extend(
                selector
                    .day_types()
                    .into_iter()
                    .filter(|day_type| !day_type.is_special())
                    .map(|day_type| WEEKDAYS[day_type.index()]),
            );
        }

        Ok(ScheduleRule::new(&self.name, range, day_schedule).applying_on(&weekdays))
    }

    fn from_rule(rule: &ScheduleRule, catalog: &ScheduleCatalog) -> Result<Self, DocumentError> {
        let applies_to: Vec<&str> = rule
            .applied_weekdays()
            .into_iter()
            .map(|weekday| DayType::from_weekday(weekday).as_str())
            .collect();
        let range: DateRange = rule.date_range();
        Ok(Self {
            name: rule.name().to_string(),
            day_schedule: day_schedule_name(catalog, rule.day_schedule())?,
            applies_to: applies_to.join(" "),
            start_month: range.start().month(),
            start_day: range.start().day(),
            end_month: range.end().month(),
            end_day: range.end().day(),
        })
    }
}

impl RulesetDoc {
    fn to_ruleset(&self, catalog: &ScheduleCatalog) -> Result<ScheduleRuleset, DocumentError> {
        let default_day_schedule: DayScheduleHandle =
            lookup(catalog, &self.name, &self.default_day_schedule)?;
        let mut ruleset: ScheduleRuleset = ScheduleRuleset::new(&self.name, default_day_schedule);
        ruleset.set_schedule_type_limits(self.schedule_type_limits.clone());

        for (day_type, day_schedule) in &self.special_days {
            ruleset.set_special_day_schedule(*day_type, lookup(catalog, &self.name, day_schedule)?)?;
        }
        // add_rule prepends, so the first listed rule has to go in last
        for rule in self.rules.iter().rev() {
            ruleset.add_rule(rule.to_rule(&self.name, catalog)?);
        }
        Ok(ruleset)
    }

    /// Writes a generated ruleset.
    ///
    /// # Errors
    ///
    /// Returns an error if the ruleset holds a handle the catalog does not know.
    pub fn from_ruleset(
        ruleset: &ScheduleRuleset,
        catalog: &ScheduleCatalog,
    ) -> Result<Self, DocumentError> {
        let mut special_days: BTreeMap<DayType, String> = BTreeMap::new();
        for day_type in DayType::SPECIAL_DAYS {
            if let Some(handle) = ruleset.explicit_special_day_schedule(day_type)? {
                special_days.insert(day_type, day_schedule_name(catalog, handle)?);
            }
        }
        Ok(Self {
            name: ruleset.name().to_string(),
            schedule_type_limits: ruleset.schedule_type_limits().map(str::to_string),
            default_day_schedule: day_schedule_name(catalog, ruleset.default_day_schedule())?,
            special_days,
            rules: ruleset
                .rules()
                .iter()
                .map(|rule| RuleDoc::from_rule(rule, catalog))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// The document written at the end of a run.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationOutput {
    /// The generated objects and every day schedule they reference.
    #[serde(flatten)]
    pub document: ScheduleDocument,
    pub report: TranslationReport,
}

impl TranslationOutput {
    /// Collects the run's results into an output document.
    ///
    /// Input week schedules are carried over so fallback schedule years keep
    /// resolving; generated week schedules are appended after them.
    ///
    /// # Errors
    ///
    /// Returns an error if a generated object references a day schedule the
    /// catalog does not hold.
    pub fn build(
        input: &ScheduleDocument,
        catalog: &ScheduleCatalog,
        year: &YearDescription,
        translations: &[YearTranslation],
        partitions: &[WeekPartition],
        report: TranslationReport,
    ) -> Result<Self, DocumentError> {
        let mut document: ScheduleDocument = ScheduleDocument {
            assumed_year: Some(year.calendar_year()),
            day_schedules: catalog.day_schedules().map(DayScheduleDoc::from).collect(),
            week_schedules: input.week_schedules.clone(),
            schedule_years: Vec::new(),
            rulesets: Vec::new(),
        };

        for translation in translations {
            match translation {
                YearTranslation::Ruleset(ruleset) => document
                    .rulesets
                    .push(RulesetDoc::from_ruleset(ruleset, catalog)?),
                YearTranslation::ScheduleYear(schedule) => document
                    .schedule_years
                    .push(ScheduleYearDoc::from_schedule_year(schedule, year)?),
            }
        }

        for partition in partitions {
            for week in &partition.weeks {
                document
                    .week_schedules
                    .push(WeekScheduleDoc::from_assignment(week, catalog)?);
            }
            document
                .schedule_years
                .push(ScheduleYearDoc::from_partition(partition));
        }

        Ok(Self { document, report })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use yearsched::{Translator, TranslatorConfig};

    const OFFICE: &str = r#"{
        "day_schedules": [
            { "name": "Off" },
            { "name": "Office Day", "values": [
                { "until_minute": 480, "value": 0.0 },
                { "until_minute": 1080, "value": 1.0 },
                { "until_minute": 1440, "value": 0.0 }
            ] },
            { "name": "Closed", "values": [{ "until_minute": 1440, "value": 0.0 }] },
            { "name": "Holiday" }
        ],
        "week_schedules": [
            { "shape": "daily", "name": "Office Week", "days": {
                "Sunday": "Closed", "Monday": "Office Day", "Tuesday": "Office Day",
                "Wednesday": "Office Day", "Thursday": "Office Day", "Friday": "Office Day",
                "Saturday": "Closed", "Holiday": "Holiday"
            } },
            { "shape": "compact", "name": "Compact Week", "entries": [
                { "day_types": "For: Weekdays", "day_schedule": "Office Day" },
                { "day_types": "For: AllOtherDays", "day_schedule": "Closed" }
            ] }
        ],
        "schedule_years": [
            { "name": "Office Occupancy", "schedule_type_limits": "Fraction", "groups": [
                { "week_schedule": "Office Week", "start_month": 1, "start_day": 1,
                  "end_month": 12, "end_day": 31 }
            ] }
        ],
        "rulesets": [
            { "name": "Office Lights", "schedule_type_limits": "OnOff",
              "default_day_schedule": "Off",
              "special_days": { "Holiday": "Holiday" },
              "rules": [
                { "name": "Workdays", "day_schedule": "Office Day", "applies_to": "Weekdays",
                  "start_month": 1, "start_day": 1, "end_month": 12, "end_day": 31 },
                { "name": "Weekend", "day_schedule": "Closed", "applies_to": "Saturday Sunday",
                  "start_month": 1, "start_day": 1, "end_month": 12, "end_day": 31 }
              ] }
        ]
    }"#;

    fn office_document() -> ScheduleDocument {
        serde_json::from_str(OFFICE).unwrap()
    }

    #[test]
    fn test_document_parses_both_week_shapes() {
        let document: ScheduleDocument = office_document();
        assert_eq!(document.assumed_year, None);
        assert_eq!(document.day_schedules.len(), 4);
        assert!(document.day_schedules[0].values.is_empty());
        assert!(matches!(
            &document.week_schedules[0],
            WeekScheduleDoc::Daily { days, .. } if days.len() == 8
        ));
        assert!(matches!(
            &document.week_schedules[1],
            WeekScheduleDoc::Compact { entries, .. } if entries.len() == 2
        ));
    }

    #[test]
    fn test_model_keeps_listed_rule_priority() {
        let model: ScheduleModel = office_document().to_model().unwrap();
        assert_eq!(model.catalog.day_schedule_count(), 4);
        assert_eq!(model.schedule_years[0].groups.len(), 1);

        let ruleset: &ScheduleRuleset = &model.rulesets[0];
        assert_eq!(ruleset.rule_index("Workdays"), Some(0));
        assert_eq!(ruleset.rule_index("Weekend"), Some(1));
        assert_eq!(ruleset.holiday_schedule(), DayScheduleHandle::new(3));
        assert_eq!(
            ruleset.rules()[1].applied_weekdays(),
            vec![Weekday::Sunday, Weekday::Saturday]
        );
    }

    #[test]
    fn test_unknown_day_schedule_is_rejected() {
        let mut document: ScheduleDocument = office_document();
        document.rulesets[0].default_day_schedule = String::from("Dim");
        let err: DocumentError = document.to_model().unwrap_err();
        assert_eq!(
            err.to_string(),
            "'Office Lights' references unknown day schedule 'Dim'"
        );
    }

    #[test]
    fn test_rule_naming_special_day_is_rejected() {
        let mut document: ScheduleDocument = office_document();
        document.rulesets[0].rules[0].applies_to = String::from("Monday Holiday");
        assert!(matches!(
            document.to_model(),
            Err(DocumentError::SpecialDayInRule {
                day_type: DayType::Holiday,
                ..
            })
        ));
    }

    #[test]
    fn test_all_days_rule_covers_the_week() {
        let mut document: ScheduleDocument = office_document();
        document.rulesets[0].rules[0].applies_to = String::from("AllDays");
        let model: ScheduleModel = document.to_model().unwrap();
        assert_eq!(model.rulesets[0].rules()[0].applied_weekdays().len(), 7);
    }

    #[test]
    fn test_output_can_be_read_back() {
        let document: ScheduleDocument = office_document();
        let mut model: ScheduleModel = document.to_model().unwrap();
        let year: YearDescription = YearDescription::default();
        let mut translator: Translator = Translator::new(TranslatorConfig { assumed_year: year });

        let translations: Vec<YearTranslation> =
            translator.translate_schedule_years(&model.schedule_years, &mut model.catalog);
        let partitions: Vec<WeekPartition> = translator.translate_rulesets(&model.rulesets);
        let output: TranslationOutput = TranslationOutput::build(
            &document,
            &model.catalog,
            &year,
            &translations,
            &partitions,
            translator.into_report(),
        )
        .unwrap();

        assert_eq!(output.document.assumed_year, Some(2009));
        // The new ruleset's default day schedule is written out
        assert_eq!(output.document.day_schedules.len(), 5);
        assert_eq!(output.document.rulesets[0].name, "Office Occupancy");
        assert_eq!(
            output.document.rulesets[0].default_day_schedule,
            "Office Occupancy Default"
        );
        assert_eq!(
            output.document.rulesets[0].special_days.get(&DayType::Holiday),
            Some(&String::from("Holiday"))
        );
        assert_eq!(output.document.schedule_years[0].name, "Office Lights");
        assert_eq!(output.document.schedule_years[0].groups.len(), 2);
        assert_eq!(
            output.document.schedule_years[0].schedule_type_limits.as_deref(),
            Some("OnOff")
        );
        assert_eq!(
            output.document.rulesets[0].schedule_type_limits.as_deref(),
            Some("Fraction")
        );
        assert_eq!(output.document.week_schedules.len(), 4);
        assert_eq!(output.report.entries().len(), 2);

        let json: String = serde_json::to_string(&output).unwrap();
        let reread: ScheduleDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(reread, output.document);
        assert!(reread.to_model().is_ok());
    }
}
