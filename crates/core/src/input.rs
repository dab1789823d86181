// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `Schedule:Year` source records and their normalisation.
//!
//! A source schedule year is a list of extensible groups, each naming a week
//! schedule and a 1-based `(month, day)` start and end. Normalisation turns
//! the groups into date-ordered [`WeekEntry`] values and rejects inputs that
//! do not tile the year exactly.

use crate::error::{Boundary, TranslationError};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;
use yearsched_domain::{
    DateRange, DayType, MonthDay, ResolvedWeek, ScheduleCatalog,
    WeekAssignment, YearDescription,
};

/// One extensible group of a `Schedule:Year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleYearGroup {
    /// The referenced week schedule name.
    pub week_schedule: String,
    /// The first month covered (1-based).
    pub start_month: u8,
    /// The first day covered.
    pub start_day: u8,
    /// The last month covered (1-based).
    pub end_month: u8,
    /// The last day covered.
    pub end_day: u8,
}

impl ScheduleYearGroup {
    /// Creates a new group.
    ///
    /// # Arguments
    ///
    /// * `week_schedule` - The week schedule name
    /// * `start` - The `(month, day)` the group starts on
    /// * `end` - The `(month, day)` the group ends on
    #[must_use]
    pub fn new(week_schedule: &str, start: (u8, u8), end: (u8, u8)) -> Self {
        Self {
            week_schedule: week_schedule.to_string(),
            start_month: start.0,
            start_day: start.1,
            end_month: end.0,
            end_day: end.1,
        }
    }
}

/// A `Schedule:Year` as read from the source model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleYearSource {
    /// The schedule name.
    pub name: String,
    /// The schedule type limits name, if any.
    pub schedule_type_limits: Option<String>,
    /// The groups in source order.
    pub groups: Vec<ScheduleYearGroup>,
}

impl ScheduleYearSource {
    /// Creates a source without groups.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            schedule_type_limits: None,
            groups: Vec::new(),
        }
    }

    /// Appends a group, consuming and returning the source.
    #[must_use]
    pub fn with_group(mut self, week_schedule: &str, start: (u8, u8), end: (u8, u8)) -> Self {
        self.groups
            .push(ScheduleYearGroup::new(week_schedule, start, end));
        self
    }

    /// Resolves the groups against the catalog and checks that they tile the
    /// assumed year.
    ///
    /// Nothing is written to the catalog; a failure leaves no trace.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no groups
    /// - A date does not exist in the assumed year or a group is inverted
    /// - The first group does not start on January 1
    /// - A group does not start the day after the previous one ends
    /// - The last group does not end on December 31
    /// - A referenced week schedule is missing or has an unknown day type
    pub fn normalize(
        &self,
        catalog: &ScheduleCatalog,
        year: &YearDescription,
    ) -> Result<NormalizedYear, TranslationError> {
        if self.groups.is_empty() {
            return Err(TranslationError::EmptySchedule {
                schedule: self.name.clone(),
            });
        }

        let mut ranges: Vec<DateRange> = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            let start: MonthDay = MonthDay::new(group.start_month, group.start_day)?;
            let end: MonthDay = MonthDay::new(group.end_month, group.end_day)?;
            // Reject Feb29 in a non-leap assumed year
            year.resolve(start)?;
            year.resolve(end)?;
            ranges.push(DateRange::new(start, end)?);
        }

        self.check_tiling(&ranges, year)?;

        let mut resolved: HashMap<&str, ResolvedWeek> = HashMap::new();
        let mut missing: Vec<MissingReference> = Vec::new();
        let mut entries: Vec<WeekEntry> = Vec::with_capacity(ranges.len());
        for (group, range) in self.groups.iter().zip(ranges) {
            let name: &str = group.week_schedule.as_str();
            let week: &ResolvedWeek = match resolved.entry(name) {
                Entry::Occupied(occupied) => occupied.into_mut(),
                Entry::Vacant(vacant) => {
                    let week: ResolvedWeek = catalog
                        .week_schedule(name)
                        .ok_or_else(|| TranslationError::WeekScheduleNotFound(name.to_string()))?
                        .resolve(catalog)?;
                    missing.extend(week.missing.iter().map(|reference| MissingReference {
                        week_schedule: name.to_string(),
                        day_type: reference.day_type,
                        day_schedule: reference.name.clone(),
                    }));
                    vacant.insert(week)
                }
            };
            let assignment: WeekAssignment = week.assignment.clone();

            debug!(schedule = %self.name, week = name, %range, "Normalised group");
            entries.push(WeekEntry { range, assignment });
        }

        Ok(NormalizedYear {
            name: self.name.clone(),
            schedule_type_limits: self.schedule_type_limits.clone(),
            entries,
            missing,
        })
    }

    fn check_tiling(
        &self,
        ranges: &[DateRange],
        year: &YearDescription,
    ) -> Result<(), TranslationError> {
        let (Some(first), Some(last)) = (ranges.first(), ranges.last()) else {
            return Err(TranslationError::EmptySchedule {
                schedule: self.name.clone(),
            });
        };

        if first.start() != MonthDay::JAN_1 {
            return Err(TranslationError::BoundaryViolation {
                schedule: self.name.clone(),
                boundary: Boundary::Start,
                expected: MonthDay::JAN_1,
                found: first.start(),
            });
        }

        for (index, pair) in ranges.windows(2).enumerate() {
            let (previous, current) = (pair[0], pair[1]);
            let expected: MonthDay = year.next_day(previous.end())?;
            // next_day wraps Dec31 to Jan1, which is never a valid follow-on here
            if previous.end() == MonthDay::DEC_31 || current.start() != expected {
                return Err(TranslationError::MalformedInputRange {
                    schedule: self.name.clone(),
                    index: index + 1,
                    expected,
                    found: current.start(),
                });
            }
        }

        if last.end() != MonthDay::DEC_31 {
            return Err(TranslationError::BoundaryViolation {
                schedule: self.name.clone(),
                boundary: Boundary::End,
                expected: MonthDay::DEC_31,
                found: last.end(),
            });
        }

        Ok(())
    }
}

/// A week assignment together with the date range it governs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekEntry {
    /// The governed dates.
    pub range: DateRange,
    /// The week in effect over `range`.
    pub assignment: WeekAssignment,
}

/// A day schedule reference that was dropped while normalising a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReference {
    /// The week schedule holding the reference.
    pub week_schedule: String,
    /// The slot that referenced the day schedule.
    pub day_type: DayType,
    /// The unresolved day schedule name.
    pub day_schedule: String,
}

/// A validated, date-ordered schedule year ready for resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedYear {
    /// The source schedule name.
    pub name: String,
    /// The source schedule type limits name, if any.
    pub schedule_type_limits: Option<String>,
    /// The entries in ascending date order, tiling the year.
    pub entries: Vec<WeekEntry>,
    /// References dropped while normalising, one per week schedule and slot.
    pub missing: Vec<MissingReference>,
}
