// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Week assignments and the two week-schedule source shapes.
//!
//! Week schedules arrive either as a "daily" object with one named field per
//! slot or as a "compact" object with `For:` day-type lists. Both are
//! normalised into a [`WeekAssignment`] before any resolution runs.

use crate::day_schedule::DayScheduleHandle;
use crate::day_type::{DayType, DayTypeSelector};
use crate::error::DomainError;
use tracing::warn;

/// Resolves day schedule names to handles.
pub trait DayScheduleLookup {
    /// Returns the handle of the day schedule with the given name, if any.
    fn find_day_schedule(&self, name: &str) -> Option<DayScheduleHandle>;
}

/// The day schedule assigned to each of the twelve week slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeekAssignment {
    /// The source week schedule name.
    name: String,
    /// Day schedule per slot, indexed by [`DayType::index`].
    days: [Option<DayScheduleHandle>; 12],
}

impl WeekAssignment {
    /// Creates an assignment with every slot empty.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            days: [None; 12],
        }
    }

    /// Returns the source week schedule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the day schedule for a slot.
    #[must_use]
    pub const fn get(&self, day_type: DayType) -> Option<DayScheduleHandle> {
        self.days[day_type.index()]
    }

    /// Assigns or clears the day schedule of a slot.
    pub const fn set(&mut self, day_type: DayType, day_schedule: Option<DayScheduleHandle>) {
        self.days[day_type.index()] = day_schedule;
    }

    /// Assigns a slot, consuming and returning the assignment.
    #[must_use]
    pub fn with(mut self, day_type: DayType, day_schedule: DayScheduleHandle) -> Self {
        self.set(day_type, Some(day_schedule));
        self
    }

    /// Assigns every weekday slot, consuming and returning the assignment.
    #[must_use]
    pub fn with_weekdays(
        mut self,
        weekdays: DayScheduleHandle,
        weekends: DayScheduleHandle,
    ) -> Self {
        for day_type in DayType::WEEKDAYS {
            let handle: DayScheduleHandle = match day_type {
                DayType::Saturday | DayType::Sunday => weekends,
                _ => weekdays,
            };
            self.set(day_type, Some(handle));
        }
        self
    }

    /// Returns whether both assignments map every slot to the same day schedule.
    #[must_use]
    pub fn same_days_as(&self, other: &Self) -> bool {
        self.days == other.days
    }
}

/// A day schedule name that could not be resolved while normalising a week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDaySchedule {
    /// The slot that referenced the schedule.
    pub day_type: DayType,
    /// The unresolved day schedule name.
    pub name: String,
}

/// A normalised week together with the references that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWeek {
    /// The normalised assignment. Unresolved slots are left empty.
    pub assignment: WeekAssignment,
    /// References that were dropped.
    pub missing: Vec<MissingDaySchedule>,
}

/// A week schedule with one day schedule name per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyWeekSchedule {
    /// The week schedule name.
    pub name: String,
    /// Day schedule names indexed by [`DayType::index`].
    pub day_schedules: [Option<String>; 12],
}

impl DailyWeekSchedule {
    /// Creates a daily week schedule with every slot empty.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            day_schedules: Default::default(),
        }
    }

    /// Names the day schedule for a slot, consuming and returning the week.
    #[must_use]
    pub fn with(mut self, day_type: DayType, day_schedule: &str) -> Self {
        self.day_schedules[day_type.index()] = Some(day_schedule.to_string());
        self
    }
}

/// One `For: ...` line of a compact week schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactWeekEntry {
    /// The day-type list, e.g. `"For: Weekdays SummerDesignDay"`.
    pub day_types: String,
    /// The day schedule name applied to those day types.
    pub day_schedule: String,
}

/// A week schedule expressed as day-type lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactWeekSchedule {
    /// The week schedule name.
    pub name: String,
    /// The entries in source order.
    pub entries: Vec<CompactWeekEntry>,
}

/// A week schedule in either source shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekSchedule {
    Daily(DailyWeekSchedule),
    Compact(CompactWeekSchedule),
}

impl WeekSchedule {
    /// Returns the week schedule name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Daily(week) => &week.name,
            Self::Compact(week) => &week.name,
        }
    }

    /// Normalises the week into a [`WeekAssignment`].
    ///
    /// Day schedule names that the lookup cannot resolve leave their slot
    /// empty and are reported in [`ResolvedWeek::missing`].
    ///
    /// # Errors
    ///
    /// Returns an error if a compact day-type list contains an unknown token.
    pub fn resolve(&self, lookup: &impl DayScheduleLookup) -> Result<ResolvedWeek, DomainError> {
        match self {
            Self::Daily(week) => Ok(resolve_daily(week, lookup)),
            Self::Compact(week) => resolve_compact(week, lookup),
        }
    }
}

fn resolve_daily(week: &DailyWeekSchedule, lookup: &impl DayScheduleLookup) -> ResolvedWeek {
    let mut assignment: WeekAssignment = WeekAssignment::new(&week.name);
    let mut missing: Vec<MissingDaySchedule> = Vec::new();

    for day_type in DayType::ALL {
        if let Some(name) = &week.day_schedules[day_type.index()] {
            let handle: Option<DayScheduleHandle> =
                lookup_or_record(&week.name, day_type, name, lookup, &mut missing);
            assignment.set(day_type, handle);
        }
    }

    ResolvedWeek {
        assignment,
        missing,
    }
}

fn resolve_compact(
    week: &CompactWeekSchedule,
    lookup: &impl DayScheduleLookup,
) -> Result<ResolvedWeek, DomainError> {
    let mut assignment: WeekAssignment = WeekAssignment::new(&week.name);
    let mut missing: Vec<MissingDaySchedule> = Vec::new();
    // A slot counts as assigned once named, even if its schedule is missing
    let mut assigned: [bool; 12] = [false; 12];

    for entry in &week.entries {
        let selectors: Vec<DayTypeSelector> = DayTypeSelector::parse_list(&entry.day_types)?;
        for selector in selectors {
            let targets: Vec<DayType> = selector
                .day_types()
                .into_iter()
                .filter(|day_type| {
                    selector != DayTypeSelector::AllOtherDays || !assigned[day_type.index()]
                })
                .collect();

            for day_type in targets {
                let handle: Option<DayScheduleHandle> = lookup_or_record(
                    &week.name,
                    day_type,
                    &entry.day_schedule,
                    lookup,
                    &mut missing,
                );
                assignment.set(day_type, handle);
                assigned[day_type.index()] = true;
            }
        }
    }

    Ok(ResolvedWeek {
        assignment,
        missing,
    })
}

fn lookup_or_record(
    week_name: &str,
    day_type: DayType,
    day_schedule: &str,
    lookup: &impl DayScheduleLookup,
    missing: &mut Vec<MissingDaySchedule>,
) -> Option<DayScheduleHandle> {
    let handle: Option<DayScheduleHandle> = lookup.find_day_schedule(day_schedule);
    if handle.is_none() {
        warn!(
            week = week_name,
            %day_type,
            day_schedule,
            "Day schedule not found, leaving slot unassigned"
        );
        missing.push(MissingDaySchedule {
            day_type,
            name: day_schedule.to_string(),
        });
    }
    handle
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::collections::HashMap;

    struct MapLookup(HashMap<&'static str, DayScheduleHandle>);

    impl DayScheduleLookup for MapLookup {
        fn find_day_schedule(&self, name: &str) -> Option<DayScheduleHandle> {
            self.0.get(name).copied()
        }
    }

    fn lookup() -> MapLookup {
        MapLookup(HashMap::from([
            ("Weekday", DayScheduleHandle::new(1)),
            ("Weekend", DayScheduleHandle::new(2)),
            ("Holiday", DayScheduleHandle::new(3)),
            ("Design", DayScheduleHandle::new(4)),
        ]))
    }

    #[test]
    fn test_daily_week_resolves_each_named_slot() {
        let week: WeekSchedule = WeekSchedule::Daily(
            DailyWeekSchedule::new("Week")
                .with(DayType::Sunday, "Weekend")
                .with(DayType::Monday, "Weekday")
                .with(DayType::Holiday, "Holiday"),
        );

        let resolved: ResolvedWeek = week.resolve(&lookup()).unwrap();
        assert!(resolved.missing.is_empty());
        assert_eq!(resolved.assignment.name(), "Week");
        assert_eq!(
            resolved.assignment.get(DayType::Sunday),
            Some(DayScheduleHandle::new(2))
        );
        assert_eq!(
            resolved.assignment.get(DayType::Monday),
            Some(DayScheduleHandle::new(1))
        );
        assert_eq!(resolved.assignment.get(DayType::Tuesday), None);
        assert_eq!(
            resolved.assignment.get(DayType::Holiday),
            Some(DayScheduleHandle::new(3))
        );
    }

    #[test]
    fn test_daily_week_leaves_missing_reference_unassigned() {
        let week: WeekSchedule = WeekSchedule::Daily(
            DailyWeekSchedule::new("Week")
                .with(DayType::Monday, "Weekday")
                .with(DayType::Tuesday, "Dangling"),
        );

        let resolved: ResolvedWeek = week.resolve(&lookup()).unwrap();
        assert_eq!(resolved.assignment.get(DayType::Tuesday), None);
        assert_eq!(
            resolved.missing,
            vec![MissingDaySchedule {
                day_type: DayType::Tuesday,
                name: String::from("Dangling"),
            }]
        );
    }

    #[test]
    fn test_compact_and_daily_shapes_normalise_identically() {
        let compact: WeekSchedule = WeekSchedule::Compact(CompactWeekSchedule {
            name: String::from("Week"),
            entries: vec![
                CompactWeekEntry {
                    day_types: String::from("For: Weekdays"),
                    day_schedule: String::from("Weekday"),
                },
                CompactWeekEntry {
                    day_types: String::from("For: SummerDesignDay WinterDesignDay"),
                    day_schedule: String::from("Design"),
                },
                CompactWeekEntry {
                    day_types: String::from("For: Holidays"),
                    day_schedule: String::from("Holiday"),
                },
                CompactWeekEntry {
                    day_types: String::from("For: AllOtherDays"),
                    day_schedule: String::from("Weekend"),
                },
            ],
        });

        let mut daily: DailyWeekSchedule = DailyWeekSchedule::new("Week");
        for day_type in DayType::ALL {
            let name: &str = match day_type {
                DayType::Monday
                | DayType::Tuesday
                | DayType::Wednesday
                | DayType::Thursday
                | DayType::Friday => "Weekday",
                DayType::SummerDesignDay | DayType::WinterDesignDay => "Design",
                DayType::Holiday => "Holiday",
                _ => "Weekend",
            };
            daily = daily.with(day_type, name);
        }

        let from_compact: ResolvedWeek = compact.resolve(&lookup()).unwrap();
        let from_daily: ResolvedWeek = WeekSchedule::Daily(daily).resolve(&lookup()).unwrap();
        assert_eq!(from_compact, from_daily);
    }

    #[test]
    fn test_compact_all_days_assigns_every_slot() {
        let compact: WeekSchedule = WeekSchedule::Compact(CompactWeekSchedule {
            name: String::from("Always"),
            entries: vec![CompactWeekEntry {
                day_types: String::from("For: AllDays"),
                day_schedule: String::from("Weekday"),
            }],
        });

        let resolved: ResolvedWeek = compact.resolve(&lookup()).unwrap();
        for day_type in DayType::ALL {
            assert_eq!(
                resolved.assignment.get(day_type),
                Some(DayScheduleHandle::new(1))
            );
        }
    }

    #[test]
    fn test_compact_all_other_days_skips_slot_with_missing_schedule() {
        let compact: WeekSchedule = WeekSchedule::Compact(CompactWeekSchedule {
            name: String::from("Week"),
            entries: vec![
                CompactWeekEntry {
                    day_types: String::from("For: Sunday"),
                    day_schedule: String::from("Dangling"),
                },
                CompactWeekEntry {
                    day_types: String::from("For: AllOtherDays"),
                    day_schedule: String::from("Weekday"),
                },
            ],
        });

        let resolved: ResolvedWeek = compact.resolve(&lookup()).unwrap();
        assert_eq!(resolved.assignment.get(DayType::Sunday), None);
        assert_eq!(
            resolved.assignment.get(DayType::Monday),
            Some(DayScheduleHandle::new(1))
        );
        assert_eq!(resolved.missing.len(), 1);
    }

    #[test]
    fn test_compact_unknown_token_is_an_error() {
        let compact: WeekSchedule = WeekSchedule::Compact(CompactWeekSchedule {
            name: String::from("Week"),
            entries: vec![CompactWeekEntry {
                day_types: String::from("For: Someday"),
                day_schedule: String::from("Weekday"),
            }],
        });

        assert!(matches!(
            compact.resolve(&lookup()),
            Err(DomainError::UnknownDayType(_))
        ));
    }

    #[test]
    fn test_same_days_ignores_name() {
        let first: WeekAssignment = WeekAssignment::new("A").with_weekdays(
            DayScheduleHandle::new(1),
            DayScheduleHandle::new(2),
        );
        let second: WeekAssignment = WeekAssignment::new("B").with_weekdays(
            DayScheduleHandle::new(1),
            DayScheduleHandle::new(2),
        );
        assert!(first.same_days_as(&second));
        assert_ne!(first, second);
    }
}
