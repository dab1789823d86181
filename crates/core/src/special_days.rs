// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Special-day extraction.
//!
//! A ruleset holds one schedule per special-day category for the whole year,
//! so a schedule year can only become a ruleset when each category uses at
//! most one distinct day schedule across all of its weeks.

use std::collections::BTreeSet;
use yearsched_domain::{DayScheduleHandle, DayType, WeekAssignment};

/// The distinct day schedules seen per special-day category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialDaySchedules {
    /// Distinct handles, indexed like [`DayType::SPECIAL_DAYS`].
    seen: [BTreeSet<DayScheduleHandle>; 5],
}

impl SpecialDaySchedules {
    /// Scans every week and records the special-day schedules it references.
    #[must_use]
    pub fn collect<'a>(weeks: impl IntoIterator<Item = &'a WeekAssignment>) -> Self {
        let mut collected: Self = Self::default();
        for week in weeks {
            for (slot, day_type) in DayType::SPECIAL_DAYS.into_iter().enumerate() {
                if let Some(handle) = week.get(day_type) {
                    collected.seen[slot].insert(handle);
                }
            }
        }
        collected
    }

    /// Returns the distinct schedules seen for a category, in handle order.
    ///
    /// Weekday slots never hold anything.
    #[must_use]
    pub fn distinct(&self, day_type: DayType) -> Vec<DayScheduleHandle> {
        slot(day_type).map_or_else(Vec::new, |slot| self.seen[slot].iter().copied().collect())
    }

    /// Returns the single schedule for a category, or `None` if the category
    /// was never referenced or is ambiguous.
    #[must_use]
    pub fn unique(&self, day_type: DayType) -> Option<DayScheduleHandle> {
        let seen: &BTreeSet<DayScheduleHandle> = &self.seen[slot(day_type)?];
        if seen.len() == 1 {
            seen.first().copied()
        } else {
            None
        }
    }

    /// Returns whether every category has at most one distinct schedule.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.seen.iter().all(|seen| seen.len() <= 1)
    }

    /// Returns the categories with more than one distinct schedule.
    #[must_use]
    pub fn ambiguous_categories(&self) -> Vec<DayType> {
        DayType::SPECIAL_DAYS
            .into_iter()
            .zip(&self.seen)
            .filter(|(_, seen)| seen.len() > 1)
            .map(|(day_type, _)| day_type)
            .collect()
    }
}

fn slot(day_type: DayType) -> Option<usize> {
    DayType::SPECIAL_DAYS
        .iter()
        .position(|special| *special == day_type)
}
