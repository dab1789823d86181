// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The object store schedules are resolved against.
//!
//! The catalog hands out day schedule handles and keeps week schedules by
//! name. Handles are allocated sequentially, so two catalogs filled in the
//! same order assign the same handles.

use crate::day_schedule::{DaySchedule, DayScheduleHandle};
use crate::error::DomainError;
use crate::week::{DayScheduleLookup, WeekSchedule};
use std::collections::{BTreeMap, HashMap};

/// Day schedules and week schedules available to a translation run.
#[derive(Debug, Clone, Default)]
pub struct ScheduleCatalog {
    /// Day schedules by handle.
    day_schedules: BTreeMap<DayScheduleHandle, DaySchedule>,
    /// Day schedule handles by name; the first schedule with a name wins.
    day_schedule_names: HashMap<String, DayScheduleHandle>,
    /// Week schedules by name.
    week_schedules: HashMap<String, WeekSchedule>,
    /// The next handle to allocate.
    next_handle: u64,
}

impl ScheduleCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a day schedule and returns its new handle.
    ///
    /// Every call allocates a distinct handle, even when a schedule with the
    /// same name and values already exists.
    pub fn add_day_schedule(&mut self, day_schedule: DaySchedule) -> DayScheduleHandle {
        let handle: DayScheduleHandle = DayScheduleHandle::new(self.next_handle);
        self.next_handle += 1;
        self.day_schedule_names
            .entry(day_schedule.name.clone())
            .or_insert(handle);
        self.day_schedules.insert(handle, day_schedule);
        handle
    }

    /// Returns the day schedule for a handle.
    #[must_use]
    pub fn day_schedule(&self, handle: DayScheduleHandle) -> Option<&DaySchedule> {
        self.day_schedules.get(&handle)
    }

    /// Returns the name of the day schedule for a handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown.
    pub fn day_schedule_name(&self, handle: DayScheduleHandle) -> Result<&str, DomainError> {
        self.day_schedule(handle)
            .map(|day_schedule| day_schedule.name.as_str())
            .ok_or_else(|| DomainError::DayScheduleNotFound(handle.to_string()))
    }

    /// Iterates the day schedules in handle order.
    pub fn day_schedules(&self) -> impl Iterator<Item = (DayScheduleHandle, &DaySchedule)> {
        self.day_schedules
            .iter()
            .map(|(handle, day_schedule)| (*handle, day_schedule))
    }

    /// Returns the number of day schedules.
    #[must_use]
    pub fn day_schedule_count(&self) -> usize {
        self.day_schedules.len()
    }

    /// Stores a week schedule, replacing any week schedule with the same name.
    pub fn add_week_schedule(&mut self, week_schedule: WeekSchedule) {
        self.week_schedules
            .insert(week_schedule.name().to_string(), week_schedule);
    }

    /// Returns the week schedule with the given name.
    #[must_use]
    pub fn week_schedule(&self, name: &str) -> Option<&WeekSchedule> {
        self.week_schedules.get(name)
    }
}

impl DayScheduleLookup for ScheduleCatalog {
    fn find_day_schedule(&self, name: &str) -> Option<DayScheduleHandle> {
        self.day_schedule_names.get(name).copied()
    }
}
