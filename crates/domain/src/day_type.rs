// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Weekday;

/// A slot of a week schedule: one of the seven weekdays or one of the five
/// special-day categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayType {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Holiday,
    SummerDesignDay,
    WinterDesignDay,
    CustomDay1,
    CustomDay2,
}

impl DayType {
    /// All twelve slots in field order.
    pub const ALL: [Self; 12] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Holiday,
        Self::SummerDesignDay,
        Self::WinterDesignDay,
        Self::CustomDay1,
        Self::CustomDay2,
    ];

    /// The weekdays, Sunday first.
    pub const WEEKDAYS: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// The special-day categories.
    pub const SPECIAL_DAYS: [Self; 5] = [
        Self::Holiday,
        Self::SummerDesignDay,
        Self::WinterDesignDay,
        Self::CustomDay1,
        Self::CustomDay2,
    ];

    /// Returns the slot position in field order (Sunday is 0, `CustomDay2` is 11).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns whether this slot is a special-day category.
    #[must_use]
    pub const fn is_special(self) -> bool {
        self.index() >= 7
    }

    /// Returns the slot for the given weekday.
    #[must_use]
    pub fn from_weekday(weekday: Weekday) -> Self {
        Self::WEEKDAYS[usize::from(weekday.number_days_from_sunday())]
    }

    /// Returns the field name of this slot.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Holiday => "Holiday",
            Self::SummerDesignDay => "SummerDesignDay",
            Self::WinterDesignDay => "WinterDesignDay",
            Self::CustomDay1 => "CustomDay1",
            Self::CustomDay2 => "CustomDay2",
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DayType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day_type| day_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownDayType(s.to_string()))
    }
}

/// A token of a compact week schedule's `For:` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTypeSelector {
    /// A single slot.
    Single(DayType),
    /// Monday through Friday.
    Weekdays,
    /// Saturday and Sunday.
    Weekends,
    /// Every slot.
    AllDays,
    /// Every slot not yet assigned by an earlier entry.
    AllOtherDays,
}

impl DayTypeSelector {
    /// Returns the slots this selector names, ignoring prior assignments.
    #[must_use]
    pub fn day_types(&self) -> Vec<DayType> {
        match self {
            Self::Single(day_type) => vec![*day_type],
            Self::Weekdays => vec![
                DayType::Monday,
                DayType::Tuesday,
                DayType::Wednesday,
                DayType::Thursday,
                DayType::Friday,
            ],
            Self::Weekends => vec![DayType::Saturday, DayType::Sunday],
            Self::AllDays | Self::AllOtherDays => DayType::ALL.to_vec(),
        }
    }

    /// Parses a compact `For:` list such as `"For: Weekdays SummerDesignDay"`.
    ///
    /// Tokens may be separated by whitespace or commas and are matched
    /// case-insensitively. `Holidays` is accepted for `Holiday`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first unrecognised token.
    pub fn parse_list(list: &str) -> Result<Vec<Self>, DomainError> {
        let trimmed: &str = list.trim();
        let body: &str = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("for:") => &trimmed[4..],
            _ => trimmed,
        };

        body.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for DayTypeSelector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weekdays" => Ok(Self::Weekdays),
            "weekends" => Ok(Self::Weekends),
            "alldays" => Ok(Self::AllDays),
            "allotherdays" => Ok(Self::AllOtherDays),
            "holidays" => Ok(Self::Single(DayType::Holiday)),
            _ => s.parse::<DayType>().map(Self::Single),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_day_type_indices_follow_field_order() {
        for (position, day_type) in DayType::ALL.iter().enumerate() {
            assert_eq!(day_type.index(), position);
        }
        assert!(!DayType::Saturday.is_special());
        assert!(DayType::Holiday.is_special());
    }

    #[test]
    fn test_from_weekday_is_sunday_based() {
        assert_eq!(DayType::from_weekday(Weekday::Sunday), DayType::Sunday);
        assert_eq!(DayType::from_weekday(Weekday::Thursday), DayType::Thursday);
        assert_eq!(DayType::from_weekday(Weekday::Saturday), DayType::Saturday);
    }

    #[test]
    fn test_day_type_parse_is_case_insensitive() {
        assert_eq!(
            "summerdesignday".parse::<DayType>().unwrap(),
            DayType::SummerDesignDay
        );
        assert!(matches!(
            "Funday".parse::<DayType>(),
            Err(DomainError::UnknownDayType(token)) if token == "Funday"
        ));
    }

    #[test]
    fn test_parse_list_strips_for_prefix() {
        let selectors: Vec<DayTypeSelector> =
            DayTypeSelector::parse_list("For: Weekdays SummerDesignDay").unwrap();
        assert_eq!(
            selectors,
            vec![
                DayTypeSelector::Weekdays,
                DayTypeSelector::Single(DayType::SummerDesignDay)
            ]
        );
    }

    #[test]
    fn test_parse_list_accepts_commas_and_holidays_alias() {
        let selectors: Vec<DayTypeSelector> =
            DayTypeSelector::parse_list("Sunday, Holidays,AllOtherDays").unwrap();
        assert_eq!(
            selectors,
            vec![
                DayTypeSelector::Single(DayType::Sunday),
                DayTypeSelector::Single(DayType::Holiday),
                DayTypeSelector::AllOtherDays
            ]
        );
    }

    #[test]
    fn test_parse_list_rejects_unknown_token() {
        assert!(matches!(
            DayTypeSelector::parse_list("For: Weekdays Fortnight"),
            Err(DomainError::UnknownDayType(token)) if token == "Fortnight"
        ));
    }

    #[test]
    fn test_weekends_selector() {
        assert_eq!(
            DayTypeSelector::Weekends.day_types(),
            vec![DayType::Saturday, DayType::Sunday]
        );
    }
}
