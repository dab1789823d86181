// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DayType, DomainError, MonthDay};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidDate {
        month: 2,
        day: 29,
        year: 2009,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid date: month 2, day 29 in year 2009"
    );

    let err: DomainError = DomainError::InvertedDateRange {
        start: MonthDay::DEC_31,
        end: MonthDay::JAN_1,
    };
    assert_eq!(
        format!("{err}"),
        "Date range ends (Jan1) before it starts (Dec31)"
    );

    let err: DomainError = DomainError::UnknownDayType(String::from("Someday"));
    assert_eq!(format!("{err}"), "Unknown day type: 'Someday'");

    let err: DomainError = DomainError::RuleIndexOutOfRange { index: 4, len: 4 };
    assert_eq!(
        format!("{err}"),
        "Rule index 4 is out of range for a ruleset with 4 rules"
    );

    let err: DomainError = DomainError::NotASpecialDay(DayType::Monday);
    assert_eq!(format!("{err}"), "Monday is not a special-day category");

    let err: DomainError = DomainError::DayScheduleNotFound(String::from("Office Day"));
    assert_eq!(format!("{err}"), "Day schedule not found: Office Day");

    let err: DomainError = DomainError::IncompleteYear {
        last: Some(MonthDay::new(6, 30).unwrap()),
    };
    assert_eq!(
        format!("{err}"),
        "Schedule year ends on Jun30 instead of Dec31"
    );

    let err: DomainError = DomainError::IncompleteYear { last: None };
    assert_eq!(format!("{err}"), "Schedule year has no weeks");

    let err: DomainError = DomainError::InvalidCalendarYear(99_999);
    assert_eq!(format!("{err}"), "Invalid calendar year: 99999");
}
