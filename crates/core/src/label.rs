// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Names for generated rules and week schedules.

use std::collections::{HashMap, HashSet};
use yearsched_domain::DateRange;

/// Returns `"<schedule> Week Rule - <Mon><Day>-<Mon><Day>"` for a range.
#[must_use]
pub fn week_rule_label(schedule_name: &str, range: DateRange) -> String {
    format!("{schedule_name} Week Rule - {}", range.label())
}

/// Tracks the names issued during one translation run.
///
/// The first request for a name returns it unchanged. Later requests for the
/// same name get `" 1"`, `" 2"`, ... appended, skipping any candidate that
/// was already issued verbatim.
#[derive(Debug, Clone, Default)]
pub struct LabelRegistry {
    /// Every name handed out so far.
    issued: HashSet<String>,
    /// The last suffix used per requested base name.
    suffixes: HashMap<String, usize>,
}

impl LabelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a name based on `base` that has not been issued before and
    /// records it.
    pub fn issue(&mut self, base: &str) -> String {
        if self.issued.insert(base.to_string()) {
            return base.to_string();
        }

        let suffix: &mut usize = self.suffixes.entry(base.to_string()).or_insert(0);
        loop {
            *suffix += 1;
            let candidate: String = format!("{base} {suffix}");
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Returns whether a name has already been issued.
    #[must_use]
    pub fn is_issued(&self, name: &str) -> bool {
        self.issued.contains(name)
    }

    /// Returns the number of names issued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use yearsched_domain::MonthDay;

    #[test]
    fn test_week_rule_label_format() {
        assert_eq!(
            week_rule_label("Schedule Ruleset", DateRange::full_year()),
            "Schedule Ruleset Week Rule - Jan1-Dec31"
        );
        let range: DateRange =
            DateRange::new(MonthDay::new(1, 28).unwrap(), MonthDay::new(2, 3).unwrap()).unwrap();
        assert_eq!(
            week_rule_label("Office", range),
            "Office Week Rule - Jan28-Feb3"
        );
    }

    #[test]
    fn test_repeated_labels_get_numeric_suffixes() {
        let mut labels: LabelRegistry = LabelRegistry::new();
        assert!(labels.is_empty());
        assert_eq!(labels.issue("Rule"), "Rule");
        assert_eq!(labels.issue("Rule"), "Rule 1");
        assert_eq!(labels.issue("Rule"), "Rule 2");
        assert_eq!(labels.issue("Other"), "Other");
        assert_eq!(labels.len(), 4);
        assert!(labels.is_issued("Rule 2"));
        assert!(!labels.is_issued("Rule 3"));
    }

    #[test]
    fn test_suffix_skips_names_issued_verbatim() {
        let mut labels: LabelRegistry = LabelRegistry::new();
        assert_eq!(labels.issue("Rule 1"), "Rule 1");
        assert_eq!(labels.issue("Rule"), "Rule");
        assert_eq!(labels.issue("Rule"), "Rule 2");
    }
}
