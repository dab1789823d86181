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
    clippy::all
)]

use serde::Serialize;

/// How serious a report entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A schedule was translated.
    Info,
    /// A schedule was translated after recovering from bad input.
    Warning,
    /// A schedule could not be translated and was left out of the output.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One line of a translation report.
///
/// Every translated schedule produces exactly one `Info` or `Error` entry,
/// preceded by any `Warning` entries recorded while it was normalised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// The name of the schedule the entry is about.
    pub schedule: String,
    /// The entry severity.
    pub severity: Severity,
    /// What happened (e.g., "`ResolvedRuleset`", "`MissingDaySchedule`").
    pub action: String,
    /// Optional additional details.
    pub details: Option<String>,
}

impl ReportEntry {
    /// Creates a new `ReportEntry`.
    ///
    /// # Arguments
    ///
    /// * `schedule` - The schedule name
    /// * `severity` - The entry severity
    /// * `action` - What happened
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(
        schedule: String,
        severity: Severity,
        action: String,
        details: Option<String>,
    ) -> Self {
        Self {
            schedule,
            severity,
            action,
            details,
        }
    }
}

impl std::fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.schedule, self.action)?;
        if let Some(details) = &self.details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

/// The entries recorded during one translation run, in the order they occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationReport {
    entries: Vec<ReportEntry>,
}

impl TranslationReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn record(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    /// Records a successful translation.
    pub fn info(&mut self, schedule: &str, action: &str, details: Option<String>) {
        self.record(ReportEntry::new(
            schedule.to_string(),
            Severity::Info,
            action.to_string(),
            details,
        ));
    }

    /// Records a recovered problem.
    pub fn warning(&mut self, schedule: &str, action: &str, details: Option<String>) {
        self.record(ReportEntry::new(
            schedule.to_string(),
            Severity::Warning,
            action.to_string(),
            details,
        ));
    }

    /// Records a failed translation.
    pub fn error(&mut self, schedule: &str, action: &str, details: Option<String>) {
        self.record(ReportEntry::new(
            schedule.to_string(),
            Severity::Error,
            action.to_string(),
            details,
        ));
    }

    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.severity == severity)
            .count()
    }

    /// Returns whether any schedule failed to translate.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    /// Returns the entries about one schedule.
    pub fn for_schedule<'a>(&'a self, schedule: &'a str) -> impl Iterator<Item = &'a ReportEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.schedule == schedule)
    }
}
