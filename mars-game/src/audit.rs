//! Data-quality checks over a [`GameConstants`] table.
//!
//! The table never validates itself. Callers that want assurance run
//! [`audit`] and decide what to do with the report; suspicious entries are
//! reported, never rewritten.
use serde::Serialize;
use std::fmt;

use crate::table::{Field, GameConstants};

const STRAY_PUNCTUATION: [char; 4] = [',', ';', '.', ':'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Notice,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What is wrong with a single table entry or count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Same label appears earlier in the same field.
    DuplicateEntry {
        label: &'static str,
        first_index: usize,
    },
    /// Count is zero.
    ZeroCount,
    /// Entry is empty or only whitespace.
    EmptyEntry,
    SurroundingWhitespace { label: &'static str },
    StrayPunctuation { label: &'static str },
    /// Lower-case initial in a field that also holds capitalized entries.
    InconsistentCase { label: &'static str },
}

impl Issue {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::DuplicateEntry { .. } | Self::ZeroCount | Self::EmptyEntry => Severity::Error,
            Self::SurroundingWhitespace { .. } | Self::StrayPunctuation { .. } => {
                Severity::Warning
            }
            Self::InconsistentCase { .. } => Severity::Notice,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEntry { label, first_index } => {
                write!(f, "`{label}` duplicates entry {first_index}")
            }
            Self::ZeroCount => f.write_str("count must be positive"),
            Self::EmptyEntry => f.write_str("entry is empty"),
            Self::SurroundingWhitespace { label } => {
                write!(f, "`{label}` has surrounding whitespace")
            }
            Self::StrayPunctuation { label } => write!(f, "`{label}` has stray punctuation"),
            Self::InconsistentCase { label } => {
                write!(f, "`{label}` is not capitalized like its siblings")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub field: Field,
    /// Position within a list field; `None` for counts.
    pub index: Option<usize>,
    pub severity: Severity,
    #[serde(flatten)]
    pub issue: Issue,
}

impl Finding {
    fn new(field: Field, index: Option<usize>, issue: Issue) -> Self {
        Self {
            field,
            index,
            severity: issue.severity(),
            issue,
        }
    }

    /// Location in `field[index]` form.
    #[must_use]
    pub fn location(&self) -> String {
        match self.index {
            Some(index) => format!("{}[{index}]", self.field),
            None => self.field.to_string(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.location(), self.issue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AuditReport {
    findings: Vec<Finding>,
}

impl AuditReport {
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|finding| finding.severity == Severity::Error)
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No errors and no warnings. Notices do not count against a clean report.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings
            .iter()
            .all(|finding| finding.severity == Severity::Notice)
    }

    /// Highest severity present, if any finding exists.
    #[must_use]
    pub fn worst(&self) -> Option<Severity> {
        self.findings.iter().map(|finding| finding.severity).max()
    }
}

/// Check a constants table for duplicates, zero counts and suspicious labels.
#[must_use]
pub fn audit(table: &GameConstants) -> AuditReport {
    let mut findings = Vec::new();

    for (field, value) in table.counts() {
        if value == 0 {
            findings.push(Finding::new(field.into(), None, Issue::ZeroCount));
        }
    }

    for (field, entries) in table.lists() {
        audit_list(field.into(), entries, &mut findings);
    }

    for finding in &findings {
        log::debug!("constants audit: {finding}");
    }
    let report = AuditReport { findings };
    if report.is_clean() {
        log::info!(
            "constants audit clean ({} notices)",
            report.count(Severity::Notice)
        );
    } else {
        log::warn!(
            "constants audit found {} errors, {} warnings",
            report.count(Severity::Error),
            report.count(Severity::Warning)
        );
    }
    report
}

fn audit_list(field: Field, entries: &'static [&'static str], findings: &mut Vec<Finding>) {
    let has_capitalized = entries.iter().any(|entry| starts_uppercase(entry));

    for (index, &label) in entries.iter().enumerate() {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            findings.push(Finding::new(field, Some(index), Issue::EmptyEntry));
            continue;
        }
        if let Some(first_index) = entries[..index].iter().position(|earlier| *earlier == label) {
            findings.push(Finding::new(
                field,
                Some(index),
                Issue::DuplicateEntry { label, first_index },
            ));
        }
        if trimmed.len() != label.len() {
            findings.push(Finding::new(
                field,
                Some(index),
                Issue::SurroundingWhitespace { label },
            ));
        }
        if trimmed.starts_with(STRAY_PUNCTUATION) || trimmed.ends_with(STRAY_PUNCTUATION) {
            findings.push(Finding::new(
                field,
                Some(index),
                Issue::StrayPunctuation { label },
            ));
        }
        if has_capitalized && trimmed.starts_with(|c: char| c.is_lowercase()) {
            findings.push(Finding::new(
                field,
                Some(index),
                Issue::InconsistentCase { label },
            ));
        }
    }
}

fn starts_uppercase(entry: &str) -> bool {
    entry.trim().starts_with(char::is_uppercase)
}
