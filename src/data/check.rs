//! Validation result types for commit message checks.

use std::fmt;

use serde::Serialize;

use crate::validate::Convention;

/// Exit code for a message that failed validation.
pub const EXIT_VALIDATION_FAILED: i32 = 1;

/// Exit code for configuration or environment failures.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Outcome of validating one message against one convention.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Convention the message was checked against.
    pub convention: Convention,
    /// The parsed subject line.
    pub subject: String,
    /// Violations in the order the checks ran.
    pub violations: Vec<Violation>,
    /// Whether the message passes all checks.
    pub passes: bool,
}

impl ValidationReport {
    /// Creates a report from the violations a validator produced.
    pub fn new(convention: Convention, subject: &str, violations: Vec<Violation>) -> Self {
        let passes = violations.is_empty();
        Self {
            convention,
            subject: subject.to_string(),
            violations,
            passes,
        }
    }

    /// Human-readable messages in check order.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    /// Rule ids in check order.
    pub fn rules(&self) -> Vec<Rule> {
        self.violations.iter().map(|v| v.rule).collect()
    }

    /// Determines the process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.passes {
            0
        } else {
            EXIT_VALIDATION_FAILED
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Which rule was violated.
    pub rule: Rule,
    /// Explanation shown to the author.
    pub message: String,
}

impl Violation {
    /// Creates a violation.
    pub fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Stable identifiers for every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// The subject line is empty.
    SubjectRequired,
    /// The subject does not have the convention's shape.
    SubjectFormat,
    /// The conventional type is not in the type list.
    TypeAllowed,
    /// The gitmoji prefix is not in the allowlist.
    PrefixAllowed,
    /// A gitmoji scope is not written as `(scope): Subject`.
    ScopeFormat,
    /// A scope is not kebab-case.
    ScopeKebabCase,
    /// The gitmoji subject does not start with a capital letter.
    SubjectCapital,
    /// The subject text is too long.
    SubjectLength,
    /// The subject text ends with a period.
    SubjectPeriod,
    /// The subject text starts with a past-tense verb.
    SubjectTense,
    /// Subject and body are not separated by a blank line.
    BlankLine,
    /// A body line is too long.
    BodyWrap,
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}
