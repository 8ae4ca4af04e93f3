//! Conventional Commits validation: `type(scope)!: subject`.

use std::sync::LazyLock;

use regex::Regex;

use super::{scope_violation, style, subject_required};
use crate::data::check::{Rule, Violation};
use crate::message::CommitMessage;
use crate::references::{ReferenceError, References};

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static CONVENTIONAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[a-z]+)(?:\((?P<scope>[a-z0-9-]+)\))?(?P<breaking>!)?: (?P<subject>.+)$")
        .unwrap()
});

/// Parsed `type(scope)!: subject` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalHeader<'a> {
    /// Commit type, e.g. `feat`.
    pub commit_type: &'a str,
    /// Optional scope inside parentheses.
    pub scope: Option<&'a str>,
    /// Whether the `!` breaking-change marker is present.
    pub breaking: bool,
    /// Free-text subject after `: `, trimmed.
    pub subject: &'a str,
}

impl<'a> ConventionalHeader<'a> {
    /// Parses a subject line, returning `None` when it lacks the required shape.
    pub fn parse(line: &'a str) -> Option<Self> {
        let captures = CONVENTIONAL_PATTERN.captures(line)?;
        Some(Self {
            commit_type: captures.name("type")?.as_str(),
            scope: captures.name("scope").map(|m| m.as_str()),
            breaking: captures.name("breaking").is_some(),
            subject: captures.name("subject")?.as_str().trim(),
        })
    }
}

/// Validates a message against the conventional commit rules.
pub fn validate(
    message: &CommitMessage,
    references: &References,
) -> Result<Vec<Violation>, ReferenceError> {
    let allowed_types = references.type_list()?;

    if let Some(violation) = subject_required(message) {
        return Ok(vec![violation]);
    }

    let Some(header) = ConventionalHeader::parse(message.subject()) else {
        return Ok(vec![Violation::new(
            Rule::SubjectFormat,
            "Subject must match: type(scope): subject",
        )]);
    };

    let mut violations = Vec::new();

    if !allowed_types.contains(header.commit_type) {
        violations.push(Violation::new(
            Rule::TypeAllowed,
            format!("Type '{}' is not in the allowed list.", header.commit_type),
        ));
    }

    violations.extend(header.scope.and_then(scope_violation));
    violations.extend(style::subject_checks(header.subject));
    violations.extend(style::blank_line(message.body()));
    violations.extend(style::body_wrap(message.body()));

    Ok(violations)
}
