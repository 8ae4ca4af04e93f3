//! Commit message validation against a commit convention.
//!
//! Each convention is a pure function from a parsed message (and the shared
//! [`References`]) to an ordered list of [`Violation`]s. Structural failures,
//! such as an empty subject or a subject without the convention's shape,
//! stop validation early; every other finding is collected.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::data::check::{Rule, ValidationReport, Violation};
use crate::message::CommitMessage;
use crate::references::{ReferenceError, References};

pub mod conventional;
pub mod custom;
pub mod gitmoji;
pub mod style;

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static KEBAB_SCOPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*(?:/[a-z0-9]+(?:-[a-z0-9]+)*)*$").unwrap()
});

/// Supported commit conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// `type(scope)!: subject` with a type list.
    Conventional,
    /// Emoji or `:code:` prefixed subjects.
    Gitmoji,
    /// Only a non-empty subject is required.
    Custom,
}

impl Convention {
    /// Runs this convention's validator.
    pub fn validate(
        self,
        message: &CommitMessage,
        references: &References,
    ) -> Result<Vec<Violation>, ReferenceError> {
        match self {
            Self::Conventional => conventional::validate(message, references),
            Self::Gitmoji => gitmoji::validate(message, references),
            Self::Custom => Ok(custom::validate(message)),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conventional => write!(f, "conventional"),
            Self::Gitmoji => write!(f, "gitmoji"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Validates `message` against `convention`.
///
/// Reference loading failures are configuration errors and are returned as
/// `Err`; rule violations are reported inside the [`ValidationReport`].
pub fn validate(
    convention: Convention,
    message: &CommitMessage,
    references: &References,
) -> Result<ValidationReport, ReferenceError> {
    debug!("Validating commit message against {convention} convention");
    let violations = convention.validate(message, references)?;
    debug!("Found {} violation(s)", violations.len());
    Ok(ValidationReport::new(
        convention,
        message.subject(),
        violations,
    ))
}

/// Reports an empty subject line.
pub(crate) fn subject_required(message: &CommitMessage) -> Option<Violation> {
    message
        .subject()
        .is_empty()
        .then(|| Violation::new(Rule::SubjectRequired, "Subject line is required."))
}

/// Reports a scope that is not kebab-case.
pub(crate) fn scope_violation(scope: &str) -> Option<Violation> {
    (!KEBAB_SCOPE_PATTERN.is_match(scope))
        .then(|| Violation::new(Rule::ScopeKebabCase, "Scope must be kebab-case."))
}

#[cfg(test)]
pub(crate) mod tests {
    use std::path::Path;

    use super::*;

    /// References backed by the documents shipped with the crate.
    pub(crate) fn bundled() -> References {
        References::from_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("references"))
    }

    pub(crate) fn messages(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.message.as_str()).collect()
    }

    pub(crate) fn rules(violations: &[Violation]) -> Vec<Rule> {
        violations.iter().map(|v| v.rule).collect()
    }

    #[test]
    fn kebab_scopes() {
        for scope in ["auth", "v2", "token-parser", "api/v2-auth", "a/b/c"] {
            assert!(scope_violation(scope).is_none(), "{scope} should pass");
        }
        for scope in ["Auth", "-auth", "auth-", "a--b", "a//b", "/a", "snake_case", ""] {
            assert!(scope_violation(scope).is_some(), "{scope} should fail");
        }
    }

    #[test]
    fn dispatch_selects_convention() {
        let references = bundled();
        let message = CommitMessage::parse("✨ Add sparkle feature");

        let gitmoji = validate(Convention::Gitmoji, &message, &references).unwrap();
        assert!(gitmoji.passes);

        let conventional = validate(Convention::Conventional, &message, &references).unwrap();
        assert_eq!(conventional.rules(), [Rule::SubjectFormat]);

        let custom = validate(Convention::Custom, &message, &references).unwrap();
        assert!(custom.passes);
        assert_eq!(custom.subject, "✨ Add sparkle feature");
    }

    #[test]
    fn validation_is_idempotent() {
        let references = bundled();
        let message = CommitMessage::parse("feat(Auth): Added login.\nbody");
        for convention in [
            Convention::Conventional,
            Convention::Gitmoji,
            Convention::Custom,
        ] {
            let first = validate(convention, &message, &references).unwrap();
            let second = validate(convention, &message, &references).unwrap();
            assert_eq!(first.violations, second.violations);
        }
    }

    #[test]
    fn custom_ignores_missing_references() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let references = References::from_dir(temp_dir.path());
        let report = validate(
            Convention::Custom,
            &CommitMessage::parse("anything"),
            &references,
        )
        .unwrap();
        assert!(report.passes);
    }

    #[test]
    fn convention_display_matches_serde() {
        for convention in [
            Convention::Conventional,
            Convention::Gitmoji,
            Convention::Custom,
        ] {
            let json = serde_json::to_string(&convention).unwrap();
            assert_eq!(json, format!("\"{convention}\""));
        }
    }
}
