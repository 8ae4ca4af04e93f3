//! Gitmoji validation: an emoji glyph or `:code:` prefix, then an optional
//! `(scope):` and a capitalized subject.

use std::sync::LazyLock;

use regex::Regex;

use super::{scope_violation, style, subject_required};
use crate::data::check::{Rule, Violation};
use crate::message::CommitMessage;
use crate::references::{GitmojiAllowlist, ReferenceError, References};

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static CODE_PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:(?P<code>[a-z0-9_+-]+):\s+(?P<rest>.+)$").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static SCOPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((?P<scope>[^)]+)\):\s+(?P<rest>.+)$").unwrap());

/// Leading marker of a gitmoji subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prefix<'a> {
    /// A literal emoji glyph.
    Emoji(&'a str),
    /// A `:code:` token, colons included.
    Code(String),
}

/// Splits the gitmoji prefix off a subject line.
///
/// Glyphs are tried longest first so a glyph that is a prefix of another
/// (for example a bare emoji and its variation-selector form) cannot steal
/// the match.
pub fn parse_prefix<'a>(
    subject: &'a str,
    allowlist: &GitmojiAllowlist,
) -> Option<(Prefix<'a>, &'a str)> {
    for emoji in allowlist.emojis_longest_first() {
        if let Some(rest) = subject
            .strip_prefix(emoji)
            .and_then(|tail| tail.strip_prefix(' '))
        {
            let glyph = &subject[..emoji.len()];
            return Some((Prefix::Emoji(glyph), rest));
        }
    }

    let captures = CODE_PREFIX_PATTERN.captures(subject)?;
    let code = format!(":{}:", captures.name("code")?.as_str());
    Some((Prefix::Code(code), captures.name("rest")?.as_str()))
}

/// Validates a message against the gitmoji rules.
///
/// Subject and body are not required to be separated by a blank line for
/// this convention; only body wrapping is checked.
pub fn validate(
    message: &CommitMessage,
    references: &References,
) -> Result<Vec<Violation>, ReferenceError> {
    if let Some(violation) = subject_required(message) {
        return Ok(vec![violation]);
    }

    let allowlist = references.gitmoji()?;

    let Some((prefix, rest)) = parse_prefix(message.subject(), allowlist) else {
        return Ok(vec![Violation::new(
            Rule::SubjectFormat,
            "Subject must start with an allowed emoji or :code:.",
        )]);
    };

    let mut violations = Vec::new();

    match &prefix {
        Prefix::Code(code) if !allowlist.contains_code(code) => {
            violations.push(Violation::new(
                Rule::PrefixAllowed,
                format!("Code '{code}' is not in the allowed list."),
            ));
        }
        Prefix::Emoji(emoji) if !allowlist.contains_emoji(emoji) => {
            violations.push(Violation::new(
                Rule::PrefixAllowed,
                format!("Emoji '{emoji}' is not in the allowed list."),
            ));
        }
        _ => {}
    }

    let mut subject_text = rest.trim();
    let mut scope = None;
    if subject_text.starts_with('(') {
        match SCOPE_PATTERN.captures(subject_text) {
            Some(captures) => {
                scope = captures
                    .name("scope")
                    .map(|m| m.as_str().trim())
                    .filter(|s| !s.is_empty());
                subject_text = captures.name("rest").map_or("", |m| m.as_str().trim());
            }
            None => violations.push(Violation::new(
                Rule::ScopeFormat,
                "Scope format must be: (scope): Subject",
            )),
        }
    }

    violations.extend(scope.and_then(scope_violation));

    if subject_text
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() && !c.is_uppercase())
    {
        violations.push(Violation::new(
            Rule::SubjectCapital,
            "Subject must start with a capital letter.",
        ));
    }

    violations.extend(style::subject_checks(subject_text));
    violations.extend(style::body_wrap(message.body()));

    Ok(violations)
}
