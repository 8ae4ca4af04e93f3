//! Convention-agnostic style checks for subjects and bodies.

use crate::data::check::{Rule, Violation};
use crate::message::has_body;

/// Maximum characters allowed in the subject text and in each body line.
pub const MAX_LINE_LEN: usize = 72;

/// First words that mark a subject written in the past tense.
pub const PAST_TENSE_STARTS: &[&str] = &[
    "added",
    "built",
    "caught",
    "changed",
    "cleaned",
    "created",
    "dropped",
    "fixed",
    "improved",
    "made",
    "merged",
    "moved",
    "refactored",
    "removed",
    "renamed",
    "resolved",
    "reverted",
    "sent",
    "updated",
];

/// Punctuation stripped from the first word before the tense lookup.
const WORD_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', ')', '"', '\''];

/// Checks that the subject text fits within [`MAX_LINE_LEN`].
pub fn subject_length(subject: &str) -> Option<Violation> {
    (subject.chars().count() > MAX_LINE_LEN).then(|| {
        Violation::new(
            Rule::SubjectLength,
            format!("Subject exceeds {MAX_LINE_LEN} chars."),
        )
    })
}

/// Checks that the subject text does not end with a period.
pub fn subject_period(subject: &str) -> Option<Violation> {
    subject
        .ends_with('.')
        .then(|| Violation::new(Rule::SubjectPeriod, "Subject must not end with a period."))
}

/// Checks that the subject does not open with a past-tense verb.
pub fn subject_tense(subject: &str) -> Option<Violation> {
    let first = subject.split_whitespace().next()?;
    let word = first.trim_matches(WORD_PUNCTUATION).to_lowercase();

    PAST_TENSE_STARTS.contains(&word.as_str()).then(|| {
        Violation::new(
            Rule::SubjectTense,
            "Subject must not start with past tense.",
        )
    })
}

/// Checks that a non-empty body is separated from the subject by a blank line.
pub fn blank_line(body: &[String]) -> Option<Violation> {
    if !has_body(body) {
        return None;
    }

    body.first().filter(|line| !line.is_empty()).map(|_| {
        Violation::new(
            Rule::BlankLine,
            "Leave one blank line between subject and body.",
        )
    })
}

/// Reports every body line longer than [`MAX_LINE_LEN`].
///
/// Lines are numbered as in the full message, so the first body line is 2.
pub fn body_wrap(body: &[String]) -> Vec<Violation> {
    body.iter()
        .enumerate()
        .filter(|(_, line)| line.chars().count() > MAX_LINE_LEN)
        .map(|(index, _)| {
            Violation::new(
                Rule::BodyWrap,
                format!("Body line {} exceeds {MAX_LINE_LEN} chars.", index + 2),
            )
        })
        .collect()
}

/// Runs the length, period and tense checks against subject text.
pub fn subject_checks(subject: &str) -> Vec<Violation> {
    [
        subject_length(subject),
        subject_period(subject),
        subject_tense(subject),
    ]
    .into_iter()
    .flatten()
    .collect()
}
