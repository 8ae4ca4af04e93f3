//! Minimal fallback convention: any non-empty subject is accepted.

use super::subject_required;
use crate::data::check::Violation;
use crate::message::CommitMessage;

/// Validates that the message has a subject line.
pub fn validate(message: &CommitMessage) -> Vec<Violation> {
    subject_required(message).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::tests::messages;

    #[test]
    fn empty_message_needs_subject() {
        assert_eq!(
            messages(&validate(&CommitMessage::parse(""))),
            ["Subject line is required."]
        );
        assert_eq!(
            messages(&validate(&CommitMessage::parse("   \nbody"))),
            ["Subject line is required."]
        );
    }

    #[test]
    fn any_subject_passes() {
        let long = format!("Fixed {}.", "everything ".repeat(20));
        assert!(validate(&CommitMessage::parse(long)).is_empty());
        assert!(validate(&CommitMessage::parse("wip\nno blank line")).is_empty());
    }
}
