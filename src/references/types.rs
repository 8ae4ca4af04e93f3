//! Parser for the conventional commit type list document.
//!
//! The document is Markdown. Allowed types are the backtick-quoted bullets of
//! the `## Allowed type list` section:
//!
//! ```text
//! ## Allowed type list
//!
//! - `feat` - a new feature
//! - `fix` - a bug fix
//!
//! ## Next section
//! ```

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Heading text of the section holding the allowed types.
pub const TYPE_LIST_HEADING: &str = "Allowed type list";

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TYPE_BULLET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- `(?P<token>[^`]+)`").unwrap());

/// Allowed conventional commit types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeList {
    types: BTreeSet<String>,
}

impl TypeList {
    /// Parses the type list out of a reference document.
    pub fn parse(content: &str) -> Self {
        let mut types = BTreeSet::new();
        let mut in_section = false;

        for line in content.lines() {
            if line.starts_with("## ") {
                if in_section {
                    break;
                }
                in_section = line.trim_end().strip_prefix("## ") == Some(TYPE_LIST_HEADING);
                continue;
            }

            if in_section {
                if let Some(captures) = TYPE_BULLET_PATTERN.captures(line.trim()) {
                    types.insert(captures["token"].to_string());
                }
            }
        }

        Self { types }
    }

    /// Whether `commit_type` is allowed.
    pub fn contains(&self, commit_type: &str) -> bool {
        self.types.contains(commit_type)
    }

    /// Number of allowed types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types were found.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\
# Conventional Commits

Some intro text with `ignored` tokens.

- `outside` is not in the section

## Allowed type list

- `feat` - a new feature
- `fix` - a bug fix
  - `docs` - nested bullets are trimmed first
* `star` bullets are not recognised
- plain bullet without backticks

### Sub heading does not end the section

- `perf`

## Examples

- `example` is in a later section
";

    #[test]
    fn collects_section_bullets_only() {
        let list = TypeList::parse(DOCUMENT);
        for expected in ["docs", "feat", "fix", "perf"] {
            assert!(list.contains(expected), "missing {expected}");
        }
        for excluded in ["outside", "star", "example", "ignored"] {
            assert!(!list.contains(excluded), "unexpected {excluded}");
        }
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn missing_section_is_empty() {
        let list = TypeList::parse("## Other\n\n- `feat`\n");
        assert!(list.is_empty());
    }

    #[test]
    fn heading_must_match_exactly() {
        let list = TypeList::parse("## Allowed type list (draft)\n- `feat`\n");
        assert!(list.is_empty());

        let list = TypeList::parse("##  Allowed type list\n- `feat`\n");
        assert!(list.is_empty());

        let list = TypeList::parse("## Allowed type list  \n- `feat`\n");
        assert!(list.contains("feat"));
    }

    #[test]
    fn contains_checks_membership() {
        let list = TypeList::parse(DOCUMENT);
        assert!(list.contains("feat"));
        assert!(!list.contains("example"));
        assert_eq!(list.len(), 4);
    }
}
