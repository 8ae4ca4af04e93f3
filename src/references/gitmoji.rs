//! Parser for the gitmoji allowlist document.
//!
//! The document holds a pipe table whose first two columns are the emoji
//! glyph and its `:code:` form. Header and separator rows are skipped.

use std::collections::BTreeSet;

/// Allowed gitmoji glyphs and codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitmojiAllowlist {
    emojis: BTreeSet<String>,
    codes: BTreeSet<String>,
    /// Glyphs ordered longest first for prefix matching.
    by_length: Vec<String>,
}

impl GitmojiAllowlist {
    /// Parses the allowlist table out of a reference document.
    pub fn parse(content: &str) -> Self {
        let mut emojis = BTreeSet::new();
        let mut codes = BTreeSet::new();

        for line in content.lines() {
            let Some(cells) = table_cells(line) else {
                continue;
            };
            let [first, second, ..] = cells.as_slice() else {
                continue;
            };

            if is_header_row(first, second) || first.starts_with("---") {
                continue;
            }

            if !first.is_empty() {
                emojis.insert((*first).to_string());
            }
            let code = second.trim_matches('`');
            if !code.is_empty() {
                codes.insert(code.to_string());
            }
        }

        let mut by_length: Vec<String> = emojis.iter().cloned().collect();
        by_length.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        Self {
            emojis,
            codes,
            by_length,
        }
    }

    /// Whether `emoji` is an allowed glyph.
    pub fn contains_emoji(&self, emoji: &str) -> bool {
        self.emojis.contains(emoji)
    }

    /// Whether `code` (including its colons) is an allowed code.
    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Allowed glyphs, longest first.
    pub fn emojis_longest_first(&self) -> impl Iterator<Item = &str> {
        self.by_length.iter().map(String::as_str)
    }

    /// Number of allowed glyphs.
    pub fn emoji_count(&self) -> usize {
        self.emojis.len()
    }

    /// Number of allowed codes.
    pub fn code_count(&self) -> usize {
        self.codes.len()
    }

    /// Whether either set is empty.
    pub fn is_incomplete(&self) -> bool {
        self.emojis.is_empty() || self.codes.is_empty()
    }
}

/// Splits a `| a | b |` row into trimmed cells.
fn table_cells(line: &str) -> Option<Vec<&str>> {
    if !line.starts_with('|') {
        return None;
    }
    Some(
        line.trim()
            .trim_matches('|')
            .split('|')
            .map(str::trim)
            .collect(),
    )
}

fn is_header_row(first: &str, second: &str) -> bool {
    first.eq_ignore_ascii_case("emoji") && second.eq_ignore_ascii_case("code")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\
# Gitmoji

| Emoji | Code | Description |
| ----- | ---- | ----------- |
| ✨ | `:sparkles:` | Introduce new features. |
| 🐛 | `:bug:` | Fix a bug. |
| ⚡ | `:zap:` | Improve performance. |
| ⚡️ | `:zap:` | Variation selector form. |
|  | `:code-only:` | Code without a glyph. |
| 🎨 |  | Glyph without a code. |
| lonely |
 | 🚫 | `:indented:` | Rows must start with a pipe. |
";

    #[test]
    fn collects_emojis_and_codes() {
        let allowlist = GitmojiAllowlist::parse(DOCUMENT);
        assert!(allowlist.contains_emoji("✨"));
        assert!(allowlist.contains_emoji("🎨"));
        assert!(allowlist.contains_code(":sparkles:"));
        assert!(allowlist.contains_code(":code-only:"));
        assert_eq!(allowlist.emoji_count(), 5);
        assert_eq!(allowlist.code_count(), 4);
    }

    #[test]
    fn skips_header_separator_and_short_rows() {
        let allowlist = GitmojiAllowlist::parse(DOCUMENT);
        assert!(!allowlist.contains_emoji("Emoji"));
        assert!(!allowlist.contains_emoji("-----"));
        assert!(!allowlist.contains_emoji("lonely"));
        assert!(!allowlist.contains_emoji("🚫"));
    }

    #[test]
    fn longest_glyphs_come_first() {
        let allowlist = GitmojiAllowlist::parse(DOCUMENT);
        let ordered: Vec<&str> = allowlist.emojis_longest_first().collect();
        let variation = ordered.iter().position(|e| *e == "⚡️").unwrap();
        let bare = ordered.iter().position(|e| *e == "⚡").unwrap();
        assert!(variation < bare);
    }

    #[test]
    fn table_without_codes_is_incomplete() {
        let allowlist = GitmojiAllowlist::parse("| emoji | code |\n| --- | --- |\n| ✨ | |\n");
        assert!(allowlist.is_incomplete());
    }

    #[test]
    fn empty_document_is_incomplete() {
        assert!(GitmojiAllowlist::parse("").is_incomplete());
    }
}
