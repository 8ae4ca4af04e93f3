//! Commit message sourcing and subject/body splitting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while obtaining the raw commit message.
#[derive(Error, Debug)]
pub enum MessageError {
    /// The message file does not exist.
    #[error("Message file not found: {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The message file exists but could not be read.
    #[error("Failed to read message file: {}", path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// A commit message split into its subject line and body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    raw: String,
    subject: String,
    body: Vec<String>,
}

impl CommitMessage {
    /// Parses raw message text without any further normalization.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (subject, body) = split_message(&raw);
        Self { raw, subject, body }
    }

    /// Builds a message from a literal string, trimming surrounding newlines.
    pub fn from_literal(text: &str) -> Self {
        Self::parse(text.trim_matches('\n'))
    }

    /// Reads a message file, discarding `#` comment lines.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MessageError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                MessageError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                MessageError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Ok(Self::parse(strip_comments(&content)))
    }

    /// The message text that validation and the commit operation see.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The trimmed first line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Every line after the subject, right-trimmed.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Whether the message spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.raw.contains('\n')
    }
}

/// Splits raw text into a trimmed subject and right-trimmed body lines.
pub fn split_message(message: &str) -> (String, Vec<String>) {
    let mut lines = message.lines();
    let Some(first) = lines.next() else {
        return (String::new(), Vec::new());
    };

    let subject = first.trim().to_string();
    let body = lines.map(|line| line.trim_end().to_string()).collect();
    (subject, body)
}

/// Drops `#` comment lines, right-trims the rest and removes surrounding
/// blank lines.
pub fn strip_comments(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}

/// Returns true when any body line has visible content.
pub fn has_body(body: &[String]) -> bool {
    body.iter().any(|line| !line.trim().is_empty())
}
