//! Reference document errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failures loading an allowed-values reference document.
///
/// Clonable so a cached failure can be handed out on every later lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// The document could not be read.
    #[error("Missing reference: {} ({reason})", path.display())]
    Missing {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O failure, rendered.
        reason: String,
    },

    /// The `Allowed type list` section yielded no types.
    #[error("Failed to parse conventional type list from {}", path.display())]
    EmptyTypeList {
        /// Document path.
        path: PathBuf,
    },

    /// The gitmoji table yielded no emoji or no codes.
    #[error("Failed to parse gitmoji allowlist from {}", path.display())]
    EmptyAllowlist {
        /// Document path.
        path: PathBuf,
    },
}
