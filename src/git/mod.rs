//! Git repository discovery and the commit operation.

pub mod repository;

pub use repository::{CommitOutcome, GitRepository};

/// Name of the message file written inside the git directory for
/// multi-line commits.
pub const COMMIT_MSG_FILE: &str = "COMMIT_EDITMSG";
