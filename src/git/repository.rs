//! Git repository operations

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use git2::Repository;
use tracing::{debug, info};

use super::COMMIT_MSG_FILE;
use crate::message::CommitMessage;

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

/// Result of running `git commit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The commit was recorded
    Committed,
    /// `git commit` exited unsuccessfully with this status code
    Failed {
        /// Exit code reported by git, or 1 when it was killed by a signal
        code: i32,
    },
}

impl CommitOutcome {
    /// Process exit code that mirrors this outcome
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Committed => 0,
            Self::Failed { code } => code,
        }
    }
}

impl GitRepository {
    /// Discover the repository containing the current directory
    pub fn discover() -> Result<Self> {
        Self::discover_at(".")
    }

    /// Discover the repository containing the specified path
    pub fn discover_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).context("Not a git repository")?;
        debug!("Using git directory {}", repo.path().display());

        Ok(Self { repo })
    }

    /// Get the `.git` directory path
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Get workdir path
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Record a commit with the given message using the `git` CLI
    ///
    /// Single-line messages are passed with `-m`; multi-line messages are
    /// written to `COMMIT_EDITMSG` in the git directory and passed with `-F`.
    pub fn commit(&self, message: &CommitMessage) -> Result<CommitOutcome> {
        let mut command = Command::new("git");
        command.current_dir(self.workdir().unwrap_or_else(|| self.path()));
        command.arg("commit");

        if message.is_multiline() {
            let message_path = self.path().join(COMMIT_MSG_FILE);
            fs::write(&message_path, message.raw()).with_context(|| {
                format!(
                    "Failed to write commit message file: {}",
                    message_path.display()
                )
            })?;
            command.arg("-F").arg(&message_path);
        } else {
            command.arg("-m").arg(message.raw());
        }

        info!("Running git commit");
        let status = command.status().context("Failed to run git commit")?;

        if status.success() {
            Ok(CommitOutcome::Committed)
        } else {
            let code = status.code().unwrap_or(1);
            debug!("git commit exited with status {code}");
            Ok(CommitOutcome::Failed { code })
        }
    }
}
