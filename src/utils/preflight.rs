//! Preflight checks for early failure detection
//!
//! Commands call these before validating or committing so configuration and
//! environment problems fail fast with a clear message.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::settings::{get_env_var, CONFIG_DIR_NAME};
use crate::git::GitRepository;

/// Environment variable (or settings key) naming the references directory.
pub const REFERENCES_ENV_VAR: &str = "COMMIT_GUARD_REFERENCES";

/// Sub-directory of [`CONFIG_DIR_NAME`] holding the reference documents.
const REFERENCES_DIR_NAME: &str = "references";

/// Resolve the directory containing the reference documents
///
/// Resolution order:
/// 1. The explicit `--references-dir` argument
/// 2. `COMMIT_GUARD_REFERENCES` from the environment or settings file
/// 3. `.commit-guard/references` in the current directory, if present
/// 4. `~/.commit-guard/references`, if present
///
/// Returns `None` when nothing matches; callers then use the documents
/// compiled into the binary.
pub fn resolve_references_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        debug!("Using references directory from argument: {}", dir.display());
        return Some(dir.to_path_buf());
    }

    if let Ok(dir) = get_env_var(REFERENCES_ENV_VAR) {
        debug!("Using references directory from {REFERENCES_ENV_VAR}: {dir}");
        return Some(PathBuf::from(dir));
    }

    let local = Path::new(CONFIG_DIR_NAME).join(REFERENCES_DIR_NAME);
    let home = dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(REFERENCES_DIR_NAME));
    select_existing(local, home)
}

/// Prefers `local` when it exists, then `home`.
fn select_existing(local: PathBuf, home: Option<PathBuf>) -> Option<PathBuf> {
    if local.is_dir() {
        debug!("Using local references directory: {}", local.display());
        return Some(local);
    }

    match home {
        Some(home) if home.is_dir() => {
            debug!("Using home references directory: {}", home.display());
            Some(home)
        }
        _ => {
            debug!("No references directory found, using bundled documents");
            None
        }
    }
}

/// Validate we're in a git repository
///
/// Returns the repository so the caller can commit into it.
pub fn check_git_repository() -> Result<GitRepository> {
    GitRepository::discover().context(
        "Not in a git repository. Please run this command from within a git repository.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_directory_wins() {
        let dir = Path::new("/somewhere/references");
        assert_eq!(resolve_references_dir(Some(dir)).as_deref(), Some(dir));
    }

    #[test]
    fn existing_local_directory_is_preferred() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join("local");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&local).unwrap();
        std::fs::create_dir_all(&home).unwrap();

        assert_eq!(select_existing(local.clone(), Some(home)), Some(local));
    }

    #[test]
    fn home_directory_is_used_when_local_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join("local");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&home).unwrap();

        assert_eq!(select_existing(local, Some(home.clone())), Some(home));
    }

    #[test]
    fn nothing_found_when_no_directory_exists() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join("local");
        let home = temp_dir.path().join("home");

        assert_eq!(select_existing(local.clone(), Some(home)), None);
        assert_eq!(select_existing(local, None), None);
    }
}
