//! Utility functions and helpers.

pub mod preflight;
pub mod settings;

pub use preflight::{check_git_repository, resolve_references_dir, REFERENCES_ENV_VAR};
pub use settings::{get_env_var, Settings};
