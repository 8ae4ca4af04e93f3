//! Settings and configuration utilities.
//!
//! This module reads settings from $HOME/.commit-guard/settings.json and uses
//! them as a fallback for environment variables.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Directory name used for per-user and per-repository configuration.
pub const CONFIG_DIR_NAME: &str = ".commit-guard";

/// Settings loaded from $HOME/.commit-guard/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(CONFIG_DIR_NAME).join("settings.json"))
    }
}

/// Returns an environment variable with fallback to the default settings file.
pub fn get_env_var(key: &str) -> Result<String> {
    if let Ok(value) = env::var(key) {
        return Ok(value);
    }

    let settings = Settings::load()
        .map_err(|err| anyhow::anyhow!("Environment variable not found: {key}").context(err))?;
    settings
        .env
        .get(key)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Environment variable not found: {key}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn settings_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");

        let settings_json = r#"{
            "env": {
                "COMMIT_GUARD_REFERENCES": "/opt/references"
            }
        }"#;
        fs::write(&settings_path, settings_json).unwrap();

        let settings = Settings::load_from_path(&settings_path).unwrap();
        assert_eq!(
            settings.env.get("COMMIT_GUARD_REFERENCES").unwrap(),
            "/opt/references"
        );
    }

    #[test]
    fn missing_settings_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(temp_dir.path().join("absent.json")).unwrap();
        assert!(settings.env.is_empty());
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        fs::write(&settings_path, "{ not json").unwrap();

        let err = Settings::load_from_path(&settings_path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse settings file"));
    }

    #[test]
    fn environment_value_is_returned_first() {
        env::set_var("COMMIT_GUARD_TEST_VAR", "from_env");
        assert_eq!(get_env_var("COMMIT_GUARD_TEST_VAR").unwrap(), "from_env");
        env::remove_var("COMMIT_GUARD_TEST_VAR");
    }
}
