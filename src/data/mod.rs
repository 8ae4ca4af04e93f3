//! Data processing and serialization.

use anyhow::{Context, Result};
use serde::Serialize;

pub mod check;

pub use check::*;

/// Serializes data structure to a YAML string.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    serde_yaml::to_string(data).context("Failed to serialize to YAML")
}

/// Serializes data structure to a pretty-printed JSON string.
pub fn to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize to JSON")
}
