//! Pure rendering helpers for validation reports.

use anyhow::Result;

use crate::data::check::{OutputFormat, ValidationReport, Violation};

/// Message printed when validation passed but the commit was skipped.
pub(crate) const DRY_RUN_NOTICE: &str = "Dry run: commit not executed.";

/// Formats one violation as a `- ` prefixed line.
pub(crate) fn format_violation_line(violation: &Violation) -> String {
    format!("- {violation}")
}

/// Returns the text lines for every violation in check order.
pub(crate) fn violation_lines(report: &ValidationReport) -> Vec<String> {
    report.violations.iter().map(format_violation_line).collect()
}

/// Serializes the report for machine-readable formats.
///
/// Returns `None` for [`OutputFormat::Text`], which is printed line by line
/// instead.
pub(crate) fn render_structured(
    report: &ValidationReport,
    format: OutputFormat,
) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => crate::data::to_json(report).map(Some),
        OutputFormat::Yaml => crate::data::to_yaml(report).map(Some),
    }
}
