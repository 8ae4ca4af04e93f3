//! CLI interface for commit-guard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::debug;

use crate::data::check::{OutputFormat, ValidationReport};
use crate::message::CommitMessage;
use crate::references::References;
use crate::utils::{check_git_repository, resolve_references_dir};
use crate::validate::{self, Convention};

pub(crate) mod formatting;

/// commit-guard: validates a commit message against a convention, then commits it.
#[derive(Parser, Debug)]
#[command(name = "commit-guard")]
#[command(about = "Validates commit messages against a convention before committing", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("source").required(true).args(["message", "file"])))]
pub struct Cli {
    /// Commit convention to validate against.
    #[arg(long, value_enum)]
    pub convention: Convention,

    /// Commit message string.
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Path to a commit message file; lines starting with `#` are ignored.
    #[arg(long, short = 'F', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Validates only; does not run git commit.
    #[arg(long)]
    pub dry_run: bool,

    /// Directory holding conventional-commits.md and gitmoji.md.
    #[arg(long, value_name = "DIR")]
    pub references_dir: Option<PathBuf>,

    /// Output format: text (default), json, yaml.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Executes the CLI command, returning the process exit code.
    ///
    /// Configuration and environment failures are returned as `Err`.
    pub fn execute(self) -> Result<i32> {
        let message = self.read_message()?;

        let references = match resolve_references_dir(self.references_dir.as_deref()) {
            Some(dir) => References::from_dir(dir),
            None => References::bundled(),
        };

        let report = validate::validate(self.convention, &message, &references)?;
        self.output_report(&report)?;

        if !report.passes {
            return Ok(report.exit_code());
        }

        if self.dry_run {
            if self.format == OutputFormat::Text {
                println!("{}", formatting::DRY_RUN_NOTICE);
            }
            return Ok(0);
        }

        let repo = check_git_repository()?;
        let outcome = repo.commit(&message)?;
        debug!("Commit outcome: {outcome:?}");
        Ok(outcome.exit_code())
    }

    /// Obtains the raw commit message from `--message` or `--file`.
    fn read_message(&self) -> Result<CommitMessage> {
        match (&self.message, &self.file) {
            (Some(text), _) => Ok(CommitMessage::from_literal(text)),
            (None, Some(path)) => Ok(CommitMessage::from_file(path)?),
            (None, None) => anyhow::bail!("Either --message or --file is required"),
        }
    }

    /// Prints the report in the selected format.
    fn output_report(&self, report: &ValidationReport) -> Result<()> {
        match formatting::render_structured(report, self.format)
            .context("Failed to render validation report")?
        {
            Some(rendered) => println!("{rendered}"),
            None => {
                for line in formatting::violation_lines(report) {
                    eprintln!("{line}");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_message_arguments() {
        let cli = Cli::try_parse_from([
            "commit-guard",
            "--convention",
            "gitmoji",
            "--message",
            "✨ Add sparkle",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.convention, Convention::Gitmoji);
        assert_eq!(cli.message.as_deref(), Some("✨ Add sparkle"));
        assert!(cli.dry_run);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn message_source_is_required() {
        assert!(Cli::try_parse_from(["commit-guard", "--convention", "custom"]).is_err());
    }

    #[test]
    fn message_and_file_conflict() {
        let result = Cli::try_parse_from([
            "commit-guard",
            "--convention",
            "custom",
            "--message",
            "Subject",
            "--file",
            "COMMIT_EDITMSG",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_convention_is_rejected() {
        let result = Cli::try_parse_from([
            "commit-guard",
            "--convention",
            "angular",
            "--message",
            "Subject",
        ]);
        assert!(result.is_err());
    }
}
