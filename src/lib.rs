//! # commit-guard
//!
//! Validates a commit message against a commit convention before handing it
//! to `git commit`.
//!
//! ## Conventions
//!
//! - `conventional`: `type(scope)!: subject`, with types taken from a
//!   reference document
//! - `gitmoji`: an allowed emoji glyph or `:code:` prefix
//! - `custom`: any non-empty subject
//!
//! ## Quick Start
//!
//! ```rust
//! use commit_guard::message::CommitMessage;
//! use commit_guard::references::References;
//! use commit_guard::validate::{validate, Convention};
//!
//! let references = References::bundled();
//! let message = CommitMessage::from_literal("just a subject");
//! let report = validate(Convention::Custom, &message, &references).unwrap();
//! assert!(report.passes);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod data;
pub mod git;
pub mod message;
pub mod references;
pub mod utils;
pub mod validate;

pub use crate::cli::Cli;
