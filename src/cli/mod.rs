//! CLI support for segql
//!
//! Provides programmatic access to the segql CLI functionality so that a host
//! tool can embed the same import/export commands.

mod check;
mod convert;
mod docs;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use convert::{fields_to_json, json_to_query, query_to_json};
pub use docs::{get_doc_category, get_docs_overview, render_fields, DocCategory};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'segql docs' to see available categories.")]
    UnknownCategory(String),
}
