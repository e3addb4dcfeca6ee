//! Validate queries and show their canonical form

use crate::Session;
use super::CliError;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query text to validate
    pub query: String,
    /// Regenerate the query after parsing
    pub roundtrip: bool,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Canonical text of the parsed query
    Canonical(String),
}

/// Execute a segql check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let mut session = Session::new();
    session.import(&options.query)?;

    if options.roundtrip {
        Ok(CheckResult::Canonical(session.export()))
    } else {
        Ok(CheckResult::SyntaxValid)
    }
}
