use thiserror::Error;

/// Errors raised at the boundary of the analysis core.
///
/// The analysis functions themselves never fail: an empty window yields a
/// zero-filled summary and invalid fields are skipped. These variants only
/// come from resolving user input (dates, variable names, configuration).
#[derive(Debug, Error)]
pub enum ClimateError {
    #[error("Failed to parse '{0}' as a calendar date (expected YYYY-MM-DD)")]
    DateParsing(String),

    #[error("Unknown weather variable '{0}'")]
    UnknownVariable(String),

    #[error("Invalid analysis configuration")]
    InvalidConfig(#[from] serde_json::Error),
}
