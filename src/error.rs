//! Error types for the search pipeline

use thiserror::Error;

/// Errors surfaced to the caller of a word search
#[derive(Debug, Error)]
pub enum SearchError {
    /// No API key has been configured
    #[error("no API key configured")]
    MissingCredential,

    /// No model has been selected
    #[error("no model selected")]
    NoModelSelected,

    /// The provider returned a non-success HTTP status
    #[error("upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// The provider returned a success response missing expected fields
    #[error("malformed provider response")]
    MalformedResponse,

    /// The request never completed (DNS, connect, timeout, ...)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Failure to extract a result list from completion text.
///
/// Stays internal to the pipeline: the orchestrator degrades it to an
/// empty result list instead of propagating it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No JSON array of objects found in the text
    #[error("no JSON array found in completion text")]
    NoArrayFound,

    /// The candidate substring was not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The top-level JSON value was not an array
    #[error("top-level JSON value is not an array")]
    NotAnArray,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::Upstream {
            status: 401,
            message: "invalid key".to_string(),
        };
        assert_eq!(err.to_string(), "upstream error (401): invalid key");
        assert_eq!(
            SearchError::MissingCredential.to_string(),
            "no API key configured"
        );
    }
}
