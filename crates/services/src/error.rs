//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while delivering a payload to the logging endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Errors emitted while reading submission configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid endpoint url {raw}: {source}")]
    InvalidEndpoint {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("endpoint url must be http or https: {0}")]
    UnsupportedScheme(String),
}
