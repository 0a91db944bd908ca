//! API error type

use thiserror::Error;

/// Failures talking to the job API.
///
/// All variants are recoverable: the caller reports them and keeps its
/// state so the user can retry.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("could not decode server response: {0}")]
    Malformed(#[source] reqwest::Error),
}
