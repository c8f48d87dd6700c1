//! Structured error types for octoscout
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("GitHub API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid bearer token: not a valid header value")]
    InvalidToken,

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl GithubError {
    /// Short single-line form for the status bar. Transport errors from
    /// reqwest chain their sources into one line; API errors keep the
    /// status code up front.
    #[must_use]
    pub fn brief(&self) -> String {
        match self {
            Self::Status { status, .. } => format!("API error {status}"),
            Self::InvalidToken => "invalid token".to_string(),
            Self::Http(e) => {
                if e.is_timeout() {
                    "request timed out".to_string()
                } else if e.is_connect() {
                    "connection failed".to_string()
                } else if e.is_decode() {
                    "malformed response".to_string()
                } else {
                    "request failed".to_string()
                }
            }
        }
    }
}
