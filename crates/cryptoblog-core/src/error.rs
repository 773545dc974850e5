//! Error types shared by the ports and the session.

use std::fmt;

use thiserror::Error;

/// Failure reported by a post backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Backend rejected the request: {0}")]
    Rejected(String),

    #[error("Malformed backend response: {0}")]
    Decode(String),

    #[error("Backend storage error: {0}")]
    Storage(String),
}

/// Which backend call site a swallowed failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Fetch,
    Submit,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Fetch => f.write_str("fetch"),
            FailureKind::Submit => f.write_str("submit"),
        }
    }
}
