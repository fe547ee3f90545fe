// src/github/error.rs
// =============================================================================
// Errors that can end a lookup.
//
// Every failure collapses into one of these variants so the caller can show a
// single message and stay usable for the next lookup.
// =============================================================================

use reqwest::StatusCode;
use std::fmt;

/// Errors produced while fetching a profile and its repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The profile endpoint answered with a non-success status.
    UserNotFound { username: String, status: StatusCode },
    /// The repositories endpoint answered with a non-success status.
    RepositoriesUnavailable { username: String, status: StatusCode },
    /// Transport-level failure (DNS, connection refused, TLS, ...).
    NetworkError(String),
    /// The payload could not be decoded into the expected shape.
    MalformedResponse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::UserNotFound { username, status } => {
                write!(f, "User not found: {} (HTTP {})", username, status.as_u16())
            }
            FetchError::RepositoriesUnavailable { username, status } => write!(
                f,
                "Repositories unavailable for {} (HTTP {})",
                username,
                status.as_u16()
            ),
            FetchError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            FetchError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::NetworkError(error.to_string())
    }
}
