//! Error Types

use thiserror::Error;

/// Shown when the endpoint rejects without a message of its own
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Shown when the endpoint could not be reached or answered garbage
pub const CONNECTIVITY_ERROR: &str = "Unable to reach the server. Please try again.";

/// Failure talking to the authentication endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("login request failed: {0}")]
    Transport(String),
    #[error("malformed login response (status {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },
}

/// Submit attempt refused by the session gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a login request is already in flight")]
    AlreadyPending,
    #[error("already logged in")]
    AlreadyNavigated,
}

/// Image decode failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("failed to read image: {0}")]
    Read(String),
    #[error("image read was aborted")]
    Aborted,
}
