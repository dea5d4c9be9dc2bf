//! Errors raised while talking to the user directory.

use thiserror::Error;

/// Failure of a call to the user directory.
///
/// None of these are shown to the user; the form logs them and stays put.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never produced a response (DNS, connection, CORS...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16 },
    /// The body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("user directory unavailable")]
    Unavailable,
}
