//! Streaming-related error types.

use thiserror::Error;

use crate::traits::HttpError;

/// Message shown in place of the answer when a session fails.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while generating the answer. Please try again.";

/// Why a session ended without a complete answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The request failed or the body could not be read
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    /// The stream closed before the `done` event
    #[error("stream ended before completion")]
    Truncated,
}

impl SessionError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }

    /// HTTP status when the server refused the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            SessionError::Transport(e) => e.status(),
            SessionError::Truncated => None,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::Transport(HttpError::ServerError { .. }) => "E_STREAM_STATUS",
            SessionError::Transport(_) => "E_STREAM_CONN",
            SessionError::Truncated => "E_STREAM_TRUNCATED",
        }
    }
}

/// Errors raised before a session starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The query was empty after trimming
    #[error("query must not be empty")]
    EmptyQuery,
}
