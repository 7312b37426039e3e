//! User-visible outcome messages, rendered as toasts by the UI.

use crate::error::ServiceError;

/// Shown when a request never completed or its body made no sense.
pub const NETWORK_FAILURE: &str = "An error occurred. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice::Error(message.into())
    }

    /// Error notice for a failed request: the server's message when it sent
    /// one, `fallback` for a bare rejection, and [`NETWORK_FAILURE`] otherwise.
    pub fn from_failure(err: &ServiceError, fallback: &str) -> Self {
        match err {
            ServiceError::Rejected { message: Some(m), .. } => Notice::Error(m.clone()),
            ServiceError::Rejected { message: None, .. } => Notice::Error(fallback.to_string()),
            ServiceError::Transport(_) | ServiceError::Decode(_) => {
                Notice::Error(NETWORK_FAILURE.to_string())
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}
