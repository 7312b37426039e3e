//! Failures reported by an [`AccountService`](crate::AccountService).

/// Why a request to the account API did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The request never completed (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server rejected the request with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// A 2xx body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ServiceError {
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        ServiceError::Rejected {
            status,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// The `message` the server attached to a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ServiceError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
