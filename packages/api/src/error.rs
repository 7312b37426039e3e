//! Errors raised while setting up a [`Session`](crate::Session).
//!
//! Request failures are reported as [`account::ServiceError`] instead, so the
//! view-models stay independent of the HTTP stack.

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
