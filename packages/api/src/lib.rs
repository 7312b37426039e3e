//! # API crate: HTTP access to the account backend
//!
//! Implements [`account::AccountService`] over `reqwest`, so the view-models in
//! `account` can run against the real backend.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Where the backend lives (`ApiConfig`), from env, `config.toml` or defaults |
//! | [`session`] | `Session`, the cookie-carrying client every request goes through |
//! | [`wire`] | Endpoint paths and the JSON envelopes around payloads |
//! | [`error`] | Setup errors (`ApiError`); request failures use `account::ServiceError` |

pub mod config;
pub mod error;
pub mod session;
pub mod wire;

pub use config::ApiConfig;
pub use error::ApiError;
pub use session::Session;
