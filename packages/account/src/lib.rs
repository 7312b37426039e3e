//! Account domain: the data exchanged with the account API, the password and
//! activity rules, and the page view-models the UI drives.

pub mod activity;
pub mod error;
pub mod gate;
pub mod login;
pub mod models;
pub mod notice;
pub mod password;
pub mod profile;
pub mod register;
pub mod service;

mod memory;
pub use memory::{Call, MemoryAccount};

pub use activity::{ActivityView, sort_by_recency};
pub use error::ServiceError;
pub use gate::GateOutcome;
pub use models::{
    ActivityRecord, LoginRequest, PasswordChangeRequest, Preferences, RegistrationRequest,
    TextSize, UserProfile,
};
pub use notice::Notice;
pub use password::{PasswordCriteria, PasswordForm};
pub use profile::{ProfileEditor, Section};
pub use register::{RegisterOutcome, RegistrationForm};
pub use service::AccountService;
