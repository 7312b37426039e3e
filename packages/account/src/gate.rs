//! Session gate: the profile fetch every protected page runs on mount.

use tracing::warn;

use crate::models::UserProfile;
use crate::service::AccountService;

#[derive(Clone, Debug, PartialEq)]
pub enum GateOutcome {
    Authenticated(UserProfile),
    /// The page should send the user to the login view.
    Unauthenticated,
}

/// Fetch the current user's details once. Any failure is terminal for the visit.
pub async fn check<S: AccountService>(service: &S) -> GateOutcome {
    match service.details().await {
        Ok(profile) => GateOutcome::Authenticated(profile),
        Err(e) => {
            warn!("session check failed, redirecting to login: {e}");
            GateOutcome::Unauthenticated
        }
    }
}
