//! Email and password sign-in, the page every failed session check lands on.

use tracing::warn;

use crate::models::LoginRequest;
use crate::notice::Notice;
use crate::service::AccountService;

pub const MISSING_FIELDS: &str = "Email and password are required.";
const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Sign in. `Ok` means the session now carries a credential.
pub async fn submit<S: AccountService>(
    service: &S,
    email: &str,
    password: &str,
) -> Result<(), Notice> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(Notice::error(MISSING_FIELDS));
    }

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    service.login(&request).await.map_err(|e| {
        warn!("login failed: {e}");
        Notice::from_failure(&e, LOGIN_FAILED)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::gate::{self, GateOutcome};
    use crate::memory::{Call, MemoryAccount};
    use crate::models::RegistrationRequest;
    use crate::AccountService;

    #[tokio::test]
    async fn test_blank_fields_skip_request() {
        let account = MemoryAccount::new();
        assert_eq!(
            submit(&account, "  ", "secret").await,
            Err(Notice::error(MISSING_FIELDS))
        );
        assert_eq!(
            submit(&account, "a@b.c", "").await,
            Err(Notice::error(MISSING_FIELDS))
        );
        assert!(account.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_opens_the_gate() {
        let account = MemoryAccount::new();
        account
            .register(&RegistrationRequest {
                name: "Max".into(),
                email: "max@example.com".into(),
                password: "Open#Sesame1".into(),
            })
            .await
            .unwrap();
        assert_eq!(gate::check(&account).await, GateOutcome::Unauthenticated);

        submit(&account, " max@example.com ", "Open#Sesame1")
            .await
            .unwrap();

        assert!(matches!(
            gate::check(&account).await,
            GateOutcome::Authenticated(p) if p.name == "Max"
        ));
        assert!(account.calls().contains(&Call::Login(LoginRequest {
            email: "max@example.com".into(),
            password: "Open#Sesame1".into(),
        })));
    }

    #[tokio::test]
    async fn test_wrong_password_shows_server_message() {
        let account = MemoryAccount::new();
        assert_eq!(
            submit(&account, "ghost@example.com", "whatever").await,
            Err(Notice::error("Invalid email or password"))
        );

        account.fail_next(ServiceError::rejected(401, None));
        assert_eq!(
            submit(&account, "ghost@example.com", "whatever").await,
            Err(Notice::error(LOGIN_FAILED))
        );
    }
}
