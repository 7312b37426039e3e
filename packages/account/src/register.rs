//! Registration form: name, email and a password held to the strength rules.

use tracing::{debug, warn};

use crate::models::RegistrationRequest;
use crate::notice::Notice;
use crate::password::{PasswordCriteria, CRITERIA_UNMET};
use crate::service::AccountService;

const REGISTER_FAILED: &str = "Registration failed. Please try again";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The account exists; the page moves on to login.
    Registered,
    Failed(Notice),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    name: String,
    email: String,
    password: String,
    criteria: PasswordCriteria,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: String) {
        self.criteria = PasswordCriteria::evaluate(&password);
        self.password = password;
    }

    pub fn criteria(&self) -> PasswordCriteria {
        self.criteria
    }

    pub fn request(&self) -> Result<RegistrationRequest, Notice> {
        if !PasswordCriteria::evaluate(&self.password).all_met() {
            return Err(Notice::error(CRITERIA_UNMET));
        }
        Ok(RegistrationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

pub async fn submit<S: AccountService>(service: &S, form: &RegistrationForm) -> RegisterOutcome {
    let request = match form.request() {
        Ok(request) => request,
        Err(notice) => {
            debug!("registration blocked by unmet criteria");
            return RegisterOutcome::Failed(notice);
        }
    };

    match service.register(&request).await {
        Ok(()) => RegisterOutcome::Registered,
        Err(e) => {
            warn!("registration failed: {e}");
            RegisterOutcome::Failed(Notice::from_failure(&e, REGISTER_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::memory::{Call, MemoryAccount};

    fn filled(password: &str) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_name("Ola".into());
        form.set_email("ola@example.com".into());
        form.set_password(password.into());
        form
    }

    #[tokio::test]
    async fn test_weak_password_blocks_registration() {
        let account = MemoryAccount::new();
        let outcome = submit(&account, &filled("password")).await;
        assert_eq!(outcome, RegisterOutcome::Failed(Notice::error(CRITERIA_UNMET)));
        assert!(account.calls().is_empty());
    }

    #[tokio::test]
    async fn test_registers_with_strong_password() {
        let account = MemoryAccount::new();
        let form = filled("Sunny&Day9");
        assert!(form.criteria().all_met());

        assert_eq!(submit(&account, &form).await, RegisterOutcome::Registered);
        assert_eq!(
            account.calls(),
            vec![Call::Register(RegistrationRequest {
                name: "Ola".into(),
                email: "ola@example.com".into(),
                password: "Sunny&Day9".into(),
            })]
        );
    }

    #[tokio::test]
    async fn test_duplicate_surfaces_server_message() {
        let account = MemoryAccount::new();
        let form = filled("Sunny&Day9");
        submit(&account, &form).await;

        assert_eq!(
            submit(&account, &form).await,
            RegisterOutcome::Failed(Notice::error("User already exists"))
        );
    }

    #[tokio::test]
    async fn test_bare_rejection_uses_fallback() {
        let account = MemoryAccount::new();
        account.fail_next(ServiceError::rejected(502, None));
        assert_eq!(
            submit(&account, &filled("Sunny&Day9")).await,
            RegisterOutcome::Failed(Notice::error(REGISTER_FAILED))
        );
    }
}
