use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::ServiceError;
use crate::models::{
    ActivityRecord, LoginRequest, PasswordChangeRequest, Preferences, RegistrationRequest,
    UserProfile,
};
use crate::service::AccountService;

/// A request seen by [`MemoryAccount`], in the order it arrived.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Details,
    UpdateProfile(UserProfile),
    ChangePassword(PasswordChangeRequest),
    Register(RegistrationRequest),
    Login(LoginRequest),
    Logout,
    Activity,
}

#[derive(Debug, Default)]
struct State {
    /// `None` while signed out.
    profile: Option<UserProfile>,
    accounts: HashMap<String, RegistrationRequest>,
    activity: Vec<ActivityRecord>,
    calls: Vec<Call>,
    fail_next: Option<ServiceError>,
}

/// In-memory AccountService for tests and offline demos.
///
/// Signed-out sessions get a 401 from every endpoint except register and login.
#[derive(Clone, Debug, Default)]
pub struct MemoryAccount {
    state: Arc<Mutex<State>>,
}

impl MemoryAccount {
    /// A signed-out session with no registered accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already signed in as a demo user.
    pub fn signed_in() -> Self {
        Self::with_profile(UserProfile {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            preferences: Preferences {
                default_language: "English".to_string(),
                ..Preferences::default()
            },
        })
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        let account = Self::new();
        account.state.lock().unwrap().profile = Some(profile);
        account
    }

    pub fn with_activity(self, records: Vec<ActivityRecord>) -> Self {
        self.state.lock().unwrap().activity = records;
        self
    }

    /// Make the next request fail with `err`, whatever it is.
    pub fn fail_next(&self, err: ServiceError) {
        self.state.lock().unwrap().fail_next = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// The profile as the "server" currently stores it.
    pub fn profile(&self) -> Option<UserProfile> {
        self.state.lock().unwrap().profile.clone()
    }

    fn begin(&self, call: Call) -> Result<std::sync::MutexGuard<'_, State>, ServiceError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }
}

fn unauthorized() -> ServiceError {
    ServiceError::rejected(401, Some("Unauthorized".to_string()))
}

impl AccountService for MemoryAccount {
    async fn details(&self) -> Result<UserProfile, ServiceError> {
        let state = self.begin(Call::Details)?;
        state.profile.clone().ok_or_else(unauthorized)
    }

    async fn update_profile(&self, profile: &UserProfile) -> Result<Option<String>, ServiceError> {
        let mut state = self.begin(Call::UpdateProfile(profile.clone()))?;
        let Some(stored) = state.profile.as_mut() else {
            return Err(unauthorized());
        };
        *stored = profile.clone();
        Ok(Some("Profile updated".to_string()))
    }

    async fn change_password(
        &self,
        request: &PasswordChangeRequest,
    ) -> Result<Option<String>, ServiceError> {
        let mut state = self.begin(Call::ChangePassword(request.clone()))?;
        let Some(email) = state.profile.as_ref().map(|p| p.email.clone()) else {
            return Err(unauthorized());
        };
        if let Some(account) = state.accounts.get_mut(&email) {
            if account.password != request.current_password {
                return Err(ServiceError::rejected(
                    400,
                    Some("Current password is incorrect".to_string()),
                ));
            }
            account.password = request.new_password.clone();
        }
        Ok(Some("Password changed successfully".to_string()))
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<(), ServiceError> {
        let mut state = self.begin(Call::Register(request.clone()))?;
        if state.accounts.contains_key(&request.email) {
            return Err(ServiceError::rejected(
                409,
                Some("User already exists".to_string()),
            ));
        }
        state.accounts.insert(request.email.clone(), request.clone());
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<(), ServiceError> {
        let mut state = self.begin(Call::Login(request.clone()))?;
        let profile = match state.accounts.get(&request.email) {
            Some(account) if account.password == request.password => UserProfile {
                name: account.name.clone(),
                email: account.email.clone(),
                preferences: Preferences::default(),
            },
            _ => {
                return Err(ServiceError::rejected(
                    401,
                    Some("Invalid email or password".to_string()),
                ))
            }
        };
        state.profile = Some(profile);
        Ok(())
    }

    async fn logout(&self) -> Result<(), ServiceError> {
        let mut state = self.begin(Call::Logout)?;
        state.profile = None;
        Ok(())
    }

    async fn activity(&self) -> Result<Vec<ActivityRecord>, ServiceError> {
        let state = self.begin(Call::Activity)?;
        if state.profile.is_none() {
            return Err(unauthorized());
        }
        Ok(state.activity.clone())
    }
}
