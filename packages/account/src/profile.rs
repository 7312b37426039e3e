//! # Profile editor
//!
//! [`ProfileEditor`] holds the page's local copy of the profile, seeded from the
//! session gate. Edits stay local until [`save`] sends the whole record. A
//! failed save leaves the fields as the user typed them so they can retry.
//!
//! Three collapsible sections have their own open flags. Only personal
//! information starts open.

use tracing::warn;

use crate::models::{Preferences, TextSize, UserProfile};
use crate::notice::Notice;
use crate::service::AccountService;

pub const SAVE_SUCCEEDED: &str = "Profile updated successfully!";
pub const SAVE_FAILED: &str = "Error updating profile";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    PersonalInfo,
    LanguagePreferences,
    Security,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileEditor {
    name: String,
    email: String,
    preferences: Preferences,
    personal_info_open: bool,
    language_open: bool,
    security_open: bool,
}

impl Default for ProfileEditor {
    fn default() -> Self {
        Self::from_profile(UserProfile::default())
    }
}

impl ProfileEditor {
    pub fn from_profile(profile: UserProfile) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
            preferences: profile.preferences,
            personal_info_open: true,
            language_open: false,
            security_open: false,
        }
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

    pub fn language(&self) -> &str {
        &self.preferences.default_language
    }

    pub fn set_language(&mut self, language: String) {
        self.preferences.default_language = language;
    }

    pub fn text_size(&self) -> TextSize {
        self.preferences.text_size
    }

    pub fn set_text_size(&mut self, size: TextSize) {
        self.preferences.text_size = size;
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn is_open(&self, section: Section) -> bool {
        match section {
            Section::PersonalInfo => self.personal_info_open,
            Section::LanguagePreferences => self.language_open,
            Section::Security => self.security_open,
        }
    }

    pub fn toggle(&mut self, section: Section) {
        let flag = match section {
            Section::PersonalInfo => &mut self.personal_info_open,
            Section::LanguagePreferences => &mut self.language_open,
            Section::Security => &mut self.security_open,
        };
        *flag = !*flag;
    }

    /// The full record sent on save.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            preferences: self.preferences.clone(),
        }
    }
}

pub async fn save<S: AccountService>(service: &S, editor: &ProfileEditor) -> Notice {
    match service.update_profile(&editor.to_profile()).await {
        Ok(_) => Notice::success(SAVE_SUCCEEDED),
        Err(e) => {
            warn!("profile update failed: {e}");
            Notice::from_failure(&e, SAVE_FAILED)
        }
    }
}

/// End the session. The caller navigates to login whatever this returns; a
/// `Some` notice describes a failed logout request.
pub async fn logout<S: AccountService>(service: &S) -> Option<Notice> {
    match service.logout().await {
        Ok(()) => None,
        Err(e) => {
            warn!("logout request failed: {e}");
            Some(Notice::error(format!("Logout failed: {e}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::memory::{Call, MemoryAccount};
    use crate::notice::NETWORK_FAILURE;
    use serde_json::json;

    fn editor_for(account: &MemoryAccount) -> ProfileEditor {
        ProfileEditor::from_profile(account.profile().unwrap())
    }

    #[test]
    fn test_sections_start_with_personal_info_open() {
        let mut editor = ProfileEditor::default();
        assert!(editor.is_open(Section::PersonalInfo));
        assert!(!editor.is_open(Section::LanguagePreferences));
        assert!(!editor.is_open(Section::Security));

        editor.toggle(Section::Security);
        editor.toggle(Section::PersonalInfo);
        assert!(editor.is_open(Section::Security));
        assert!(!editor.is_open(Section::PersonalInfo));
        assert!(!editor.is_open(Section::LanguagePreferences));
    }

    #[test]
    fn test_language_edits_preferences() {
        let mut editor = ProfileEditor::default();
        editor.set_language("Spanish".into());
        editor.set_text_size(TextSize::Small);

        let profile = editor.to_profile();
        assert_eq!(profile.preferences.default_language, "Spanish");
        assert_eq!(profile.preferences.text_size, TextSize::Small);
    }

    #[tokio::test]
    async fn test_save_sends_full_record() {
        let account = MemoryAccount::signed_in();
        let mut editor = editor_for(&account);
        editor.set_name("Jane Q. Doe".into());
        editor.set_email("jq@example.com".into());

        let notice = save(&account, &editor).await;

        assert_eq!(notice, Notice::success(SAVE_SUCCEEDED));
        assert_eq!(account.calls(), vec![Call::UpdateProfile(editor.to_profile())]);
        assert_eq!(account.profile().unwrap().email, "jq@example.com");
    }

    #[tokio::test]
    async fn test_save_round_trips_unknown_preferences() {
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "Lee",
            "email": "lee@example.com",
            "preferences": { "defaultLanguage": "ko", "notifications": { "email": false } }
        }))
        .unwrap();
        let account = MemoryAccount::with_profile(profile);
        let mut editor = editor_for(&account);
        editor.set_language("en".into());

        save(&account, &editor).await;

        let stored = serde_json::to_value(account.profile().unwrap()).unwrap();
        assert_eq!(stored["preferences"]["notifications"], json!({ "email": false }));
        assert_eq!(stored["preferences"]["defaultLanguage"], "en");
    }

    #[tokio::test]
    async fn test_validation_message_is_surfaced_verbatim() {
        let account = MemoryAccount::signed_in();
        account.fail_next(ServiceError::rejected(400, Some("Validation failed".into())));
        let mut editor = editor_for(&account);
        editor.set_email("not-an-email".into());

        let notice = save(&account, &editor).await;

        assert_eq!(notice, Notice::error("Validation failed"));
        // Local edits survive the failure.
        assert_eq!(editor.email(), "not-an-email");
        assert_eq!(account.profile().unwrap().email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_save_fallbacks() {
        let account = MemoryAccount::signed_in();
        let editor = editor_for(&account);

        account.fail_next(ServiceError::rejected(500, None));
        assert_eq!(save(&account, &editor).await, Notice::error(SAVE_FAILED));

        account.fail_next(ServiceError::Transport("refused".into()));
        assert_eq!(save(&account, &editor).await, Notice::error(NETWORK_FAILURE));
    }

    #[tokio::test]
    async fn test_logout_reports_failure_without_blocking() {
        let account = MemoryAccount::signed_in();
        assert_eq!(logout(&account).await, None);

        let account = MemoryAccount::signed_in();
        account.fail_next(ServiceError::Transport("offline".into()));
        let notice = logout(&account).await.expect("failure notice");
        assert!(notice.is_error());
        assert_eq!(account.calls(), vec![Call::Logout]);
    }
}
