//! # Password strength rules and the change-password form
//!
//! [`PasswordCriteria::evaluate`] maps a candidate to four independent checks.
//! It is a pure projection, so forms recompute it on every keystroke instead of
//! storing it separately from the password it describes.
//!
//! A submission is allowed only when all four checks hold for the *new*
//! password. [`submit`] re-checks that before anything goes over the wire.

use tracing::{debug, warn};

use crate::models::PasswordChangeRequest;
use crate::notice::Notice;
use crate::service::AccountService;

pub const MIN_LENGTH: usize = 8;

pub const SPECIAL_CHARS: [char; 8] = ['@', '$', '!', '%', '*', '?', '&', '#'];

pub const CRITERIA_UNMET: &str = "Please meet all password criteria.";

const CHANGE_FAILED: &str = "Password change failed. Please try again.";
const CHANGE_SUCCEEDED: &str = "Password updated successfully.";

/// Which strength requirements a candidate password meets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordCriteria {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub special_char: bool,
}

impl PasswordCriteria {
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            special_char: password.chars().any(|c| SPECIAL_CHARS.contains(&c)),
        }
    }

    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.special_char
    }

    /// Requirement labels in display order, each with whether it is met.
    pub fn checklist(&self) -> [(&'static str, bool); 4] {
        [
            ("Password must be at least 8 characters long", self.length),
            ("Password must contain an uppercase letter", self.uppercase),
            ("Password must contain a lowercase letter", self.lowercase),
            (
                "Password must contain a special character (@, $, !, %, *, ?, &, #)",
                self.special_char,
            ),
        ]
    }
}

/// Local state of the change-password page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordForm {
    current_password: String,
    new_password: String,
    criteria: PasswordCriteria,
}

impl PasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn set_current_password(&mut self, value: String) {
        self.current_password = value;
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }

    pub fn set_new_password(&mut self, value: String) {
        self.criteria = PasswordCriteria::evaluate(&value);
        self.new_password = value;
    }

    pub fn criteria(&self) -> PasswordCriteria {
        self.criteria
    }

    /// The request body, or the validation notice when the new password is too weak.
    pub fn request(&self) -> Result<PasswordChangeRequest, Notice> {
        if !PasswordCriteria::evaluate(&self.new_password).all_met() {
            return Err(Notice::error(CRITERIA_UNMET));
        }
        Ok(PasswordChangeRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Validate the form and send the change. Never contacts the server when the
/// new password misses a criterion.
pub async fn submit<S: AccountService>(service: &S, form: &PasswordForm) -> Notice {
    let request = match form.request() {
        Ok(request) => request,
        Err(notice) => {
            debug!("password change blocked by unmet criteria");
            return notice;
        }
    };

    match service.change_password(&request).await {
        Ok(message) => Notice::success(message.unwrap_or_else(|| CHANGE_SUCCEEDED.to_string())),
        Err(e) => {
            warn!("password change failed: {e}");
            Notice::from_failure(&e, CHANGE_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::memory::{Call, MemoryAccount};

    #[test]
    fn test_length_boundary() {
        assert!(!PasswordCriteria::evaluate("Abcde#1").length);
        assert!(PasswordCriteria::evaluate("Abcde#12").length);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(!PasswordCriteria::evaluate("ééééééé").length);
        assert!(PasswordCriteria::evaluate("éééééééé").length);
    }

    #[test]
    fn test_each_special_char() {
        for c in SPECIAL_CHARS {
            let candidate = format!("abc{c}def");
            assert!(
                PasswordCriteria::evaluate(&candidate).special_char,
                "{c} should count as special"
            );
        }
    }

    #[test]
    fn test_other_symbols_are_not_special() {
        for candidate in ["Password123", "pass-word_1", "a^b(c)d+e=f", "tilde~"] {
            assert!(!PasswordCriteria::evaluate(candidate).special_char, "{candidate}");
        }
    }

    #[test]
    fn test_case_checks_are_ascii_letters() {
        let c = PasswordCriteria::evaluate("ÄÖÜ1234#");
        assert!(!c.uppercase);
        assert!(!c.lowercase);

        let c = PasswordCriteria::evaluate("xY");
        assert!(c.uppercase);
        assert!(c.lowercase);
    }

    #[test]
    fn test_abc_fails_three_criteria() {
        let c = PasswordCriteria::evaluate("abc");
        assert!(!c.length);
        assert!(!c.uppercase);
        assert!(c.lowercase);
        assert!(!c.special_char);
        assert!(!c.all_met());
    }

    #[test]
    fn test_checklist_order() {
        let checklist = PasswordCriteria::evaluate("Strong#Pass").checklist();
        assert!(checklist.iter().all(|(_, met)| *met));
        assert!(checklist[0].0.contains("8 characters"));
        assert!(checklist[3].0.contains('#'));
    }

    #[test]
    fn test_form_tracks_new_password_only() {
        let mut form = PasswordForm::new();
        form.set_current_password("Old#Password1".into());
        assert_eq!(form.criteria(), PasswordCriteria::default());

        form.set_new_password("weak".into());
        assert!(!form.criteria().all_met());
        form.set_new_password("Better#One".into());
        assert!(form.criteria().all_met());
    }

    #[tokio::test]
    async fn test_weak_password_issues_no_request() {
        let account = MemoryAccount::signed_in();
        let mut form = PasswordForm::new();
        form.set_current_password("Current#1".into());
        form.set_new_password("abc".into());

        let notice = submit(&account, &form).await;

        assert_eq!(notice, Notice::error(CRITERIA_UNMET));
        assert!(account.calls().is_empty());
    }

    #[tokio::test]
    async fn test_each_missing_criterion_blocks() {
        for weak in ["Short#1", "alllower#case", "ALLUPPER#CASE", "NoSpecials1"] {
            let account = MemoryAccount::signed_in();
            let mut form = PasswordForm::new();
            form.set_new_password(weak.into());
            assert!(submit(&account, &form).await.is_error(), "{weak}");
            assert!(account.calls().is_empty(), "{weak}");
        }
    }

    #[tokio::test]
    async fn test_strong_password_is_sent() {
        let account = MemoryAccount::signed_in();
        let mut form = PasswordForm::new();
        form.set_current_password("Old#Pass1".into());
        form.set_new_password("New#Pass1".into());

        let notice = submit(&account, &form).await;

        assert_eq!(notice, Notice::success("Password changed successfully"));
        assert_eq!(
            account.calls(),
            vec![Call::ChangePassword(PasswordChangeRequest {
                current_password: "Old#Pass1".into(),
                new_password: "New#Pass1".into(),
            })]
        );
    }

    #[tokio::test]
    async fn test_rejection_surfaces_server_message() {
        let account = MemoryAccount::signed_in();
        account.fail_next(ServiceError::rejected(
            401,
            Some("Current password is incorrect".into()),
        ));
        let mut form = PasswordForm::new();
        form.set_new_password("New#Pass1".into());

        let notice = submit(&account, &form).await;
        assert_eq!(notice, Notice::error("Current password is incorrect"));
    }

    #[tokio::test]
    async fn test_bare_rejection_uses_fallback() {
        let account = MemoryAccount::signed_in();
        account.fail_next(ServiceError::rejected(500, None));
        let mut form = PasswordForm::new();
        form.set_new_password("New#Pass1".into());

        assert_eq!(submit(&account, &form).await, Notice::error(CHANGE_FAILED));
    }
}
