//! JSON envelopes the account API wraps its payloads in.

use account::{ActivityRecord, UserProfile};
use serde::Deserialize;

pub const DETAILS: &str = "/user/details";
pub const UPDATE: &str = "/user/update";
pub const CHANGE_PASSWORD: &str = "/user/change-password";
pub const REGISTER: &str = "/user/register";
pub const LOGIN: &str = "/user/login";
pub const LOGOUT: &str = "/user/logout";
pub const ACTIVITY: &str = "/user/activity";

/// `{ message }`, sent with most successes and most failures.
#[derive(Debug, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /user/details`
#[derive(Debug, Deserialize)]
pub struct DetailsBody {
    pub user: UserProfile,
}

/// `GET /user/activity`
#[derive(Debug, Deserialize)]
pub struct ActivityBody {
    #[serde(rename = "activityLog")]
    pub activity_log: Vec<ActivityRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_body_tolerates_missing_message() {
        let body: MessageBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }

    #[test]
    fn test_activity_body_requires_log() {
        assert!(serde_json::from_str::<ActivityBody>(r#"{"activity": []}"#).is_err());
        let body: ActivityBody = serde_json::from_str(
            r#"{"activityLog":[{"action":"Login","timestamp":"2024-01-01T00:00:00Z"}]}"#,
        )
        .unwrap();
        assert_eq!(body.activity_log[0].action, "Login");
    }
}
