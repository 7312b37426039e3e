//! # Account data exchanged with the account API
//!
//! These types mirror the JSON bodies of the account endpoints, so field names
//! are renamed to the API's camelCase on the wire.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserProfile`] | The `user` object from `GET /user/details`, and the body of `PUT /user/update`. |
//! | [`Preferences`] | Per-user preferences. Unknown keys are kept in `extra` so an update never drops them. |
//! | [`TextSize`] | `small`, `medium` or `large`. Anything else reads as `medium`. |
//! | [`ActivityRecord`] | One entry of `activityLog`, with the timestamp left as sent. |
//! | [`PasswordChangeRequest`] | Body of `PUT /user/change-password`. |
//! | [`RegistrationRequest`] | Body of `POST /user/register`. |
//! | [`LoginRequest`] | Body of `POST /user/login`. |

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Reads an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The signed-in user's editable profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub preferences: Preferences,
}

/// Display and language preferences stored on the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    #[serde(deserialize_with = "null_as_default")]
    pub default_language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dark_mode: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub text_size: TextSize,
    /// Keys this client does not know about, sent back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    Large,
    #[default]
    #[serde(other)]
    Medium,
}

impl TextSize {
    pub const ALL: [TextSize; 3] = [TextSize::Small, TextSize::Medium, TextSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            TextSize::Small => "small",
            TextSize::Medium => "medium",
            TextSize::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextSize::Small => "Small",
            TextSize::Medium => "Medium",
            TextSize::Large => "Large",
        }
    }

    /// Parse a select-box value. Unknown values fall back to medium.
    pub fn parse(value: &str) -> Self {
        match value {
            "small" => TextSize::Small,
            "large" => TextSize::Large,
            _ => TextSize::Medium,
        }
    }
}

/// A single logged user action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub action: String,
    /// ISO-8601 timestamp as sent by the server.
    pub timestamp: String,
}

impl ActivityRecord {
    pub fn new(action: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            timestamp: timestamp.into(),
        }
    }

    /// The absolute instant of this record, if the timestamp parses.
    ///
    /// Accepts RFC 3339 with an offset, a bare date-time (read as UTC), and a
    /// bare date (midnight UTC).
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Human-readable timestamp in the viewer's local time, or the raw string
    /// when it does not parse.
    pub fn display_time(&self) -> String {
        match self.instant() {
            Some(dt) => dt
                .with_timezone(&Local)
                .format("%b %-d, %Y, %H:%M:%S")
                .to_string(),
            None => self.timestamp.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_reads_camel_case() {
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "preferences": {
                "defaultLanguage": "fr",
                "darkMode": true,
                "textSize": "large"
            }
        }))
        .unwrap();

        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.preferences.default_language, "fr");
        assert!(profile.preferences.dark_mode);
        assert_eq!(profile.preferences.text_size, TextSize::Large);
        assert!(profile.preferences.extra.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let profile: UserProfile = serde_json::from_value(json!({ "email": "a@b.c" })).unwrap();
        assert_eq!(profile.name, "");
        assert_eq!(profile.preferences, Preferences::default());
        assert_eq!(profile.preferences.text_size, TextSize::Medium);
    }

    #[test]
    fn test_unknown_text_size_reads_as_medium() {
        let prefs: Preferences = serde_json::from_value(json!({ "textSize": "huge" })).unwrap();
        assert_eq!(prefs.text_size, TextSize::Medium);
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "New",
            "email": null,
            "preferences": null
        }))
        .unwrap();
        assert_eq!(profile.name, "New");
        assert_eq!(profile.email, "");
        assert_eq!(profile.preferences, Preferences::default());

        let prefs: Preferences = serde_json::from_value(json!({
            "defaultLanguage": null,
            "darkMode": null,
            "textSize": null,
            "timezone": null
        }))
        .unwrap();
        assert_eq!(prefs.default_language, "");
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.text_size, TextSize::Medium);
        assert_eq!(prefs.extra.get("timezone"), Some(&Value::Null));
    }

    #[test]
    fn test_text_size_wire_names() {
        for size in TextSize::ALL {
            let wire = serde_json::to_value(size).unwrap();
            assert_eq!(wire, json!(size.as_str()));
            assert_eq!(serde_json::from_value::<TextSize>(wire).unwrap(), size);
        }
    }

    #[test]
    fn test_unknown_preference_keys_survive() {
        let prefs: Preferences = serde_json::from_value(json!({
            "defaultLanguage": "de",
            "timezone": "Europe/Berlin"
        }))
        .unwrap();
        assert_eq!(prefs.extra.get("timezone"), Some(&json!("Europe/Berlin")));

        let out = serde_json::to_value(&prefs).unwrap();
        assert_eq!(out["timezone"], "Europe/Berlin");
        assert_eq!(out["defaultLanguage"], "de");
        assert_eq!(out["textSize"], "medium");
        assert_eq!(out["darkMode"], false);
    }

    #[test]
    fn test_password_change_body() {
        let body = serde_json::to_value(PasswordChangeRequest {
            current_password: "old".into(),
            new_password: "New#pass1".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "currentPassword": "old", "newPassword": "New#pass1" }));
    }

    #[test]
    fn test_instant_formats() {
        let utc = ActivityRecord::new("a", "2024-03-01T10:00:00Z");
        let offset = ActivityRecord::new("b", "2024-03-01T12:00:00+02:00");
        assert_eq!(utc.instant(), offset.instant());

        let bare = ActivityRecord::new("c", "2024-03-01T10:00:00.250");
        assert!(bare.instant().is_some());

        let date = ActivityRecord::new("d", "2024-03-01");
        assert_eq!(
            date.instant().unwrap().to_rfc3339(),
            "2024-03-01T00:00:00+00:00"
        );

        assert!(ActivityRecord::new("e", "yesterday").instant().is_none());
    }

    #[test]
    fn test_display_time_falls_back_to_raw() {
        let rec = ActivityRecord::new("Login", "2024-01-05T09:03:07Z");
        let local = rec.instant().unwrap().with_timezone(&Local);
        assert_eq!(rec.display_time(), local.format("%b %-d, %Y, %H:%M:%S").to_string());
        assert!(!rec.display_time().contains("UTC"));
        assert_eq!(ActivityRecord::new("x", "soon").display_time(), "soon");
    }
}
