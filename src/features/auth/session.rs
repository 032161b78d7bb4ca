//! Persisted session record and the provider seam used by route guards.
//!
//! The login flow writes the record as JSON under [`SESSION_KEY`]; guards read
//! it back through a [`SessionProvider`] and never modify it.

use crate::features::auth::types::LoginResponse;
use serde::{Deserialize, Serialize};

/// Storage key holding the JSON-encoded [`Session`].
pub const SESSION_KEY: &str = "user";
/// Storage key holding the bearer token issued at login.
pub const TOKEN_KEY: &str = "token";

/// Identity and role of the signed-in account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub role_name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl Session {
    /// Parses a stored session. Anything malformed, including a missing id or
    /// role, is reported as no session at all.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring unreadable stored session");
                None
            }
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Name shown in the header, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or_default()
    }
}

impl From<&LoginResponse> for Session {
    fn from(response: &LoginResponse) -> Self {
        Self {
            id: response.id,
            role_name: response.role_name.clone(),
            username: response.username.clone(),
            full_name: response.full_name.clone(),
            phone: response.phone.clone(),
            department: response.department.clone(),
        }
    }
}

/// Read-only access to the persisted session.
pub trait SessionProvider {
    /// Returns the current session, or `None` when it is absent or unreadable.
    fn load(&self) -> Option<Session>;
}

impl<F> SessionProvider for F
where
    F: Fn() -> Option<Session>,
{
    fn load(&self) -> Option<Session> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_reads_login_payload() {
        let raw = r#"{"id":12,"username":"nv.dichvu","fullName":"Nguyễn Văn A","phone":"0912345678","roleName":"SERVICE_STAFF","department":"SERVICE"}"#;
        let session = Session::from_json(raw).expect("session");
        assert_eq!(session.id, 12);
        assert_eq!(session.role_name, "SERVICE_STAFF");
        assert_eq!(session.department.as_deref(), Some("SERVICE"));
        assert_eq!(session.display_name(), "Nguyễn Văn A");
    }

    #[test]
    fn from_json_accepts_minimal_record() {
        let session = Session::from_json(r#"{"id":1,"roleName":"ADMIN"}"#).expect("session");
        assert_eq!(session.username, None);
        assert_eq!(session.display_name(), "");
    }

    #[test]
    fn from_json_treats_malformed_data_as_absent() {
        assert_eq!(Session::from_json(""), None);
        assert_eq!(Session::from_json("not json"), None);
        assert_eq!(Session::from_json("null"), None);
        assert_eq!(Session::from_json(r#"{"id":1}"#), None);
        assert_eq!(Session::from_json(r#"{"roleName":"ADMIN"}"#), None);
        assert_eq!(Session::from_json(r#"{"id":"x","roleName":"ADMIN"}"#), None);
    }

    #[test]
    fn session_round_trips_through_storage_format() {
        let session = Session {
            id: 5,
            role_name: "CASHIER_STAFF".to_string(),
            username: Some("thungan".to_string()),
            full_name: None,
            phone: None,
            department: Some("CASHIER".to_string()),
        };
        let raw = session.to_json().expect("json");
        assert!(raw.contains("\"roleName\":\"CASHIER_STAFF\""));
        assert_eq!(Session::from_json(&raw), Some(session));
    }

    #[test]
    fn closures_act_as_providers() {
        let provider = || Session::from_json(r#"{"id":3,"roleName":"CUSTOMER"}"#);
        assert_eq!(provider.load().map(|s| s.role_name), Some("CUSTOMER".to_string()));
    }
}
