//! Staff profile payload and its display formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Shown when a profile field is missing.
pub const MISSING_VALUE: &str = "---";
pub const STAFF_CODE_FALLBACK: &str = "Chưa cập nhật";
pub const NEVER_LOGGED_IN: &str = "Chưa đăng nhập";

/// Account status as sent by the backend: older endpoints use a boolean,
/// newer ones a nullable integer code where anything non-zero is active.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AccountStatus {
    Flag(bool),
    Code(i64),
}

impl AccountStatus {
    pub fn is_active(self) -> bool {
        match self {
            AccountStatus::Flag(active) => active,
            AccountStatus::Code(code) => code != 0,
        }
    }

}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffProfile {
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub staff_code: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub status: Option<AccountStatus>,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One label/value line of the profile card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRow {
    pub label: &'static str,
    pub value: String,
    pub highlight: bool,
}

impl ProfileRow {
    fn new(label: &'static str, value: Option<&str>) -> Self {
        Self {
            label,
            value: present(value).unwrap_or(MISSING_VALUE).to_string(),
            highlight: false,
        }
    }
}

impl StaffProfile {
    /// A missing or null status counts as disabled.
    pub fn is_active(&self) -> bool {
        self.status.is_some_and(AccountStatus::is_active)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active() {
            "Hoạt động"
        } else {
            "Vô hiệu hóa"
        }
    }

    /// Rows in display order. The department row only appears when set.
    pub fn rows(&self) -> Vec<ProfileRow> {
        let mut rows = vec![
            ProfileRow::new("Họ và tên", self.full_name.as_deref()),
            ProfileRow {
                label: "Mã nhân viên",
                value: present(self.staff_code.as_deref())
                    .unwrap_or(STAFF_CODE_FALLBACK)
                    .to_string(),
                highlight: true,
            },
            ProfileRow::new("Tên đăng nhập", self.username.as_deref()),
            ProfileRow::new("Email", self.email.as_deref()),
            ProfileRow::new("Số điện thoại", self.phone.as_deref()),
            ProfileRow::new("Vai trò", self.role_name.as_deref()),
        ];
        if let Some(department) = present(self.department.as_deref()) {
            rows.push(ProfileRow::new("Phòng ban", Some(department)));
        }
        rows
    }

    /// Account creation date as `dd/mm/yyyy`.
    pub fn created_on(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(parse_timestamp)
            .map_or_else(
                || MISSING_VALUE.to_string(),
                |created| created.format("%d/%m/%Y").to_string(),
            )
    }

    /// Last login as `HH:MM:SS dd/mm/yyyy`.
    pub fn last_login_label(&self) -> String {
        match present(self.last_login.as_deref()) {
            None => NEVER_LOGGED_IN.to_string(),
            Some(raw) => parse_timestamp(raw).map_or_else(
                || raw.to_string(),
                |login| login.format("%H:%M:%S %d/%m/%Y").to_string(),
            ),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Parses backend timestamps. `LocalDateTime` values come without an offset;
/// offset timestamps keep the wall-clock time they were sent with.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Body of `POST /staff/change-password/{id}`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StaffProfile {
        serde_json::from_str(
            r#"{
                "accountId": 7,
                "fullName": "Nguyễn Văn A",
                "staffCode": "NV007",
                "username": "nva",
                "email": "nva@example.com",
                "phone": "0901234567",
                "roleName": "SERVICE_STAFF",
                "department": "Dịch vụ",
                "status": 1,
                "lastLogin": "2024-05-01T08:30:15.123456",
                "createdAt": "2023-12-25T10:00:00"
            }"#,
        )
        .expect("profile")
    }

    #[test]
    fn rows_follow_display_order() {
        let labels: Vec<_> = sample().rows().iter().map(|row| row.label).collect();
        assert_eq!(
            labels,
            vec![
                "Họ và tên",
                "Mã nhân viên",
                "Tên đăng nhập",
                "Email",
                "Số điện thoại",
                "Vai trò",
                "Phòng ban"
            ]
        );
    }

    #[test]
    fn missing_values_use_fallbacks() {
        let profile = StaffProfile {
            full_name: Some("Trần B".to_string()),
            staff_code: Some("  ".to_string()),
            ..StaffProfile::default()
        };
        let rows = profile.rows();

        assert_eq!(rows.len(), 6, "department row is omitted when unset");
        assert_eq!(rows[1].value, STAFF_CODE_FALLBACK);
        assert!(rows[1].highlight);
        assert_eq!(rows[3].value, MISSING_VALUE);
        assert_eq!(profile.created_on(), MISSING_VALUE);
        assert_eq!(profile.last_login_label(), NEVER_LOGGED_IN);
    }

    #[test]
    fn dates_use_vietnamese_ordering() {
        let profile = sample();
        assert_eq!(profile.created_on(), "25/12/2023");
        assert_eq!(profile.last_login_label(), "08:30:15 01/05/2024");
    }

    #[test]
    fn offset_timestamps_keep_wall_clock() {
        let profile = StaffProfile {
            last_login: Some("2024-05-01T08:30:15+07:00".to_string()),
            created_at: Some("2023-12-25".to_string()),
            ..StaffProfile::default()
        };
        assert_eq!(profile.last_login_label(), "08:30:15 01/05/2024");
        assert_eq!(profile.created_on(), "25/12/2023");
    }

    #[test]
    fn unparseable_last_login_is_shown_raw() {
        let profile = StaffProfile {
            last_login: Some("hôm qua".to_string()),
            ..StaffProfile::default()
        };
        assert_eq!(profile.last_login_label(), "hôm qua");
    }

    #[test]
    fn status_accepts_codes_and_flags() {
        assert_eq!(sample().status_label(), "Hoạt động");

        let disabled: StaffProfile = serde_json::from_str(r#"{"status":0}"#).expect("profile");
        assert_eq!(disabled.status_label(), "Vô hiệu hóa");

        let flagged: StaffProfile = serde_json::from_str(r#"{"status":true}"#).expect("profile");
        assert!(flagged.is_active());

        let absent: StaffProfile = serde_json::from_str("{}").expect("profile");
        assert!(!absent.is_active());
    }

    #[test]
    fn null_status_decodes_as_disabled() {
        let profile: StaffProfile = serde_json::from_str(
            r#"{"accountId":7,"fullName":"Nguyễn Văn A","status":null,"lastLogin":null}"#,
        )
        .expect("profile with null status");
        assert_eq!(profile.status, None);
        assert!(!profile.is_active());
        assert_eq!(profile.status_label(), "Vô hiệu hóa");
        assert_eq!(profile.last_login_label(), NEVER_LOGGED_IN);
    }

    #[test]
    fn change_password_request_uses_camel_case() {
        let request = ChangePasswordRequest {
            old_password: "old".to_string(),
            new_password: "newpass".to_string(),
            confirm_password: "newpass".to_string(),
        };
        let value = serde_json::to_value(&request).expect("json");
        assert_eq!(value["oldPassword"], "old");
        assert_eq!(value["newPassword"], "newpass");
        assert_eq!(value["confirmPassword"], "newpass");
    }
}
