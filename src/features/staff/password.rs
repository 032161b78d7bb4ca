//! Change-password form rules and the mapping from failed requests to the
//! message shown under the form.

use crate::{
    app_lib::AppError,
    features::{auth::forms::MIN_PASSWORD_LEN, staff::types::ChangePasswordRequest},
};

pub const SUCCESS_FALLBACK: &str = "Đổi mật khẩu thành công!";
pub const MISSING_SESSION: &str = "Lỗi xác thực. Vui lòng đăng nhập lại.";

/// Checks the form in the order the user sees the errors: confirmation first,
/// then length.
pub fn validate_change_password(
    old_password: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<ChangePasswordRequest, &'static str> {
    if new_password != confirm_password {
        return Err("Mật khẩu mới và xác nhận mật khẩu không khớp.");
    }
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Mật khẩu mới phải có ít nhất 6 ký tự.");
    }
    Ok(ChangePasswordRequest {
        old_password: old_password.to_string(),
        new_password: new_password.to_string(),
        confirm_password: confirm_password.to_string(),
    })
}

/// What the view does after a failed change-password request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangePasswordFailure {
    /// The token was rejected; the session must be cleared and the user sent
    /// back to the login page.
    SessionExpired,
    Message(String),
}

impl ChangePasswordFailure {
    pub fn message(&self) -> &str {
        match self {
            ChangePasswordFailure::SessionExpired => "Phiên đã hết hạn. Vui lòng đăng nhập lại.",
            ChangePasswordFailure::Message(message) => message,
        }
    }
}

pub fn classify_failure(error: &AppError) -> ChangePasswordFailure {
    let message = match error.status() {
        Some(401) => return ChangePasswordFailure::SessionExpired,
        Some(403) => "Bạn không có quyền thực hiện thao tác này.".to_string(),
        Some(404) => error.user_message("Không tìm thấy tài khoản."),
        Some(400) => error.user_message("Dữ liệu không hợp lệ."),
        _ => error.user_message("Đã xảy ra lỗi. Vui lòng thử lại sau."),
    };
    ChangePasswordFailure::Message(message)
}

/// Success text: the server's body when it sent one.
pub fn success_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        SUCCESS_FALLBACK.to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_is_reported_before_length() {
        assert_eq!(
            validate_change_password("old", "abc", "abd"),
            Err("Mật khẩu mới và xác nhận mật khẩu không khớp.")
        );
        assert_eq!(
            validate_change_password("old", "abc", "abc"),
            Err("Mật khẩu mới phải có ít nhất 6 ký tự.")
        );
    }

    #[test]
    fn valid_form_builds_request() {
        let request = validate_change_password("cũ123", "mới123", "mới123").expect("valid");
        assert_eq!(request.old_password, "cũ123");
        assert_eq!(request.new_password, "mới123");
        assert_eq!(request.confirm_password, "mới123");
    }

    #[test]
    fn unauthorized_expires_session() {
        let failure = classify_failure(&AppError::http(401, "Unauthorized"));
        assert_eq!(failure, ChangePasswordFailure::SessionExpired);
        assert_eq!(failure.message(), "Phiên đã hết hạn. Vui lòng đăng nhập lại.");
    }

    #[test]
    fn forbidden_ignores_body() {
        let failure = classify_failure(&AppError::http(403, "Access denied"));
        assert_eq!(failure.message(), "Bạn không có quyền thực hiện thao tác này.");
    }

    #[test]
    fn not_found_and_bad_request_prefer_body() {
        assert_eq!(
            classify_failure(&AppError::http(404, "")).message(),
            "Không tìm thấy tài khoản."
        );
        assert_eq!(
            classify_failure(&AppError::http(400, "Mật khẩu cũ không đúng")).message(),
            "Mật khẩu cũ không đúng"
        );
        assert_eq!(
            classify_failure(&AppError::http(400, "")).message(),
            "Dữ liệu không hợp lệ."
        );
    }

    #[test]
    fn other_failures_use_generic_fallback() {
        assert_eq!(
            classify_failure(&AppError::Network("offline".to_string())).message(),
            "Đã xảy ra lỗi. Vui lòng thử lại sau."
        );
        assert_eq!(
            classify_failure(&AppError::http(500, r#"{"message":"Lỗi máy chủ"}"#)).message(),
            "Lỗi máy chủ"
        );
    }

    #[test]
    fn success_message_falls_back_on_empty_body() {
        assert_eq!(success_message("  "), SUCCESS_FALLBACK);
        assert_eq!(success_message("Đã đổi mật khẩu"), "Đã đổi mật khẩu");
    }
}
