//! Client-side checks for the auth forms. They run before any request is sent.

/// Minimum length the backend accepts for a new password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validates the login form, returning the credentials to submit.
pub fn validate_login(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Vui lòng nhập đầy đủ tên đăng nhập và mật khẩu.");
    }
    Ok((username.to_string(), password.to_string()))
}

/// Validates the reset-password form.
pub fn validate_reset_password(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Mật khẩu phải có ít nhất 6 ký tự.");
    }
    if password != confirmation {
        return Err("Mật khẩu xác nhận không khớp.");
    }
    Ok(())
}

/// Validates the forgot-password email field.
pub fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Vui lòng nhập địa chỉ email hợp lệ.");
    }
    Ok(email.to_string())
}

/// Extracts a usable token from a query value.
pub fn normalize_token(token: Option<String>) -> Option<String> {
    token
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
