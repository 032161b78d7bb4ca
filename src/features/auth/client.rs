//! Client wrappers for the portal's auth endpoints. These helpers keep
//! endpoint paths in one place; none of them attach a bearer token because the
//! user is not signed in yet when they run.

use crate::{
    app_lib::{
        AppError,
        api::{get_text, post_json, post_json_text},
        query::with_query,
    },
    features::auth::types::{
        ForgotPasswordRequest, LoginRequest, LoginResponse, ResetPasswordRequest,
    },
};

/// Exchanges credentials for a token and the account's session data.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json("/auth/login", request, None).await
}

/// Activates an account with the token from the verification email.
pub async fn verify_account(token: &str) -> Result<(), AppError> {
    get_text(&with_query("/auth/verify", &[("token", token)]), None)
        .await
        .map(|_| ())
}

/// Requests a password reset link; returns the server's confirmation text.
pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<String, AppError> {
    post_json_text("/auth/forgot-password", request, None).await
}

/// Sets a new password using the token from the reset link.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), AppError> {
    post_json_text("/auth/reset-password", request, None)
        .await
        .map(|_| ())
}
