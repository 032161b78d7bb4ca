//! Staff self-service endpoints. Both require the bearer token.

use crate::{
    app_lib::{
        AppError,
        api::{get_json, post_json_text},
    },
    features::staff::types::{ChangePasswordRequest, StaffProfile},
};
use secrecy::SecretString;

pub async fn fetch_profile(account_id: i64, token: &SecretString) -> Result<StaffProfile, AppError> {
    get_json(&format!("/staff/profile/{account_id}"), Some(token)).await
}

/// Returns the server's confirmation text, which may be empty.
pub async fn change_password(
    account_id: i64,
    request: &ChangePasswordRequest,
    token: &SecretString,
) -> Result<String, AppError> {
    post_json_text(
        &format!("/staff/change-password/{account_id}"),
        request,
        Some(token),
    )
    .await
}
