//! HTTP helpers for the portal backend with consistent timeouts and error
//! handling. Feature clients use these helpers to avoid duplicating request
//! setup. Each call is a single request/response; nothing is retried. Bearer
//! tokens are passed in by callers and never logged.

use super::{config::AppConfig, errors::AppError, query::build_url_with_base};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Fetches JSON, attaching the bearer token when one is given.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    bearer: Option<&SecretString>,
) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_bearer(Request::get(&url), bearer)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Fetches a plain-text body, used by endpoints that answer with a message.
pub async fn get_text(path: &str, bearer: Option<&SecretString>) -> Result<String, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_bearer(Request::get(&url), bearer)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_text_response(response).await
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    bearer: Option<&SecretString>,
) -> Result<T, AppError> {
    let response = post(path, body, bearer).await?;
    handle_json_response(response).await
}

/// Posts JSON and returns the plain-text response body.
pub async fn post_json_text<B: Serialize>(
    path: &str,
    body: &B,
    bearer: Option<&SecretString>,
) -> Result<String, AppError> {
    let response = post(path, body, bearer).await?;
    handle_text_response(response).await
}

async fn post<B: Serialize>(
    path: &str,
    body: &B,
    bearer: Option<&SecretString>,
) -> Result<Response, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    send_with_timeout(move |signal| {
        with_bearer(Request::post(&url), bearer)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

fn with_bearer(builder: RequestBuilder, bearer: Option<&SecretString>) -> RequestBuilder {
    match bearer {
        Some(token) => builder.header(
            "Authorization",
            &format!("Bearer {}", token.expose_secret()),
        ),
        None => builder,
    }
}

/// Maps network errors into `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    let url = request.url();
    request.send().await.map_err(|err| {
        let err = map_request_error(err);
        tracing::warn!(%url, error = %err, "request did not complete");
        err
    })
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Returns the body text of successful responses.
async fn handle_text_response(response: Response) -> Result<String, AppError> {
    if response.ok() {
        response
            .text()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to read response: {err}")))
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(url = %response.url(), status, "request rejected by server");
    AppError::http(status, &body)
}
