use std::fmt;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: Option<String> },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Builds an HTTP error from a raw response body.
    pub fn http(status: u16, body: &str) -> Self {
        AppError::Http {
            status,
            message: extract_error_message(body),
        }
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message reported by the server in the response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Http {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text shown to the user: the server's own message when it sent one,
    /// otherwise the view-specific fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http {
                status,
                message: Some(message),
            } => write!(formatter, "Request failed ({status}): {message}"),
            AppError::Http {
                status,
                message: None,
            } => write!(formatter, "Request failed ({status})"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Pulls a user-facing message out of an error body.
///
/// The backend answers either with a JSON object carrying a `message` field,
/// a JSON string, or plain text. Anything else yields `None`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(serde_json::Value::as_str)
            .and_then(sanitize_message),
        Ok(serde_json::Value::String(text)) => sanitize_message(&text),
        Ok(_) => None,
        Err(_) => sanitize_message(trimmed),
    }
}

/// Trims and truncates a message; empty input yields `None`.
fn sanitize_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}
