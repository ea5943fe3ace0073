//! Errors returned by the Checkmate API client

use serde::Deserialize;

use crate::constants::MAX_ERROR_BODY_CHARS;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("could not parse response: {0}")]
    Decode(String),
    #[error("invalid API base URL '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Short message suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Rejected { status, .. } => format!("the server answered with status {}", status),
            ApiError::Http(e) if e.is_timeout() => "the server did not respond in time".to_string(),
            ApiError::Http(e) if e.is_connect() => "could not reach the server".to_string(),
            ApiError::Http(_) => "the request could not be completed".to_string(),
            ApiError::Decode(_) => "the server sent an unexpected response".to_string(),
            ApiError::InvalidBaseUrl(url) => format!("'{}' is not a valid server address", url),
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of an error response body
///
/// The service answers failures with `{"message": "..."}` (or `error`);
/// anything else is passed through, trimmed and shortened.
pub(crate) fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed.message.or(parsed.error) {
            return msg;
        }
    }

    let trimmed = body.trim();
    if trimmed.chars().count() > MAX_ERROR_BODY_CHARS {
        let short: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", short)
    } else {
        trimmed.to_string()
    }
}
