use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatApiError {
    #[error("invalid request configuration: {0}")]
    InvalidConfig(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success status. Displays the service-provided or synthesized message verbatim.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl ChatApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for failures that never produced an HTTP status from the service.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Status { .. })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: Option<String>,
}

/// Extracts a human-readable message from a failed response body.
///
/// Bodies shaped like `{"error": "..."}` yield the error string. Anything else, including
/// valid JSON without a usable `error` field, yields `HTTP <status>: <reason>`, where `reason`
/// is the phrase the response carried, or the canonical one when it carried none.
pub fn parse_error_message(status: StatusCode, reason: Option<&str>, body: &str) -> String {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| status_fallback_message(status, reason))
}

pub fn status_fallback_message(status: StatusCode, reason: Option<&str>) -> String {
    let reason = reason
        .filter(|reason| !reason.trim().is_empty())
        .or_else(|| status.canonical_reason())
        .unwrap_or("");
    format!("HTTP {}: {reason}", status.as_u16())
        .trim_end()
        .to_string()
}
