use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`.
///
/// `session_id` is always serialized, as `null` when the client holds no session yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}

/// Successful response body.
///
/// Both fields are optional on the wire: a missing `reply` is a semantic failure handled by
/// the caller, and `session_id` is present only when the service creates or rotates a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ChatReply {
    /// Returns the issued session id, ignoring empty values.
    pub fn issued_session_id(&self) -> Option<&str> {
        self.session_id
            .as_deref()
            .filter(|value| !value.is_empty())
    }
}
