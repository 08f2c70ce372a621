//! One request/response cycle and how its result maps onto the transcript.

use chat_api::{ChatApiError, ChatReply};
use chat_client::EntryRole;

pub type TurnId = u64;

/// Shown in place of a reply when a successful response carries none.
pub const NO_REPLY_MESSAGE: &str = "No response received";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Pending,
    Settled(TurnOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub id: TurnId,
    /// Trimmed, non-empty input text.
    pub input: String,
    pub state: TurnState,
}

impl Turn {
    pub fn new(id: TurnId, input: impl Into<String>) -> Self {
        Self {
            id,
            input: input.into(),
            state: TurnState::Idle,
        }
    }

    pub fn begin(&mut self) {
        if self.state == TurnState::Idle {
            self.state = TurnState::Pending;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == TurnState::Pending
    }

    /// Moves a pending turn to its terminal state.
    pub fn settle(&mut self, outcome: TurnOutcome) {
        if self.is_pending() {
            self.state = TurnState::Settled(outcome);
        }
    }

    pub fn outcome(&self) -> Option<&TurnOutcome> {
        match &self.state {
            TurnState::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Reply(String),
    Failed(TurnFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnFailure {
    /// The exchange never produced a usable HTTP response.
    Transport(String),
    /// The service answered with a non-success status.
    Service { status: u16, message: String },
    /// HTTP success, but the body signals failure.
    Semantic(SemanticFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticFailure {
    MissingReply,
    /// Reply text containing "error" in any case. Legitimate replies that merely mention the
    /// word are misclassified too; kept for compatibility with services that report failures
    /// inside a 200 reply.
    FlaggedReply(String),
}

impl TurnOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Reply(_))
    }

    /// Role and literal text of the transcript entry this outcome produces.
    pub fn entry(&self) -> (EntryRole, &str) {
        match self {
            Self::Reply(text) => (EntryRole::Assistant, text),
            Self::Failed(TurnFailure::Semantic(SemanticFailure::MissingReply)) => {
                (EntryRole::Assistant, NO_REPLY_MESSAGE)
            }
            Self::Failed(TurnFailure::Semantic(SemanticFailure::FlaggedReply(text))) => {
                (EntryRole::Error, text)
            }
            Self::Failed(TurnFailure::Transport(message))
            | Self::Failed(TurnFailure::Service { message, .. }) => (EntryRole::Error, message),
        }
    }
}

/// Classifies one exchange result. Returns the outcome and the session id the service issued,
/// if any.
pub fn classify_exchange(result: Result<ChatReply, ChatApiError>) -> (TurnOutcome, Option<String>) {
    match result {
        Ok(reply) => {
            let issued = reply.issued_session_id().map(str::to_string);
            let outcome = match reply.reply {
                None => TurnOutcome::Failed(TurnFailure::Semantic(SemanticFailure::MissingReply)),
                Some(text) if looks_like_error(&text) => {
                    TurnOutcome::Failed(TurnFailure::Semantic(SemanticFailure::FlaggedReply(text)))
                }
                Some(text) => TurnOutcome::Reply(text),
            };
            (outcome, issued)
        }
        Err(ChatApiError::Status { status, message }) => (
            TurnOutcome::Failed(TurnFailure::Service {
                status: status.as_u16(),
                message,
            }),
            None,
        ),
        Err(error) => (
            TurnOutcome::Failed(TurnFailure::Transport(error.to_string())),
            None,
        ),
    }
}

fn looks_like_error(text: &str) -> bool {
    text.to_lowercase().contains("error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_api::StatusCode;

    fn reply(text: Option<&str>, session_id: Option<&str>) -> ChatReply {
        ChatReply {
            reply: text.map(str::to_string),
            session_id: session_id.map(str::to_string),
        }
    }

    #[test]
    fn plain_reply_is_assistant_entry() {
        let (outcome, issued) = classify_exchange(Ok(reply(Some("hello"), Some("abc"))));
        assert_eq!(outcome, TurnOutcome::Reply("hello".to_string()));
        assert_eq!(outcome.entry(), (EntryRole::Assistant, "hello"));
        assert_eq!(issued.as_deref(), Some("abc"));
    }

    #[test]
    fn reply_mentioning_error_is_flagged_even_when_benign() {
        let (outcome, _) = classify_exchange(Ok(reply(
            Some("No error here, operation complete"),
            None,
        )));
        assert!(!outcome.is_ok());
        assert_eq!(
            outcome.entry(),
            (EntryRole::Error, "No error here, operation complete")
        );
    }

    #[test]
    fn flagging_ignores_case() {
        let (outcome, _) = classify_exchange(Ok(reply(Some("Upstream ERROR: quota"), None)));
        assert_eq!(outcome.entry().0, EntryRole::Error);
    }

    #[test]
    fn missing_reply_renders_fixed_message() {
        let (outcome, issued) = classify_exchange(Ok(reply(None, Some("s-9"))));
        assert_eq!(
            outcome,
            TurnOutcome::Failed(TurnFailure::Semantic(SemanticFailure::MissingReply))
        );
        assert_eq!(outcome.entry(), (EntryRole::Assistant, NO_REPLY_MESSAGE));
        assert_eq!(issued.as_deref(), Some("s-9"));
    }

    #[test]
    fn status_error_becomes_service_failure() {
        let (outcome, issued) = classify_exchange(Err(ChatApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        }));
        assert_eq!(
            outcome,
            TurnOutcome::Failed(TurnFailure::Service {
                status: 500,
                message: "boom".to_string(),
            })
        );
        assert_eq!(outcome.entry(), (EntryRole::Error, "boom"));
        assert_eq!(issued, None);
    }

    #[test]
    fn other_errors_become_transport_failures() {
        let (outcome, _) = classify_exchange(Err(ChatApiError::InvalidConfig(
            "invalid header key: x y".to_string(),
        )));
        assert_eq!(
            outcome.entry(),
            (
                EntryRole::Error,
                "invalid request configuration: invalid header key: x y"
            )
        );
    }

    #[test]
    fn turn_walks_idle_pending_settled() {
        let mut turn = Turn::new(1, "hi");
        assert_eq!(turn.state, TurnState::Idle);
        turn.begin();
        assert!(turn.is_pending());
        turn.settle(TurnOutcome::Reply("ok".to_string()));
        assert!(turn.outcome().is_some_and(TurnOutcome::is_ok));

        turn.settle(TurnOutcome::Failed(TurnFailure::Transport("late".to_string())));
        assert_eq!(turn.outcome(), Some(&TurnOutcome::Reply("ok".to_string())));
    }
}
