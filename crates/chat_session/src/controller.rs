//! Session/turn controller.
//!
//! Invariant: at most one turn is pending. The submission gate is taken when a turn begins and
//! released by [`SubmissionGate`]'s `Drop`, so input is re-enabled on every exit path,
//! including when the exchange future is dropped before it resolves.

use std::sync::{Arc, Mutex, MutexGuard};

use chat_api::ChatRequest;
use chat_client::{EntryRole, Transcript};

use crate::host::InputHost;
use crate::transport::ChatTransport;
use crate::turn::{classify_exchange, Turn, TurnId, TurnOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    EmptyInput,
    TurnPending { turn_id: TurnId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(SubmitRejected),
    Settled { turn_id: TurnId, outcome: TurnOutcome },
}

struct ChatState {
    session_id: Option<String>,
    transcript: Transcript,
    pending: Option<Turn>,
    next_turn_id: TurnId,
    host: Box<dyn InputHost>,
}

impl ChatState {
    fn begin_turn(&mut self, text: &str) -> Result<(TurnId, ChatRequest), SubmitRejected> {
        let message = text.trim();
        if message.is_empty() {
            return Err(SubmitRejected::EmptyInput);
        }
        if let Some(pending) = self.pending.as_ref() {
            return Err(SubmitRejected::TurnPending {
                turn_id: pending.id,
            });
        }

        let turn_id = self.next_turn_id;
        self.next_turn_id += 1;

        let mut turn = Turn::new(turn_id, message);
        turn.begin();
        self.pending = Some(turn);

        self.transcript.render(message, EntryRole::User);
        self.host.set_input_enabled(false);
        self.transcript.show_pending();
        self.host.request_render();

        Ok((
            turn_id,
            ChatRequest::new(message, self.session_id.clone()),
        ))
    }

    fn apply_outcome(&mut self, turn_id: TurnId, outcome: &TurnOutcome, issued: Option<String>) {
        self.transcript.clear_pending();
        let (role, text) = outcome.entry();
        self.transcript.render(text, role);

        if let Some(session_id) = issued {
            self.session_id = Some(session_id);
        }

        if let Some(turn) = self.pending.as_mut().filter(|turn| turn.id == turn_id) {
            turn.settle(outcome.clone());
        }
    }

    fn release_turn(&mut self, turn_id: TurnId) {
        if self.pending.as_ref().is_some_and(|turn| turn.id == turn_id) {
            self.pending = None;
        }
        self.transcript.clear_pending();
        self.host.set_input_enabled(true);
        self.host.focus_input();
        self.host.request_render();
    }
}

/// Releases the submission gate of one turn when dropped.
struct SubmissionGate {
    state: Arc<Mutex<ChatState>>,
    turn_id: TurnId,
}

impl Drop for SubmissionGate {
    fn drop(&mut self) {
        let mut state = lock_unpoisoned(&self.state);
        state.release_turn(self.turn_id);
    }
}

pub struct ChatController {
    state: Arc<Mutex<ChatState>>,
    transport: Arc<dyn ChatTransport>,
}

impl ChatController {
    pub fn new(transport: Arc<dyn ChatTransport>, host: Box<dyn InputHost>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ChatState {
                session_id: None,
                transcript: Transcript::new(),
                pending: None,
                next_turn_id: 1,
                host,
            })),
            transport,
        }
    }

    /// Runs one turn for `text`.
    ///
    /// Rejected without side effects when the trimmed text is empty or another turn is
    /// pending. Otherwise the user entry is appended before the exchange is issued, and the
    /// turn settles into exactly one reply or error entry.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let begun = lock_unpoisoned(&self.state).begin_turn(text);
        let (turn_id, request) = match begun {
            Ok(begun) => begun,
            Err(rejected) => {
                tracing::debug!(?rejected, "submission rejected");
                return SubmitOutcome::Rejected(rejected);
            }
        };
        tracing::info!(
            turn_id,
            has_session = request.session_id.is_some(),
            "turn submitted"
        );

        let gate = SubmissionGate {
            state: Arc::clone(&self.state),
            turn_id,
        };

        let result = self.transport.send(&request).await;
        let (outcome, issued) = classify_exchange(result);
        if let Some(session_id) = issued.as_deref() {
            tracing::debug!(turn_id, session_id, "session id issued");
        }

        lock_unpoisoned(&self.state).apply_outcome(turn_id, &outcome, issued);
        drop(gate);

        tracing::info!(turn_id, ok = outcome.is_ok(), "turn settled");
        SubmitOutcome::Settled { turn_id, outcome }
    }

    /// Forgets the session and resets the transcript. A pending turn is not cancelled: its
    /// result still lands in the fresh transcript when it settles.
    pub fn new_chat(&self) {
        let mut state = lock_unpoisoned(&self.state);
        state.session_id = None;
        state.transcript.reset();
        state.host.request_render();
        tracing::info!(
            pending_turn = state.pending.as_ref().map(|turn| turn.id),
            "new chat started"
        );
    }

    pub fn session_id(&self) -> Option<String> {
        lock_unpoisoned(&self.state).session_id.clone()
    }

    pub fn is_pending(&self) -> bool {
        lock_unpoisoned(&self.state).pending.is_some()
    }

    pub fn pending_turn(&self) -> Option<Turn> {
        lock_unpoisoned(&self.state).pending.clone()
    }

    /// Snapshot of the transcript as currently rendered.
    pub fn transcript(&self) -> Transcript {
        lock_unpoisoned(&self.state).transcript.clone()
    }
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
