//! Chat session core: one ephemeral conversation carried across turns.
//!
//! ## Configuration
//!
//! The `chat` binary reads its transport settings from the environment:
//!
//! - `CHAT_BASE_URL`: service base URL (default `http://127.0.0.1:8000`); requests go to
//!   `<base>/chat`.
//! - `CHAT_TIMEOUT_SEC`: optional positive request timeout. Unset means a hung exchange keeps
//!   input disabled until the transport itself gives up.
//! - `CHAT_USER_AGENT`: optional `User-Agent` override.
//!
//! Logging is configured through `chat_client::config::EnvConfig` (`CHAT_LOG`,
//! `CHAT_LOG_FILE`, `CHAT_DEBUG`).
//!
//! Session contract: the session id is whatever the service last issued. It is sent with
//! every request (`null` before the first issue) and forgotten only by `/new`. Nothing is
//! persisted across runs.

pub mod commands;
pub mod console;
pub mod controller;
pub mod host;
pub mod settings;
pub mod transport;
pub mod turn;

pub use controller::{ChatController, SubmitOutcome, SubmitRejected};
pub use host::InputHost;
pub use transport::ChatTransport;
pub use turn::{SemanticFailure, Turn, TurnFailure, TurnId, TurnOutcome, TurnState};
