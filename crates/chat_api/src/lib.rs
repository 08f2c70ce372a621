//! Transport-only client for the remote chat endpoint.
//!
//! This crate owns request building, response decoding, and error-body parsing for
//! `POST /chat`. It holds no conversation state: the caller supplies the session id on every
//! request and decides what to do with the one the service returns.

pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod url;

pub use client::ChatApiClient;
pub use config::ChatApiConfig;
pub use error::ChatApiError;
pub use payload::{ChatReply, ChatRequest};
pub use url::normalize_chat_url;

pub use reqwest::StatusCode;
