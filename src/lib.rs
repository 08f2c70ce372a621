//! Transcript rendering core for a single-session chat client.
//!
//! Invariant: every piece of text reaches the transcript escaped. Only assistant replies get
//! formatting, and only the tags produced by [`render_assistant`].
//!
//! # Public API Overview
//! - Render text with [`escape_markup`], [`render_plain`] and [`render_assistant`].
//! - Keep the ordered transcript with [`Transcript`]: entries, the pending indicator and the
//!   empty-state placeholder.
//! - Read environment configuration and install logging via [`config`] and [`logging`].

pub mod config;
pub mod logging;

pub mod render;

/// Text-to-markup helpers.
pub use crate::render::markup::{escape_markup, render_assistant, render_plain};
/// Transcript container and its entry types.
pub use crate::render::transcript::{EntryHandle, EntryRole, Transcript, TranscriptEntry};
