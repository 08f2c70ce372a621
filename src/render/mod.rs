//! Transcript rendering.

pub mod markup;
pub mod transcript;

pub use markup::{escape_markup, render_assistant, render_plain};
pub use transcript::{EntryHandle, EntryRole, Transcript, TranscriptEntry};
