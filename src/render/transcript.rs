//! Transcript container bookkeeping.
//!
//! The container is an ordered list of nodes: rendered entries, at most one pending indicator,
//! and the empty-state placeholder. Appending anything removes the placeholder; only
//! [`Transcript::reset`] puts it back.

use crate::render::markup::{render_assistant, render_plain};

/// Fixed element id of the pending indicator.
pub const PENDING_INDICATOR_ID: &str = "loading-indicator";
pub const PENDING_INDICATOR_TEXT: &str = "Thinking...";
pub const EMPTY_STATE_TEXT: &str = "New conversation started";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryRole {
    User,
    Assistant,
    Error,
}

impl EntryRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Error => "error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You:",
            Self::Assistant => "AI:",
            Self::Error => "Error:",
        }
    }
}

/// Stable handle of one rendered entry. Handles are never reused, even across resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryHandle(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub handle: EntryHandle,
    pub role: EntryRole,
    /// Literal text as submitted or received.
    pub text: String,
    /// Escaped (and for assistant entries, formatted) content markup.
    pub content: String,
}

impl TranscriptEntry {
    pub fn to_markup(&self) -> String {
        format!(
            "<p class=\"message {}\"><b>{}</b> {}</p>",
            self.role.as_str(),
            self.role.label(),
            self.content
        )
    }
}

pub fn empty_state_markup() -> String {
    format!("<p class=\"empty-state\"><i>{EMPTY_STATE_TEXT}</i></p>")
}

pub fn pending_markup() -> String {
    format!(
        "<p class=\"message loading\" id=\"{PENDING_INDICATOR_ID}\"><i>{PENDING_INDICATOR_TEXT}</i></p>"
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    EmptyState,
    Pending,
    Entry(TranscriptEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    nodes: Vec<Node>,
    next_handle: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Creates a transcript showing the empty-state placeholder.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::EmptyState],
            next_handle: 1,
        }
    }

    /// Renders `text` for `role` and appends it as a new entry.
    pub fn render(&mut self, text: &str, role: EntryRole) -> EntryHandle {
        let content = match role {
            EntryRole::Assistant => render_assistant(text),
            EntryRole::User | EntryRole::Error => render_plain(text),
        };
        let handle = EntryHandle(self.next_handle);
        self.next_handle += 1;

        self.remove_empty_state();
        self.nodes.push(Node::Entry(TranscriptEntry {
            handle,
            role,
            text: text.to_string(),
            content,
        }));
        handle
    }

    pub fn show_pending(&mut self) {
        if self.is_pending_shown() {
            return;
        }
        self.remove_empty_state();
        self.nodes.push(Node::Pending);
    }

    pub fn clear_pending(&mut self) {
        self.nodes.retain(|node| !matches!(node, Node::Pending));
    }

    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::EmptyState);
    }

    pub fn is_pending_shown(&self) -> bool {
        self.nodes.iter().any(|node| matches!(node, Node::Pending))
    }

    pub fn is_empty_state_shown(&self) -> bool {
        self.nodes.iter().any(|node| matches!(node, Node::EmptyState))
    }

    pub fn entries(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Entry(entry) => Some(entry),
            _ => None,
        })
    }

    pub fn entry(&self, handle: EntryHandle) -> Option<&TranscriptEntry> {
        self.entries().find(|entry| entry.handle == handle)
    }

    pub fn last_entry(&self) -> Option<&TranscriptEntry> {
        self.entries().last()
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders the whole container, in node order.
    pub fn to_markup(&self) -> String {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::EmptyState => empty_state_markup(),
                Node::Pending => pending_markup(),
                Node::Entry(entry) => entry.to_markup(),
            })
            .collect()
    }

    fn remove_empty_state(&mut self) {
        self.nodes.retain(|node| !matches!(node, Node::EmptyState));
    }
}
