//! Line-oriented front end: stdin lines are commits, transcript updates are printed as markup.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chat_client::render::transcript::{empty_state_markup, pending_markup};
use chat_client::{EntryHandle, Transcript};
use tokio::sync::mpsc::UnboundedSender;

use crate::host::InputHost;

pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Render,
    Focus,
}

/// [`InputHost`] that forwards render/focus requests to the console loop.
///
/// Requests arrive while the controller holds its state lock, so they are queued rather than
/// handled inline.
pub struct ConsoleHost {
    input_enabled: Arc<AtomicBool>,
    events: UnboundedSender<UiEvent>,
}

impl ConsoleHost {
    pub fn new(events: UnboundedSender<UiEvent>) -> Self {
        Self {
            input_enabled: Arc::new(AtomicBool::new(true)),
            events,
        }
    }

    /// Shared view of the enabled flag for the loop reading stdin.
    pub fn input_enabled(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.input_enabled)
    }
}

impl InputHost for ConsoleHost {
    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled.store(enabled, Ordering::SeqCst);
    }

    fn focus_input(&mut self) {
        let _ = self.events.send(UiEvent::Focus);
    }

    fn request_render(&mut self) {
        let _ = self.events.send(UiEvent::Render);
    }
}

/// Prints only what changed in the transcript since the previous call.
#[derive(Debug, Default)]
pub struct TranscriptPrinter {
    last_printed: Option<EntryHandle>,
    empty_state_shown: bool,
    pending_shown: bool,
}

impl TranscriptPrinter {
    pub fn print_updates(&mut self, transcript: &Transcript, out: &mut dyn Write) -> io::Result<()> {
        let empty_state = transcript.is_empty_state_shown();
        if empty_state && !self.empty_state_shown {
            writeln!(out, "{}", empty_state_markup())?;
        }
        self.empty_state_shown = empty_state;

        let since = self.last_printed;
        for entry in transcript
            .entries()
            .filter(|entry| Some(entry.handle) > since)
        {
            writeln!(out, "{}", entry.to_markup())?;
            self.last_printed = Some(entry.handle);
        }

        let pending = transcript.is_pending_shown();
        if pending && !self.pending_shown {
            writeln!(out, "{}", pending_markup())?;
        }
        self.pending_shown = pending;

        out.flush()
    }
}

/// Takes the input gate for one committed line.
///
/// Returns `false` when input is already disabled. The flag flips before the submit task is
/// spawned, so a line buffered behind it sees the gate closed instead of racing the controller.
pub fn claim_input(input_enabled: &AtomicBool) -> bool {
    input_enabled
        .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
        .is_ok()
}

pub fn print_prompt(out: &mut dyn Write) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_client::EntryRole;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::unbounded_channel;

    fn printed(printer: &mut TranscriptPrinter, transcript: &Transcript) -> String {
        let mut out = Vec::new();
        printer
            .print_updates(transcript, &mut out)
            .expect("writing to a Vec never fails");
        String::from_utf8(out).expect("markup is utf-8")
    }

    #[test]
    fn printer_emits_each_entry_once() {
        let mut transcript = Transcript::new();
        let mut printer = TranscriptPrinter::default();

        assert_eq!(
            printed(&mut printer, &transcript),
            "<p class=\"empty-state\"><i>New conversation started</i></p>\n"
        );

        transcript.render("hi", EntryRole::User);
        transcript.show_pending();
        assert_eq!(
            printed(&mut printer, &transcript),
            "<p class=\"message user\"><b>You:</b> hi</p>\n\
             <p class=\"message loading\" id=\"loading-indicator\"><i>Thinking...</i></p>\n"
        );

        transcript.clear_pending();
        transcript.render("**hello**", EntryRole::Assistant);
        assert_eq!(
            printed(&mut printer, &transcript),
            "<p class=\"message assistant\"><b>AI:</b> <strong>hello</strong></p>\n"
        );
        assert_eq!(printed(&mut printer, &transcript), "");
    }

    #[test]
    fn printer_shows_placeholder_again_after_reset() {
        let mut transcript = Transcript::new();
        let mut printer = TranscriptPrinter::default();
        transcript.render("hi", EntryRole::User);
        printed(&mut printer, &transcript);

        transcript.reset();
        assert_eq!(
            printed(&mut printer, &transcript),
            "<p class=\"empty-state\"><i>New conversation started</i></p>\n"
        );

        transcript.render("again", EntryRole::User);
        assert_eq!(
            printed(&mut printer, &transcript),
            "<p class=\"message user\"><b>You:</b> again</p>\n"
        );
    }

    #[test]
    fn printer_handles_several_new_entries_in_one_pass() {
        let mut transcript = Transcript::new();
        let mut printer = TranscriptPrinter::default();
        printed(&mut printer, &transcript);

        transcript.render("one", EntryRole::User);
        transcript.render("two", EntryRole::Assistant);
        transcript.render("three", EntryRole::Error);
        assert_eq!(
            printed(&mut printer, &transcript),
            "<p class=\"message user\"><b>You:</b> one</p>\n\
             <p class=\"message assistant\"><b>AI:</b> two</p>\n\
             <p class=\"message error\"><b>Error:</b> three</p>\n"
        );
        assert_eq!(printed(&mut printer, &transcript), "");
    }

    #[test]
    fn buffered_line_cannot_claim_input_until_release() {
        let (sender, _receiver) = unbounded_channel();
        let mut host = ConsoleHost::new(sender);
        let enabled = host.input_enabled();

        assert!(claim_input(&enabled));
        assert!(!claim_input(&enabled));

        host.set_input_enabled(false);
        assert!(!claim_input(&enabled));

        host.set_input_enabled(true);
        assert!(claim_input(&enabled));
    }

    #[test]
    fn console_host_tracks_enabled_flag_and_queues_events() {
        let (sender, mut receiver) = unbounded_channel();
        let mut host = ConsoleHost::new(sender);
        let enabled = host.input_enabled();

        host.set_input_enabled(false);
        assert!(!enabled.load(Ordering::SeqCst));
        host.request_render();
        host.set_input_enabled(true);
        host.focus_input();

        assert!(enabled.load(Ordering::SeqCst));
        assert_eq!(receiver.try_recv().ok(), Some(UiEvent::Render));
        assert_eq!(receiver.try_recv().ok(), Some(UiEvent::Focus));
    }
}
