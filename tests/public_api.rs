#![allow(unused_imports)]

use chat_client::config::EnvConfig;
use chat_client::logging::init_logging;
use chat_client::render::transcript::{
    empty_state_markup, pending_markup, EMPTY_STATE_TEXT, PENDING_INDICATOR_ID,
    PENDING_INDICATOR_TEXT,
};
use chat_client::{
    escape_markup, render_assistant, render_plain, EntryHandle, EntryRole, Transcript,
    TranscriptEntry,
};
use pretty_assertions::assert_eq;

#[test]
fn public_api_exports_compile() {}

#[test]
fn transcript_markup_follows_a_full_turn() {
    let mut transcript = Transcript::new();
    transcript.render("Is 2 < 3 & 4 > 1?", EntryRole::User);
    transcript.show_pending();
    assert_eq!(
        transcript.to_markup(),
        "<p class=\"message user\"><b>You:</b> Is 2 &lt; 3 &amp; 4 &gt; 1?</p>\
         <p class=\"message loading\" id=\"loading-indicator\"><i>Thinking...</i></p>"
    );

    transcript.clear_pending();
    transcript.render("**Yes**, both hold.\\n*Trivially*", EntryRole::Assistant);
    assert_eq!(
        transcript.last_entry().map(|entry| entry.to_markup()),
        Some(
            "<p class=\"message assistant\"><b>AI:</b> <strong>Yes</strong>, both hold.<br><em>Trivially</em></p>"
                .to_string()
        )
    );
    assert!(!transcript.is_pending_shown());
}
