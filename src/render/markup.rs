//! Text-to-markup transforms for transcript entries.
//!
//! Invariant: every transform escapes `&`, `<` and `>` before it inserts any tag of its own,
//! so user- or service-supplied markup can never reach the transcript unescaped.

use std::sync::OnceLock;

use regex::Regex;

fn bold_regex() -> &'static Regex {
    static CACHED: OnceLock<Regex> = OnceLock::new();
    CACHED.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold regex must compile"))
}

/// Non-greedy single-star span with no embedded `*`.
fn italic_regex() -> &'static Regex {
    static CACHED: OnceLock<Regex> = OnceLock::new();
    CACHED.get_or_init(|| Regex::new(r"\*([^*]+?)\*").expect("italic regex must compile"))
}

pub const LINE_BREAK: &str = "<br>";

/// Escapes the characters that would otherwise open or close markup.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders literal text (user input, error descriptions) with no formatting.
pub fn render_plain(text: &str) -> String {
    escape_markup(text)
}

/// Renders assistant reply text through the constrained markdown subset.
///
/// Steps run in a fixed order: escape, `**bold**`, `*italic*`, then line breaks. Bold must
/// run before italic so a `**` pair is never read as two empty italic markers.
pub fn render_assistant(text: &str) -> String {
    let escaped = escape_markup(text);
    let bolded = bold_regex().replace_all(&escaped, "<strong>$1</strong>");
    let emphasized = italic_regex().replace_all(&bolded, "<em>$1</em>");
    convert_line_breaks(&emphasized)
}

/// Converts both the two-character `\n` escape and real newlines into line breaks.
fn convert_line_breaks(text: &str) -> String {
    text.replace("\\n", LINE_BREAK)
        .replace("\r\n", LINE_BREAK)
        .replace('\n', LINE_BREAK)
}
