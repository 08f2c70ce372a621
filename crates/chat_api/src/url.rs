/// Default base URL for chat requests.
pub const DEFAULT_CHAT_BASE_URL: &str = "http://127.0.0.1:8000";

pub const CHAT_PATH: &str = "/chat";

/// Normalize a base URL to the chat endpoint.
///
/// Normalization rules:
/// 1) empty input falls back to [`DEFAULT_CHAT_BASE_URL`]
/// 2) trailing slashes are dropped
/// 3) `/chat` is appended unless the path already ends with it
pub fn normalize_chat_url(input: &str) -> String {
    let base = if input.trim().is_empty() {
        DEFAULT_CHAT_BASE_URL
    } else {
        input.trim()
    };

    let trimmed = base.trim_end_matches('/');
    if trimmed.ends_with(CHAT_PATH) {
        return trimmed.to_string();
    }
    format!("{trimmed}{CHAT_PATH}")
}
