//! Environment configuration.

use std::env;

pub const LOG_FILTER_ENV_VAR: &str = "CHAT_LOG";
pub const LOG_FILE_ENV_VAR: &str = "CHAT_LOG_FILE";
pub const DEBUG_ENV_VAR: &str = "CHAT_DEBUG";

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_filter: Option<String>,
    pub log_file: Option<String>,
    pub debug: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            log_filter: env_string_opt(LOG_FILTER_ENV_VAR),
            log_file: env_string_opt(LOG_FILE_ENV_VAR),
            debug: env_flag(DEBUG_ENV_VAR),
        }
    }

    /// Filter directive for the log subscriber. An explicit filter wins over the debug flag.
    pub fn effective_log_filter(&self) -> String {
        match &self.log_filter {
            Some(filter) => filter.clone(),
            None if self.debug => "debug".to_string(),
            None => "warn".to_string(),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
