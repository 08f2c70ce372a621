//! Transport settings read from the environment.

use std::time::Duration;

use chat_api::url::DEFAULT_CHAT_BASE_URL;
use chat_api::ChatApiConfig;
use thiserror::Error;

pub const BASE_URL_ENV_VAR: &str = "CHAT_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "CHAT_TIMEOUT_SEC";
pub const USER_AGENT_ENV_VAR: &str = "CHAT_USER_AGENT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("CHAT_TIMEOUT_SEC must be a positive integer number of seconds, got '{value}'")]
    InvalidTimeout { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            timeout: None,
            user_agent: None,
        }
    }
}

impl TransportSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let timeout = match non_empty(TIMEOUT_ENV_VAR) {
            None => None,
            Some(value) => match value.parse::<u64>() {
                Ok(seconds) if seconds > 0 => Some(Duration::from_secs(seconds)),
                _ => return Err(SettingsError::InvalidTimeout { value }),
            },
        };

        Ok(Self {
            base_url: non_empty(BASE_URL_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_CHAT_BASE_URL.to_string()),
            timeout,
            user_agent: non_empty(USER_AGENT_ENV_VAR),
        })
    }

    pub fn into_api_config(self) -> ChatApiConfig {
        let mut config = ChatApiConfig::new(self.base_url);
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }
        config
    }
}
