//! Client configuration read from the environment.

use std::time::Duration;

use quiz_core::DEFAULT_OPTION_COUNT;

use crate::error::{ClientError, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to the quiz backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub option_count: usize,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: None,
            option_count: DEFAULT_OPTION_COUNT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Load configuration from process environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("FLASHQUIZ_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ClientError::Config("FLASHQUIZ_API_URL must be set".to_string()))?;

        let mut config = Self::new(api_url.trim());
        config.token = lookup("FLASHQUIZ_TOKEN").filter(|v| !v.is_empty());

        if let Some(raw) = lookup("FLASHQUIZ_OPTION_COUNT") {
            config.option_count = match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(ClientError::Config(format!(
                        "FLASHQUIZ_OPTION_COUNT must be a positive integer, got {raw:?}"
                    )))
                }
            };
        }

        if let Some(raw) = lookup("FLASHQUIZ_TIMEOUT_SECS") {
            config.timeout = match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ClientError::Config(format!(
                        "FLASHQUIZ_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                    )))
                }
            };
        }

        Ok(config)
    }
}
