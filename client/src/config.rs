use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::POKEAPI_URL;

/// Catalog client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, e.g. `https://pokeapi.co/api/v2/`
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: POKEAPI_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("typedex/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout = match var("TYPEDEX_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.trim()
                    .parse()
                    .context("TYPEDEX_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => defaults.timeout,
        };

        Ok(Self {
            api_url: var("TYPEDEX_API_URL").unwrap_or(defaults.api_url),
            timeout,
            user_agent: var("TYPEDEX_USER_AGENT").unwrap_or(defaults.user_agent),
        })
    }
}
