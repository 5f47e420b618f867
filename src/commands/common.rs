//! Shared helpers for command handlers.

use crate::cli::types::ApiKey;
use crate::{Result, StatsError, API_KEY_ENV_VAR};

/// Resolve the Hypixel API key from the CLI flag or the environment.
pub fn resolve_api_key(api_key: Option<ApiKey>) -> Result<ApiKey> {
    match api_key {
        Some(key) => Ok(key),
        None => match std::env::var(API_KEY_ENV_VAR) {
            Ok(raw) => raw.parse(),
            Err(_) => Err(StatsError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            }),
        },
    }
}
