//! Engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ESTEE_DATA_DIR` - Directory holding the JSON state slots (default: `.estee`)
//! - `ESTEE_ASSISTANT_API_KEY` - API key for the shopping assistant; the
//!   assistant is disabled when unset
//! - `ESTEE_ASSISTANT_MODEL` - Assistant model id (default: `claude-sonnet-4-20250514`)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".estee";
const DEFAULT_ASSISTANT_MODEL: &str = "claude-sonnet-4-20250514";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Directory holding the JSON state slots.
    pub data_dir: PathBuf,
    /// Shopping assistant configuration, if an API key is configured.
    pub assistant: Option<AssistantConfig>,
}

/// Shopping assistant configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct AssistantConfig {
    /// API key for the hosted model.
    pub api_key: SecretString,
    /// Model id to request.
    pub model: String,
}

impl std::fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl MarketConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but holds an invalid
    /// value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = data_dir_from(get_optional_env("ESTEE_DATA_DIR"))?;
        let assistant = get_optional_env("ESTEE_ASSISTANT_API_KEY").map(|key| AssistantConfig {
            api_key: SecretString::from(key),
            model: get_env_or_default("ESTEE_ASSISTANT_MODEL", DEFAULT_ASSISTANT_MODEL),
        });

        Ok(Self {
            data_dir,
            assistant,
        })
    }

    /// Configuration rooted at an explicit data directory, with the
    /// assistant disabled. Used by tests.
    #[must_use]
    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            assistant: None,
        }
    }
}

/// Resolve the data directory from the raw `ESTEE_DATA_DIR` value.
///
/// A blank value is rejected rather than silently becoming the current
/// directory; unset falls back to the default.
fn data_dir_from(value: Option<String>) -> Result<PathBuf, ConfigError> {
    match value {
        Some(dir) if dir.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            "ESTEE_DATA_DIR".to_string(),
            "must not be blank".to_string(),
        )),
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(PathBuf::from(DEFAULT_DATA_DIR)),
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
