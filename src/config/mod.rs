//! Configuration management for the lucerna application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. A `.env` file in the working directory is read
//! first (see `main.rs`), so the same variables can live there.
//!
//! # Environment Variables
//!
//! - `GROQ_API_KEY`: API key for the completion endpoint (remote answers are disabled without it)
//! - `GROQ_MODEL`: Chat model identifier (defaults to `llama-3.3-70b-versatile`)
//! - `LUCERNA_API_URL`: Chat-completions endpoint (defaults to Groq's OpenAI-compatible URL)
//! - `LUCERNA_CORPUS`: Path to the corpus JSON file (defaults to `corpus.json`)
//! - `LUCERNA_LITURGY_URL`: Liturgical calendar endpoint
//! - `LUCERNA_REMOTE_LITURGY`: `1`/`true` to fetch the day's liturgy remotely
//! - `LUCERNA_TIMEOUT_SECS`: Completion request timeout in seconds

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_CHAT_MODEL, DEFAULT_COMPLETION_TIMEOUT_SECS, DEFAULT_CORPUS_PATH,
    DEFAULT_LITURGY_URL, ENV_VAR_API_KEY, ENV_VAR_API_URL, ENV_VAR_CORPUS, ENV_VAR_LITURGY_URL,
    ENV_VAR_MODEL, ENV_VAR_REMOTE_LITURGY, ENV_VAR_TIMEOUT_SECS, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the lucerna application.
///
/// # Examples
///
/// Loading configuration from environment variables:
/// ```no_run
/// use lucerna::Config;
///
/// let config = Config::load().expect("Failed to load configuration");
/// config.validate().expect("Invalid configuration");
/// ```
#[derive(Clone)]
pub struct Config {
    /// API key for the completion endpoint. `None` disables remote answers.
    pub api_key: Option<String>,

    /// Chat model identifier sent with every completion request.
    pub model: String,

    /// Chat-completions endpoint.
    pub api_url: String,

    /// Corpus file loaded once at startup.
    pub corpus_path: PathBuf,

    /// Liturgical calendar endpoint used when `remote_liturgy` is set.
    pub liturgy_url: String,

    /// Fetch the liturgy of the day remotely instead of using the weekly table.
    pub remote_liturgy: bool,

    /// Timeout applied to each completion request.
    pub completion_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "api_key",
                &self.api_key.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("corpus_path", &self.corpus_path)
            .field("liturgy_url", &self.liturgy_url)
            .field("remote_liturgy", &self.remote_liturgy)
            .field("completion_timeout", &self.completion_timeout)
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values and no API key.
    fn default() -> Self {
        Config {
            api_key: None,
            model: DEFAULT_CHAT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            liturgy_url: DEFAULT_LITURGY_URL.to_string(),
            remote_liturgy: false,
            completion_timeout: Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The corpus path expansion fails
    /// - `LUCERNA_TIMEOUT_SECS` is not a positive integer
    /// - `LUCERNA_REMOTE_LITURGY` is not a recognizable boolean
    pub fn load() -> AppResult<Self> {
        let api_key = env::var(ENV_VAR_API_KEY)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let model = env::var(ENV_VAR_MODEL).unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());
        let api_url = env::var(ENV_VAR_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let liturgy_url =
            env::var(ENV_VAR_LITURGY_URL).unwrap_or_else(|_| DEFAULT_LITURGY_URL.to_string());

        let corpus_raw =
            env::var(ENV_VAR_CORPUS).unwrap_or_else(|_| DEFAULT_CORPUS_PATH.to_string());
        let corpus_path = shellexpand::full(&corpus_raw)
            .map_err(|e| AppError::Config(format!("Failed to expand corpus path: {}", e)))?;

        let remote_liturgy = match env::var(ENV_VAR_REMOTE_LITURGY) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!(
                    "{} must be a boolean (true/false/1/0), got '{}'",
                    ENV_VAR_REMOTE_LITURGY, raw
                ))
            })?,
            Err(_) => false,
        };

        let completion_timeout = match env::var(ENV_VAR_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::Config(format!(
                        "{} must be a positive integer, got '{}'",
                        ENV_VAR_TIMEOUT_SECS, raw
                    ))
                })?;
                if secs == 0 {
                    return Err(AppError::Config(format!(
                        "{} must be greater than zero",
                        ENV_VAR_TIMEOUT_SECS
                    )));
                }
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
        };

        Ok(Config {
            api_key,
            model,
            api_url,
            corpus_path: PathBuf::from(corpus_path.into_owned()),
            liturgy_url,
            remote_liturgy,
            completion_timeout,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the model is empty, an endpoint is not an
    /// http(s) URL, or the corpus path is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lucerna::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.model = String::new();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model name is empty".to_string()));
        }

        for (name, url) in [("API URL", &self.api_url), ("Liturgy URL", &self.liturgy_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!(
                    "{} must start with http:// or https://, got '{}'",
                    name, url
                )));
            }
        }

        if self.corpus_path.as_os_str().is_empty() {
            return Err(AppError::Config("Corpus path is empty".to_string()));
        }

        Ok(())
    }

    /// Returns true when remote answers can be attempted.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
