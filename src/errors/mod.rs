//! Error handling utilities for the lucerna application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Remote failures (`AIError`) never reach the user as a failed answer: the
//! answer operations convert them into an apology, an error record, or the
//! deterministic fallback. Corpus failures at startup are fatal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when talking to the remote
/// chat-completion API.
///
/// # Examples
///
/// ```
/// use lucerna::errors::AIError;
///
/// let error = AIError::InvalidResponse("missing field `choices`".to_string());
/// assert!(format!("{}", error).contains("choices"));
/// ```
#[derive(Debug, Error)]
pub enum AIError {
    /// No API key is configured, so no remote call can be attempted.
    #[error("No API key configured. Set GROQ_API_KEY to enable remote answers.")]
    MissingApiKey,

    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("Completion API unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("Completion API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body was not JSON or lacked the expected fields.
    #[error("Invalid response from completion API: {0}")]
    InvalidResponse(String),
}

/// Represents errors that can occur while loading or validating the corpus file.
///
/// # Examples
///
/// ```
/// use lucerna::errors::CorpusError;
/// use std::path::PathBuf;
///
/// let error = CorpusError::NotFound(PathBuf::from("corpus.json"));
/// assert!(format!("{}", error).contains("corpus.json"));
/// ```
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file does not exist.
    #[error("Corpus file not found: {0}")]
    NotFound(PathBuf),

    /// The corpus file could not be read.
    #[error("Failed to read corpus file {path}: {source}")]
    Io {
        /// Path of the corpus file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The corpus file is not valid JSON.
    #[error("Corpus file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The corpus parsed but some entries are unusable.
    #[error("Corpus validation failed:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
}

/// Represents all possible errors that can occur in the lucerna application.
///
/// # Examples
///
/// ```
/// use lucerna::errors::AppError;
///
/// let error = AppError::Config("Model name is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Model name is empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from the terminal or filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors loading the corpus. Fatal at startup.
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Errors related to the remote completion API.
    #[error("AI error: {0}")]
    AI(#[from] AIError),

    /// Errors serializing an answer for output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_ai_error_wraps_into_app_error() {
        let app_error: AppError = AIError::MissingApiKey.into();
        let message = format!("{}", app_error);
        assert!(message.starts_with("AI error:"));
        assert!(message.contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_status_error_display() {
        let error = AIError::Status {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Completion API returned HTTP 429: rate limited"
        );
    }

    #[test]
    fn test_corpus_invalid_lists_every_issue() {
        let error = CorpusError::Invalid(vec![
            "entry 0: missing field 'fonte'".to_string(),
            "entry 3: field 'nota' is empty".to_string(),
        ]);
        let message = format!("{}", error);
        assert!(message.contains("entry 0"));
        assert!(message.contains("entry 3"));
    }
}
