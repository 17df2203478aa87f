//! Remote text generation.
//!
//! This module provides the chat-completion client and the prompt builders
//! used by the answer operations.
//!
//! # Module Structure
//!
//! - `client`: HTTP client for an OpenAI-compatible chat-completions API
//! - `prompts`: System and user prompt builders
//!
//! # Example
//!
//! ```no_run
//! use lucerna::ai::{ChatClient, Completion, GenerationParams};
//! use std::time::Duration;
//!
//! let client = ChatClient::new(
//!     "https://api.groq.com/openai/v1/chat/completions",
//!     "gsk_...",
//!     "llama-3.3-70b-versatile",
//!     Duration::from_secs(30),
//! )?;
//! let text = client.complete("Sei un accompagnatore spirituale.", "Ho paura", &GenerationParams::with_temperature(1.0))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod prompts;

use crate::errors::AppResult;

// Re-export commonly used types
pub use client::{ChatClient, Message};

/// Sampling parameters for one completion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationParams {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl GenerationParams {
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature: Some(temperature),
            ..Self::default()
        }
    }
}

/// Anything that can turn a system prompt and a user prompt into text.
///
/// The HTTP client is the production implementation. Callers treat every
/// error as recoverable and fall back to deterministic text.
pub trait Completion {
    /// Generates text. An empty `user` prompt sends the system message alone.
    fn complete(&self, system: &str, user: &str, params: &GenerationParams) -> AppResult<String>;
}

impl<T: Completion + ?Sized> Completion for &T {
    fn complete(&self, system: &str, user: &str, params: &GenerationParams) -> AppResult<String> {
        (**self).complete(system, user, params)
    }
}

impl<T: Completion + ?Sized> Completion for Box<T> {
    fn complete(&self, system: &str, user: &str, params: &GenerationParams) -> AppResult<String> {
        (**self).complete(system, user, params)
    }
}
