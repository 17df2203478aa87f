//! HTTP client for an OpenAI-compatible chat-completions API.
//!
//! One blocking POST per call, no retries. The first choice's message content
//! is returned trimmed; an empty content counts as an invalid response.

use super::{Completion, GenerationParams};
use crate::config::Config;
use crate::errors::{AIError, AppResult};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Response from chat completion. Only the fields we read.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the chat-completions endpoint.
pub struct ChatClient {
    api_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl ChatClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `api_url` - Full chat-completions URL
    /// * `api_key` - Bearer token
    /// * `model` - Model identifier sent with each request
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AIError::Transport)?;

        Ok(Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        })
    }

    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AIError::MissingApiKey` when no key is configured.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let api_key = config.api_key.as_deref().ok_or(AIError::MissingApiKey)?;
        Self::new(
            &config.api_url,
            api_key,
            &config.model,
            config.completion_timeout,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a chat completion request and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API is not reachable or the request times out
    /// - The API returns a non-success status
    /// - The body is not JSON, has no choices, or the content is empty
    pub fn chat(&self, messages: &[Message], params: &GenerationParams) -> AppResult<String> {
        debug!("Sending chat request with model: {}", self.model);

        let request = ChatRequest {
            model: &self.model,
            messages: messages.to_vec(),
            temperature: params.temperature,
            top_p: params.top_p,
            max_tokens: params.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(AIError::Transport)?;

        let status = response.status();
        let body = response.text().map_err(AIError::Transport)?;
        debug!("Raw completion response ({}): {}", status, body);

        if !status.is_success() {
            warn!("Completion API returned HTTP {}", status);
            return Err(AIError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        extract_content(&body)
    }
}

impl Completion for ChatClient {
    fn complete(&self, system: &str, user: &str, params: &GenerationParams) -> AppResult<String> {
        let mut messages = vec![Message::system(system)];
        if !user.is_empty() {
            messages.push(Message::user(user));
        }
        self.chat(&messages, params)
    }
}

/// Pulls `choices[0].message.content` out of a response body.
fn extract_content(body: &str) -> AppResult<String> {
    let parsed: ChatResponse = serde_json::from_str(body).map_err(|e| {
        AIError::InvalidResponse(format!("Failed to parse chat response: {}", e))
    })?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AIError::InvalidResponse("response has no choices".to_string()))?
        .message
        .content
        .unwrap_or_default();

    let content = content.trim();
    if content.is_empty() {
        return Err(AIError::InvalidResponse("empty completion content".to_string()).into());
    }

    debug!("Received chat response ({} chars)", content.chars().count());
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_message_constructors() {
        let system = Message::system("Sei un accompagnatore spirituale");
        assert_eq!(system.role, "system");

        let user = Message::user("Ciao");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Ciao");
    }

    #[test]
    fn test_extract_content_trims() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  Pace a te.\n"}}]}"#;
        assert_eq!(extract_content(body).unwrap(), "Pace a te.");
    }

    #[test]
    fn test_extract_content_shape_errors() {
        for body in [
            "not json",
            r#"{"error":{"message":"bad key"}}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{"message":{"content":"   "}}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
        ] {
            match extract_content(body) {
                Err(AppError::AI(AIError::InvalidResponse(_))) => {}
                other => panic!("expected InvalidResponse for {body}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_config_requires_key() {
        let config = Config::default();
        assert!(matches!(
            ChatClient::from_config(&config),
            Err(AppError::AI(AIError::MissingApiKey))
        ));

        let config = Config {
            api_key: Some("k".to_string()),
            ..Config::default()
        };
        let client = ChatClient::from_config(&config).unwrap();
        assert_eq!(client.model(), config.model);
    }
}
