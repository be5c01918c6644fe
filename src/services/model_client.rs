//! Chat-completion client for the model collaborator.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;

const RETRY_BACKOFF_MS: u64 = 500;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("model API credential is not configured")]
    Configuration,

    #[error("model request failed: {0}")]
    Transport(String),

    #[error("model endpoint returned status {0}")]
    UpstreamStatus(u16),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ModelError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: String,
}

/// Bearer-authenticated POST to a chat-completion endpoint, with a
/// bounded per-request timeout and a small retry loop. Retries cover
/// transport failures only; rejected content goes to the fallback path
/// without another model call.
pub struct HttpModelClient {
    http: reqwest::Client,
    api_url: String,
    api_key: SecretString,
    model_name: String,
    max_tokens: u32,
    retries: u32,
}

impl HttpModelClient {
    pub fn from_config(config: &Config) -> Result<Self, ModelError> {
        let api_key = config.api_key.clone().ok_or(ModelError::Configuration)?;
        let http = reqwest::Client::builder()
            .timeout(config.model_timeout())
            .build()
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key,
            model_name: config.model_name.clone(),
            max_tokens: config.max_tokens,
            retries: config.transport_retries,
        })
    }

    async fn send_once(&self, prompt: &str, temperature: f32) -> Result<String, ModelError> {
        let request = ChatRequest {
            model: &self.model_name,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModelError::UpstreamStatus(status.as_u16()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        // Absent content is handed through as empty text; the normalizer
        // treats it as an empty response.
        Ok(body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default())
    }

    fn retryable(error: &ModelError) -> bool {
        match error {
            ModelError::Transport(_) => true,
            ModelError::UpstreamStatus(status) => *status == 429 || *status >= 500,
            ModelError::Configuration => false,
        }
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ModelError> {
        let mut attempt: u32 = 0;
        loop {
            match self.send_once(prompt, temperature).await {
                Ok(content) => return Ok(content),
                Err(error) if attempt < self.retries && Self::retryable(&error) => {
                    attempt += 1;
                    let delay = Duration::from_millis(RETRY_BACKOFF_MS * u64::from(attempt));
                    log::warn!(
                        "model request failed ({}), retry {}/{} in {:?}",
                        error,
                        attempt,
                        self.retries,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_server_errors_are_retryable() {
        assert!(HttpModelClient::retryable(&ModelError::Transport(
            "connection reset".to_string()
        )));
        assert!(HttpModelClient::retryable(&ModelError::UpstreamStatus(500)));
        assert!(HttpModelClient::retryable(&ModelError::UpstreamStatus(429)));
    }

    #[test]
    fn client_and_config_errors_are_not_retryable() {
        assert!(!HttpModelClient::retryable(&ModelError::UpstreamStatus(401)));
        assert!(!HttpModelClient::retryable(&ModelError::UpstreamStatus(400)));
        assert!(!HttpModelClient::retryable(&ModelError::Configuration));
    }

    #[test]
    fn from_config_without_credential_is_a_configuration_error() {
        let config = Config::test_config();

        match HttpModelClient::from_config(&config) {
            Err(ModelError::Configuration) => {}
            other => panic!("expected Configuration error, got {:?}", other.err()),
        }
    }

    #[test]
    fn chat_response_tolerates_missing_content_and_choices() {
        let body: ChatResponse = serde_json::from_str(r#"{"choices":[{"message":{}}]}"#).unwrap();
        assert_eq!(body.choices[0].message.content, "");

        let body: ChatResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.choices.is_empty());
    }

    #[test]
    fn chat_request_serializes_expected_wire_shape() {
        let request = ChatRequest {
            model: "deepseek-chat",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            temperature: 0.3,
            max_tokens: 1500,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "deepseek-chat");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["max_tokens"], 1500);
    }
}
