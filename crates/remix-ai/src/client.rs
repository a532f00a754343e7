//! HTTP client for LM Studio's OpenAI-compatible chat completion API.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::AiConfig;
use crate::prompt::ChatPrompt;

/// Client for a locally hosted chat completion endpoint.
pub struct LmStudioClient {
    client: reqwest::Client,
    config: AiConfig,
}

/// Errors from the inference client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The endpoint could not be connected to at all.
    #[error("inference endpoint unreachable at {0}. Is LM Studio running with the server started?")]
    Unreachable(String),

    /// The bounded wait for a completion elapsed.
    #[error("inference timed out after {0}s")]
    Timeout(u64),

    /// The endpoint replied, but without a usable text payload.
    #[error("endpoint returned no usable completion: {0}")]
    MalformedResponse(String),

    /// The endpoint rejected the request.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Any other transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// OpenAI-compatible chat completion request.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: i32,
    stream: bool,
}

/// Chat message in OpenAI format.
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI-compatible chat completion response.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl LmStudioClient {
    /// Create a new client for the configured endpoint.
    pub fn new(config: AiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the model the client requests.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Startup diagnostic: confirm the endpoint answers at all.
    ///
    /// Hits the models listing with a short timeout. Separate from
    /// [`complete`](Self::complete) so callers can check connectivity
    /// without spending an inference.
    pub async fn check_connection(&self) -> Result<(), ClientError> {
        let url = format!("{}/models", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::Unreachable(self.config.base_url.clone())
                } else {
                    ClientError::Http(e)
                }
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Unreachable(self.config.base_url.clone()))
        }
    }

    /// Send one chat completion request and return the raw completion text.
    ///
    /// A single attempt per call: a local model is slow and expensive, so
    /// retrying is the caller's decision, never the gateway's. The only
    /// bound is the configured request timeout.
    pub async fn complete(&self, prompt: &ChatPrompt) -> Result<String, ClientError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
            stream: false,
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let timeout_secs = self.config.request_timeout_secs;

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .timeout(Duration::from_secs(timeout_secs))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::Unreachable(self.config.base_url.clone())
                } else if e.is_timeout() {
                    ClientError::Timeout(timeout_secs)
                } else {
                    ClientError::Http(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ClientError::MalformedResponse("no completion text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_carries_config() {
        let config = AiConfig::builder()
            .base_url("http://192.168.1.20:1234/v1")
            .model("llama-3.2-3b")
            .build();
        let client = LmStudioClient::new(config);
        assert_eq!(client.base_url(), "http://192.168.1.20:1234/v1");
        assert_eq!(client.model(), "llama-3.2-3b");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_maps_to_unreachable() {
        // Nothing listens on this port.
        let config = AiConfig::builder()
            .base_url("http://127.0.0.1:9/v1")
            .build();
        let client = LmStudioClient::new(config);

        let err = client.check_connection().await.unwrap_err();
        assert!(matches!(err, ClientError::Unreachable(_)));
    }

    #[test]
    fn test_response_with_missing_content_is_rejected() {
        let body = r#"{"choices":[{"message":{"role":"assistant"},"finish_reason":"stop"}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert!(text.is_none());
    }
}
