//! Inference endpoint configuration.

/// Default LM Studio server URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:1234/v1";

/// Default model loaded in LM Studio.
pub const DEFAULT_MODEL: &str = "meta-llama-3.1-8b-instruct";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the inference gateway.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// API key. LM Studio does not validate it, but the protocol carries one.
    pub api_key: String,
    /// Model identifier to request.
    pub model: String,
    /// Bound on a single completion call, in seconds. Local inference takes
    /// seconds to tens of seconds; this is the gateway's one bounded wait.
    pub request_timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: "lm-studio".to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("REMIX_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_key = std::env::var("REMIX_API_KEY").unwrap_or_else(|_| "lm-studio".to_string());

        let model = std::env::var("REMIX_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let request_timeout_secs = std::env::var("REMIX_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            api_key,
            model,
            request_timeout_secs,
        }
    }

    /// Create a builder for configuration.
    pub fn builder() -> AiConfigBuilder {
        AiConfigBuilder::default()
    }
}

/// Builder for inference configuration.
#[derive(Debug, Default)]
pub struct AiConfigBuilder {
    config: AiConfig,
}

impl AiConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    pub fn build(self) -> AiConfig {
        self.config
    }
}
