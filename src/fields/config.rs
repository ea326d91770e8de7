//! Field extraction client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the field extraction service client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldExtractorConfig {
    /// Base URL of an OpenAI-compatible chat completions service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key for the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model to use for extraction.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens in the reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature; kept low so extraction stays literal.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum bytes of document text submitted per request.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.1
}

fn default_max_input_chars() -> usize {
    4000
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for FieldExtractorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            max_input_chars: default_max_input_chars(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FieldExtractorConfig {
    /// Apply environment variable overrides.
    ///
    /// Supported variables:
    /// - `LLM_ENDPOINT`: service base URL
    /// - `LLM_API_KEY`: API key (wins over `OPENAI_API_KEY`)
    /// - `OPENAI_API_KEY`: API key
    /// - `LLM_MODEL`: model name
    /// - `LLM_MAX_TOKENS`: maximum reply tokens
    /// - `LLM_TEMPERATURE`: sampling temperature
    /// - `LLM_MAX_INPUT_CHARS`: document text cap per request
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var("LLM_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(key) = std::env::var("LLM_API_KEY") {
            self.api_key = Some(key);
        } else if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            self.api_key = Some(key);
        }
        if let Ok(model) = std::env::var("LLM_MODEL") {
            self.model = model;
        }
        if let Ok(val) = std::env::var("LLM_MAX_TOKENS") {
            if let Ok(max_tokens) = val.parse() {
                self.max_tokens = max_tokens;
            }
        }
        if let Ok(val) = std::env::var("LLM_TEMPERATURE") {
            if let Ok(temperature) = val.parse() {
                self.temperature = temperature;
            }
        }
        if let Ok(val) = std::env::var("LLM_MAX_INPUT_CHARS") {
            if let Ok(max_input_chars) = val.parse() {
                self.max_input_chars = max_input_chars;
            }
        }
        self
    }

    /// Whether a service credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }
}
