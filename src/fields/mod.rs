//! Structured field extraction via a language-model service.
//!
//! Sends extracted document text to an OpenAI-compatible chat completions
//! endpoint with a fixed instruction naming the six title-policy fields,
//! then parses the reply into a [`PolicyFields`] record. A malformed reply
//! degrades to an all-null record instead of failing the request; the
//! compliance layer downstream flags the missing fields.

mod config;
mod prompts;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::PolicyFields;

pub use config::FieldExtractorConfig;
pub use prompts::{EXTRACTION_SYSTEM_PROMPT, EXTRACTION_USER_PROMPT};

/// Errors from the field extraction service.
#[derive(Debug, Error)]
pub enum FieldServiceError {
    /// No credential is configured for the service.
    #[error("extraction service API key not configured (set OPENAI_API_KEY)")]
    NotConfigured,

    /// Failed to reach the service.
    #[error("connection error: {0}")]
    Connection(String),

    /// The service answered with an error.
    #[error("API error: {0}")]
    Api(String),
}

/// Capability: derive the six policy fields from document text.
#[async_trait]
pub trait StructuredFieldExtractor: Send + Sync {
    /// Extract fields from `text`. `session_id` is a per-request
    /// correlation token, not a conversation key; no state carries over
    /// between calls.
    async fn extract_fields(
        &self,
        text: &str,
        session_id: &str,
    ) -> Result<PolicyFields, FieldServiceError>;
}

/// Chat completions request format.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
    /// Per-request correlation token passed through to the service.
    user: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat completions response format.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<ChatChoice>>,
    error: Option<ChatApiError>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatApiError {
    message: String,
}

/// Client for the field extraction service.
pub struct FieldExtractionClient {
    config: FieldExtractorConfig,
    client: Client,
}

impl FieldExtractionClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FieldExtractorConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Get the config.
    pub fn config(&self) -> &FieldExtractorConfig {
        &self.config
    }

    /// Cap the document text at the configured maximum, backing up to the
    /// nearest UTF-8 boundary so the cut never splits a character.
    fn truncate_input<'a>(&self, text: &'a str) -> &'a str {
        if text.len() <= self.config.max_input_chars {
            return text;
        }
        let mut end = self.config.max_input_chars;
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        debug!(
            "truncating document text from {} to {} bytes",
            text.len(),
            end
        );
        &text[..end]
    }

    /// Call the chat completions endpoint and return the raw reply text.
    async fn call_service(
        &self,
        text: &str,
        session_id: &str,
    ) -> Result<String, FieldServiceError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(FieldServiceError::NotConfigured)?;

        let user_prompt = EXTRACTION_USER_PROMPT.replace("{content}", self.truncate_input(text));
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: EXTRACTION_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            user: session_id.to_string(),
        };

        let url = format!(
            "{}/v1/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| FieldServiceError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FieldServiceError::Api(format!("HTTP {}: {}", status, body)));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| FieldServiceError::Api(format!("unreadable response: {}", e)))?;

        if let Some(error) = chat.error {
            return Err(FieldServiceError::Api(error.message));
        }

        Ok(chat
            .choices
            .and_then(|choices| choices.into_iter().next())
            .map(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

#[async_trait]
impl StructuredFieldExtractor for FieldExtractionClient {
    async fn extract_fields(
        &self,
        text: &str,
        session_id: &str,
    ) -> Result<PolicyFields, FieldServiceError> {
        debug!(session_id, model = %self.config.model, "requesting field extraction");
        let reply = self.call_service(text, session_id).await?;
        Ok(parse_fields(&reply, session_id))
    }
}

/// Parse a model reply into the six-field record.
///
/// Tries a direct JSON parse first, then the widest brace-delimited
/// window, since replies sometimes wrap the object in prose or a code
/// fence. A reply with no parseable object degrades to an all-null
/// record; a broken model answer must not fail the whole analysis.
fn parse_fields(reply: &str, session_id: &str) -> PolicyFields {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(reply) {
        return PolicyFields::from_json(&value);
    }

    let window = Regex::new(r"(?s)\{.*\}").unwrap();
    if let Some(found) = window.find(reply) {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(found.as_str()) {
            debug!(session_id, "recovered field JSON from reply prose");
            return PolicyFields::from_json(&value);
        }
    }

    warn!(
        session_id,
        "reply contained no parseable field JSON, returning empty record"
    );
    PolicyFields::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_json_reply() {
        let reply = r#"{
            "effective_date": "March 15, 2024",
            "insured_party": "John and Jane Smith",
            "underwriter": "First American Title Insurance Company",
            "legal_description": "Lot 5, Block 2 of Sunset Hills",
            "exceptions": "Standard exceptions; utility easement",
            "policy_amount": "$450,000"
        }"#;

        let fields = parse_fields(reply, "test");
        assert_eq!(fields.effective_date.as_deref(), Some("March 15, 2024"));
        assert_eq!(
            fields.underwriter.as_deref(),
            Some("First American Title Insurance Company")
        );
        assert_eq!(fields.policy_amount.as_deref(), Some("$450,000"));
    }

    #[test]
    fn test_parse_json_wrapped_in_prose() {
        let reply = "Here is the extracted data:\n\n{\"underwriter\": \"Stewart Title\"}\n\nLet me know if you need more.";
        let fields = parse_fields(reply, "test");
        assert_eq!(fields.underwriter.as_deref(), Some("Stewart Title"));
        assert_eq!(fields.effective_date, None);
    }

    #[test]
    fn test_parse_json_in_code_fence() {
        let reply = "```json\n{\"policy_amount\": \"$250,000\", \"exceptions\": null}\n```";
        let fields = parse_fields(reply, "test");
        assert_eq!(fields.policy_amount.as_deref(), Some("$250,000"));
        assert_eq!(fields.exceptions, None);
    }

    #[test]
    fn test_parse_numeric_amount() {
        let fields = parse_fields(r#"{"policy_amount": 450000}"#, "test");
        assert_eq!(fields.policy_amount.as_deref(), Some("450000"));
    }

    #[test]
    fn test_unparseable_reply_degrades_to_empty_record() {
        let fields = parse_fields("I could not find any fields in this document.", "test");
        assert!(fields.is_empty());

        let fields = parse_fields("{broken json", "test");
        assert!(fields.is_empty());

        let fields = parse_fields("", "test");
        assert!(fields.is_empty());
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let config = FieldExtractorConfig {
            max_input_chars: 10,
            ..Default::default()
        };
        let client = FieldExtractionClient::new(config);

        // The two-byte char straddles the byte-10 cut; the cut must back
        // up to byte 9 rather than split it.
        let text = "abcdefghi\u{00e9}tail";
        let truncated = client.truncate_input(text);
        assert!(truncated.len() <= 10);
        assert_eq!(truncated, "abcdefghi");

        let short = "short";
        assert_eq!(client.truncate_input(short), "short");
    }

    #[test]
    fn test_truncation_exact_fit_is_untouched() {
        let config = FieldExtractorConfig {
            max_input_chars: 5,
            ..Default::default()
        };
        let client = FieldExtractionClient::new(config);
        assert_eq!(client.truncate_input("12345"), "12345");
        assert_eq!(client.truncate_input("123456"), "12345");
    }
}
