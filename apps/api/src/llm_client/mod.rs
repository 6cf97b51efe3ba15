//! LLM client — the single point of entry for all generative calls.
//!
//! ARCHITECTURAL RULE: no other module may call the Anthropic API directly.
//! The extraction engine and the matching re-rank stage consume the
//! [`StructuredGenerator`] trait, never this client's concrete type, so both
//! engines stay testable without the network.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all generative calls.
/// Intentionally hardcoded to prevent accidental drift between environments.
pub const MODEL: &str = "claude-sonnet-4-5";
/// High ceiling: a full 13-section profile is a large JSON object.
const MAX_TOKENS: u32 = 8192;
/// Low temperature: every call in this service expects schema-shaped JSON.
const TEMPERATURE: f32 = 0.2;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("output does not match the expected schema: {0}")]
    Schema(String),

    #[error("rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("model returned empty content")]
    EmptyContent,
}

/// Backend that turns (system instruction, user content) into parsed JSON.
///
/// Carried in `AppState` as `Arc<dyn StructuredGenerator>`; test code swaps
/// in canned implementations.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate_json(&self, system: &str, user: &str) -> Result<Value, GenerationError>;
}

/// Deserializes generator output into the caller's expected shape.
/// A shape mismatch is a schema violation, not a parse failure.
pub fn decode_structured<T: DeserializeOwned>(value: Value) -> Result<T, GenerationError> {
    serde_json::from_value(value).map_err(|e| GenerationError::Schema(e.to_string()))
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl ApiResponse {
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anthropic Messages API client with retry and JSON post-processing.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Raw call. Retries on 429 and 5xx with exponential backoff.
    async fn call(&self, system: &str, user: &str) -> Result<ApiResponse, GenerationError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: user,
            }],
        };

        let mut last_error: Option<GenerationError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(GenerationError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(GenerationError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(GenerationError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let api_response: ApiResponse = response
                .json()
                .await
                .map_err(GenerationError::Http)?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                api_response.usage.input_tokens, api_response.usage.output_tokens
            );

            return Ok(api_response);
        }

        Err(last_error.unwrap_or(GenerationError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl StructuredGenerator for LlmClient {
    async fn generate_json(&self, system: &str, user: &str) -> Result<Value, GenerationError> {
        let response = self.call(system, user).await?;
        let text = response.text().ok_or(GenerationError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(text);

        Ok(serde_json::from_str(text)?)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[derive(Debug, serde::Deserialize)]
    struct Shape {
        fit_score: i32,
    }

    #[test]
    fn test_decode_structured_matches_shape() {
        let decoded: Shape = decode_structured(json!({"fit_score": 72})).unwrap();
        assert_eq!(decoded.fit_score, 72);
    }

    #[test]
    fn test_decode_structured_rejects_wrong_shape() {
        let err = decode_structured::<Shape>(json!({"score": 72})).unwrap_err();
        assert!(matches!(err, GenerationError::Schema(_)));
    }
}
