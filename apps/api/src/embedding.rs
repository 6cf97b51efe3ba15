//! Embedding Generator.
//!
//! Maps a text document to the fixed-dimension vector the opportunity index
//! is built on. Wrong-dimension responses and empty inputs abort the
//! enclosing operation — a silently substituted or padded vector would
//! corrupt every similarity ranking that touches it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EMBEDDING_MODEL: &str = "text-embedding-3-small";

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("cannot embed empty input")]
    EmptyInput,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("embedding has dimension {actual}, index expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("malformed embeddings response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// The dimension every returned vector is guaranteed to have.
    fn dimension(&self) -> usize;
}

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

/// OpenAI-compatible `/embeddings` endpoint client.
pub struct HttpEmbedder {
    client: Client,
    api_url: String,
    api_key: String,
    dimension: usize,
}

impl HttpEmbedder {
    pub fn new(api_url: String, api_key: String, dimension: usize) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_url,
            api_key,
            dimension,
        }
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingsRequest {
                model: EMBEDDING_MODEL,
                input: [text],
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: EmbeddingsResponse = response.json().await?;
        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbeddingError::MalformedResponse("empty data array".to_string()))?;

        check_dimension(&vector, self.dimension)?;
        debug!("embedded {} chars into {} dims", text.len(), vector.len());
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

fn check_dimension(vector: &[f32], expected: usize) -> Result<(), EmbeddingError> {
    if vector.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: vector.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_input_is_rejected_before_any_network_call() {
        let embedder = HttpEmbedder::new(
            "http://127.0.0.1:0/embeddings".to_string(),
            "test-key".to_string(),
            1536,
        );
        let err = embedder.embed("   ").await.unwrap_err();
        assert!(matches!(err, EmbeddingError::EmptyInput));
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let err = check_dimension(&[0.0; 384], 1536).unwrap_err();
        assert!(matches!(
            err,
            EmbeddingError::DimensionMismatch {
                expected: 1536,
                actual: 384
            }
        ));
    }

    #[test]
    fn test_matching_dimension_passes() {
        assert!(check_dimension(&[0.0; 1536], 1536).is_ok());
    }
}
