//! HTTP Embedding Provider
//!
//! Implements the EmbeddingProvider port against a remote image embedding
//! service. The image travels base64-encoded in a JSON body:
//!
//! ```text
//! POST {base_url}/v1/embed
//! { "model": "resnet50-v2", "content_type": "image/jpeg", "image": "<base64>" }
//!
//! 200 { "embedding": [0.01, ...] }
//! 200 { "rejected": true, "reason": "image too dark" }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use packlens_domain::constants::EMBEDDING_DIMENSIONS;
use packlens_domain::error::{Error, Result};
use packlens_domain::ports::providers::EmbeddingProvider;
use packlens_domain::{EmbedOutcome, Embedding, ImagePayload};

use crate::constants::{
    CONTENT_TYPE_JSON, HTTP_EMBEDDING_DEFAULT_MODEL, HTTP_EMBEDDING_DEFAULT_URL,
    HTTP_REQUEST_TIMEOUT_SECS,
};
use crate::utils::HttpResponseUtils;

const PROVIDER_NAME: &str = "http";

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    content_type: &'a str,
    image: String,
}

#[derive(Deserialize)]
struct EmbedResponse {
    #[serde(default)]
    embedding: Option<Vec<f32>>,
    #[serde(default)]
    rejected: bool,
    #[serde(default)]
    reason: Option<String>,
}

fn embedding_error(message: String) -> Error {
    Error::embedding(message)
}

/// Remote embedding provider
///
/// Receives its HTTP client via constructor injection.
pub struct HttpEmbeddingProvider {
    base_url: String,
    model: String,
    api_key: Option<String>,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl HttpEmbeddingProvider {
    /// Create a new remote embedding provider
    ///
    /// # Arguments
    /// * `base_url` - Model service URL (e.g., "http://localhost:8501")
    /// * `model` - Model name requested from the service
    /// * `dimensions` - Vector length the model produces
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        model: String,
        dimensions: usize,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            model,
            api_key: None,
            dimensions,
            timeout,
            http_client,
        }
    }

    /// Send a bearer token with every request
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/embed", self.base_url.trim_end_matches('/'))
    }

    fn parse_response(&self, response: EmbedResponse) -> Result<EmbedOutcome> {
        if response.rejected {
            let reason = response
                .reason
                .unwrap_or_else(|| "rejected by model".to_string());
            return Ok(EmbedOutcome::rejected(reason));
        }

        let vector = response.embedding.ok_or_else(|| {
            Error::embedding("Invalid response format: missing embedding array")
        })?;
        if vector.iter().any(|v| !v.is_finite()) {
            return Err(Error::embedding("Model returned non-finite values"));
        }

        Ok(EmbedOutcome::Embedded(Embedding::new(
            vector,
            self.model.clone(),
        )))
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingProvider {
    async fn embed(&self, image: &ImagePayload) -> Result<EmbedOutcome> {
        let payload = EmbedRequest {
            model: &self.model,
            content_type: &image.content_type,
            image: STANDARD.encode(&image.bytes),
        };

        let mut request = self
            .http_client
            .post(self.endpoint())
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(PROVIDER_NAME, &e, embedding_error))?;

        let body: EmbedResponse =
            HttpResponseUtils::check_and_parse(response, PROVIDER_NAME, embedding_error).await?;
        self.parse_response(body)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use packlens_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

/// Factory function for creating remote embedding provider instances.
fn http_embedding_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| HTTP_EMBEDDING_DEFAULT_URL.to_string());
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| HTTP_EMBEDDING_DEFAULT_MODEL.to_string());
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(HTTP_REQUEST_TIMEOUT_SECS));
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    let mut provider = HttpEmbeddingProvider::new(
        base_url,
        model,
        config.dimensions.unwrap_or(EMBEDDING_DIMENSIONS),
        timeout,
        http_client,
    );
    if let Some(key) = &config.api_key {
        provider = provider.with_api_key(key.clone());
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static HTTP_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "http",
    description: "Remote image embedding model served over HTTP",
    factory: http_embedding_factory,
};
