//! HTTP Counting Pipeline
//!
//! Implements the CountingPipeline port against a remote detection service:
//!
//! ```text
//! POST {base_url}/v1/count
//! { "model": "...", "content_type": "image/jpeg", "image": "<base64>" }
//!
//! 200 { "counts": [ { "type": "water", "brand": "Fizz", "count": 12, "confidence": 0.91 } ] }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use packlens_domain::error::{Error, Result};
use packlens_domain::ports::providers::CountingPipeline;
use packlens_domain::{ImagePayload, PackCount};

use crate::constants::{CONTENT_TYPE_JSON, HTTP_COUNTING_DEFAULT_URL, HTTP_REQUEST_TIMEOUT_SECS};
use crate::utils::HttpResponseUtils;

const PROVIDER_NAME: &str = "http";

#[derive(Serialize)]
struct CountRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    content_type: &'a str,
    image: String,
}

#[derive(Deserialize)]
struct CountResponse {
    #[serde(default)]
    counts: Vec<PackCount>,
}

fn counting_error(message: String) -> Error {
    Error::counting(message)
}

/// Remote counting pipeline
pub struct HttpCountingPipeline {
    base_url: String,
    model: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
    http_client: Client,
}

impl HttpCountingPipeline {
    /// Create a new remote counting pipeline
    pub fn new(base_url: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url,
            model: None,
            api_key: None,
            timeout,
            http_client,
        }
    }

    /// Request a specific detector model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Send a bearer token with every request
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/count", self.base_url.trim_end_matches('/'))
    }

    /// Drop empty detections and clamp confidences into `[0, 1]`
    fn normalize(counts: Vec<PackCount>) -> Vec<PackCount> {
        counts
            .into_iter()
            .filter(|c| c.count > 0)
            .map(|mut c| {
                c.confidence = if c.confidence.is_finite() {
                    c.confidence.clamp(0.0, 1.0)
                } else {
                    0.0
                };
                c
            })
            .collect()
    }
}

#[async_trait]
impl CountingPipeline for HttpCountingPipeline {
    async fn analyze(&self, image: &ImagePayload) -> Result<Vec<PackCount>> {
        let payload = CountRequest {
            model: self.model.as_deref(),
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
            .map_err(|e| HttpResponseUtils::request_error(PROVIDER_NAME, &e, counting_error))?;

        let body: CountResponse =
            HttpResponseUtils::check_and_parse(response, PROVIDER_NAME, counting_error).await?;
        Ok(Self::normalize(body.counts))
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
    COUNTING_PIPELINES, CountingPipelineConfig, CountingPipelineEntry,
};

/// Factory function for creating remote counting pipeline instances.
fn http_counting_factory(
    config: &CountingPipelineConfig,
) -> std::result::Result<Arc<dyn CountingPipeline>, String> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| HTTP_COUNTING_DEFAULT_URL.to_string());
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(HTTP_REQUEST_TIMEOUT_SECS));
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    let mut pipeline = HttpCountingPipeline::new(base_url, timeout, http_client);
    if let Some(model) = &config.model {
        pipeline = pipeline.with_model(model.clone());
    }
    if let Some(key) = &config.api_key {
        pipeline = pipeline.with_api_key(key.clone());
    }
    Ok(Arc::new(pipeline))
}

#[linkme::distributed_slice(COUNTING_PIPELINES)]
static HTTP_PIPELINE: CountingPipelineEntry = CountingPipelineEntry {
    name: "http",
    description: "Remote pack detection service served over HTTP",
    factory: http_counting_factory,
};
