//! Model provider configuration types
//!
//! Both sections name a provider registered in the linkme registries
//! (`null`, `http`) plus the settings that provider reads.

use std::collections::HashMap;

use packlens_application::{CountingPipelineConfig, EmbeddingProviderConfig};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COUNTING_PROVIDER, DEFAULT_EMBEDDING_PROVIDER, HTTP_REQUEST_TIMEOUT_SECS,
};

/// Embedding provider configuration
///
/// The vector dimension is not set here: the provider is always created
/// with the dimension of the index it feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name
    pub provider: String,
    /// Model name
    pub model: Option<String>,
    /// Base URL of the model service
    pub base_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Provider-specific settings (e.g. `min_payload_bytes`)
    pub extra: HashMap<String, String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            base_url: None,
            api_key: None,
            timeout_secs: HTTP_REQUEST_TIMEOUT_SECS,
            extra: HashMap::new(),
        }
    }
}

impl EmbeddingConfig {
    /// Registry configuration for an index of `dimensions`
    pub fn to_registry(&self, dimensions: usize) -> EmbeddingProviderConfig {
        EmbeddingProviderConfig {
            provider: self.provider.clone(),
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            dimensions: Some(dimensions),
            timeout_secs: Some(self.timeout_secs),
            extra: self.extra.clone(),
        }
    }
}

/// Counting pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountingConfig {
    /// Registered pipeline name
    pub provider: String,
    /// Detector model name
    pub model: Option<String>,
    /// Base URL of the detector service
    pub base_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Pipeline-specific settings
    pub extra: HashMap<String, String>,
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_COUNTING_PROVIDER.to_string(),
            model: None,
            base_url: None,
            api_key: None,
            timeout_secs: HTTP_REQUEST_TIMEOUT_SECS,
            extra: HashMap::new(),
        }
    }
}

impl From<&CountingConfig> for CountingPipelineConfig {
    fn from(config: &CountingConfig) -> Self {
        Self {
            provider: config.provider.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            timeout_secs: Some(config.timeout_secs),
            extra: config.extra.clone(),
        }
    }
}
