//! Counting Pipeline Registry
//!
//! Same registration scheme as the embedding registry, for pack counting
//! pipelines.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::CountingPipeline;

/// Configuration for counting pipeline creation
#[derive(Debug, Clone, Default)]
pub struct CountingPipelineConfig {
    /// Pipeline name (e.g., "http", "null")
    pub provider: String,
    /// Detector model name/identifier
    pub model: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL of the detection service
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Additional pipeline-specific configuration
    pub extra: HashMap<String, String>,
}

impl CountingPipelineConfig {
    /// Create a new config with the given pipeline name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for counting pipelines
pub struct CountingPipelineEntry {
    /// Unique pipeline name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create pipeline instance
    pub factory: fn(&CountingPipelineConfig) -> Result<Arc<dyn CountingPipeline>, String>,
}

#[linkme::distributed_slice]
pub static COUNTING_PIPELINES: [CountingPipelineEntry] = [..];

/// Resolve counting pipeline by name from registry
pub fn resolve_counting_pipeline(
    config: &CountingPipelineConfig,
) -> Result<Arc<dyn CountingPipeline>, String> {
    let provider_name = &config.provider;

    for entry in COUNTING_PIPELINES {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = COUNTING_PIPELINES.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown counting pipeline '{provider_name}'. Available pipelines: {available:?}"
    ))
}

/// List all registered counting pipelines as (name, description) tuples
pub fn list_counting_pipelines() -> Vec<(&'static str, &'static str)> {
    COUNTING_PIPELINES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
