//! Null counting pipeline for testing and development
//!
//! Detects nothing unless given fixed counts to report.

use async_trait::async_trait;

use packlens_application::ports::CountingPipeline;
use packlens_domain::error::Result;
use packlens_domain::{ImagePayload, PackCount};

/// Null counting pipeline
///
/// # Example
///
/// ```rust
/// use packlens_providers::counting::NullCountingPipeline;
/// use packlens_application::ports::CountingPipeline;
///
/// let pipeline = NullCountingPipeline::new();
/// assert_eq!(pipeline.provider_name(), "null");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullCountingPipeline {
    counts: Vec<PackCount>,
}

impl NullCountingPipeline {
    /// Create a pipeline that never detects anything
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline that reports `counts` for every photo
    pub fn with_counts(counts: Vec<PackCount>) -> Self {
        Self { counts }
    }
}

#[async_trait]
impl CountingPipeline for NullCountingPipeline {
    async fn analyze(&self, _image: &ImagePayload) -> Result<Vec<PackCount>> {
        Ok(self.counts.clone())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use packlens_application::ports::registry::{
    COUNTING_PIPELINES, CountingPipelineConfig, CountingPipelineEntry,
};

/// Factory function for creating null counting pipeline instances.
fn null_counting_factory(
    _config: &CountingPipelineConfig,
) -> std::result::Result<Arc<dyn CountingPipeline>, String> {
    Ok(Arc::new(NullCountingPipeline::new()))
}

#[linkme::distributed_slice(COUNTING_PIPELINES)]
static NULL_PIPELINE: CountingPipelineEntry = CountingPipelineEntry {
    name: "null",
    description: "Null pipeline for testing (detects nothing)",
    factory: null_counting_factory,
};
