//! Photo Analysis Use Case
//!
//! Runs similarity search and the counting pipeline over the same photo
//! concurrently and joins both answers.

use std::sync::Arc;

use async_trait::async_trait;
use packlens_domain::{ImagePayload, PackCount};
use tracing::{debug, warn};

use crate::domain_services::{AnalysisOutcome, AnalysisServiceInterface, SimilaritySearchInterface};
use crate::ports::CountingPipeline;

/// Analysis orchestrator implementation
pub struct AnalysisOrchestrator {
    search: Arc<dyn SimilaritySearchInterface>,
    counting: Arc<dyn CountingPipeline>,
}

impl AnalysisOrchestrator {
    /// Create new orchestrator with injected dependencies
    pub fn new(
        search: Arc<dyn SimilaritySearchInterface>,
        counting: Arc<dyn CountingPipeline>,
    ) -> Self {
        Self { search, counting }
    }

    async fn count_packs(&self, photo: &ImagePayload) -> Vec<PackCount> {
        match self.counting.analyze(photo).await {
            Ok(counts) => counts,
            Err(e) => {
                warn!(
                    pipeline = self.counting.provider_name(),
                    error = %e,
                    "Pack counting failed"
                );
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl AnalysisServiceInterface for AnalysisOrchestrator {
    async fn analyze(&self, photo: &ImagePayload) -> AnalysisOutcome {
        let (matches, counts) = tokio::join!(self.search.find_similar(photo), self.count_packs(photo));

        debug!(
            matches = matches.len(),
            counted_types = counts.len(),
            "Photo analysis finished"
        );
        AnalysisOutcome { matches, counts }
    }
}
