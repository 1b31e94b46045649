//! Photo Analysis Service Interface

use async_trait::async_trait;
use packlens_domain::{AnalysisReport, FilteredResult, ImagePayload, PackCount};

/// Joined output of similarity search and pack counting for one photo
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisOutcome {
    /// Filtered similarity matches, best first
    pub matches: FilteredResult,
    /// Pack counts per type
    pub counts: Vec<PackCount>,
}

impl AnalysisOutcome {
    /// Caller-facing view with display percentages
    pub fn to_report(&self) -> AnalysisReport {
        AnalysisReport::from_parts(&self.matches, &self.counts)
    }
}

/// Analyze one shelf photo
#[async_trait]
pub trait AnalysisServiceInterface: Send + Sync {
    /// Run similarity search and pack counting over the same photo
    ///
    /// Either half may come back empty while the other succeeds.
    async fn analyze(&self, photo: &ImagePayload) -> AnalysisOutcome;
}
