//! Tests for the photo analysis orchestrator

use std::sync::Arc;

use async_trait::async_trait;
use packlens_application::{
    AnalysisOrchestrator, AnalysisServiceInterface, CountingPipeline, SimilaritySearchInterface,
};
use packlens_domain::error::{Error, Result};
use packlens_domain::{FilteredResult, ImagePayload, PackCount, SearchHit};
use packlens_providers::counting::NullCountingPipeline;

use crate::test_utils::hit;

/// Search double returning a fixed result
struct FixedSearch(FilteredResult);

#[async_trait]
impl SimilaritySearchInterface for FixedSearch {
    async fn find_similar(&self, _photo: &ImagePayload) -> FilteredResult {
        self.0.clone()
    }

    async fn search_vector(
        &self,
        _vector: &[f32],
        _limit: usize,
        _category: Option<&str>,
    ) -> Vec<SearchHit> {
        self.0.hits().to_vec()
    }
}

struct BrokenCounting;

#[async_trait]
impl CountingPipeline for BrokenCounting {
    async fn analyze(&self, _image: &ImagePayload) -> Result<Vec<PackCount>> {
        Err(Error::counting("detector offline"))
    }

    fn provider_name(&self) -> &str {
        "broken"
    }
}

fn water(count: u32, confidence: f64) -> PackCount {
    PackCount {
        category: "water".to_string(),
        brand: "Fizz".to_string(),
        count,
        confidence,
    }
}

fn photo() -> ImagePayload {
    ImagePayload::jpeg(vec![42; 128])
}

#[tokio::test]
async fn test_joins_matches_and_counts() {
    let matches = FilteredResult::new(vec![hit("sku-1", 0.953), hit("sku-2", 0.91)]);
    let orchestrator = AnalysisOrchestrator::new(
        Arc::new(FixedSearch(matches.clone())),
        Arc::new(NullCountingPipeline::with_counts(vec![water(6, 0.876)])),
    );

    let outcome = orchestrator.analyze(&photo()).await;
    assert_eq!(outcome.matches, matches);
    assert_eq!(outcome.counts, vec![water(6, 0.876)]);

    let report = outcome.to_report();
    assert_eq!(report.matches[0].identity, "sku-1");
    assert_eq!(report.matches[0].similarity_percent, 95);
    assert_eq!(report.counts[0].confidence_percent, 88);
}

#[tokio::test]
async fn test_counting_failure_keeps_matches() {
    let matches = FilteredResult::new(vec![hit("sku-1", 0.97)]);
    let orchestrator =
        AnalysisOrchestrator::new(Arc::new(FixedSearch(matches.clone())), Arc::new(BrokenCounting));

    let outcome = orchestrator.analyze(&photo()).await;
    assert_eq!(outcome.matches, matches);
    assert!(outcome.counts.is_empty());
}

#[tokio::test]
async fn test_no_match_still_reports_counts() {
    let orchestrator = AnalysisOrchestrator::new(
        Arc::new(FixedSearch(FilteredResult::empty())),
        Arc::new(NullCountingPipeline::with_counts(vec![water(2, 0.5)])),
    );

    let outcome = orchestrator.analyze(&photo()).await;
    assert!(outcome.matches.is_empty());
    assert_eq!(outcome.counts.len(), 1);
}
