//! Similarity Search Use Case
//!
//! Embeds a shelf photo, queries the vector index with the category filter
//! applied inside the query, joins the matches against the catalog store and
//! hands the hits to the [`ResultFilter`].

use std::sync::Arc;

use async_trait::async_trait;
use packlens_domain::constants::{DEFAULT_INDEX_NAME, DEFAULT_PRODUCT_CATEGORY, SEARCH_DEFAULT_LIMIT};
use packlens_domain::error::Result;
use packlens_domain::{EmbedOutcome, FilteredResult, ImagePayload, SearchHit, VectorQuery};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain_services::{ResultFilter, SimilaritySearchInterface};
use crate::ports::{CatalogStore, EmbeddingProvider, VectorIndexProvider};

/// Where and how photo searches look
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Vector index to query
    pub index: String,
    /// Nearest neighbours requested per photo
    pub limit: usize,
    /// Category photo searches are restricted to
    pub category: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX_NAME.to_string(),
            limit: SEARCH_DEFAULT_LIMIT,
            category: Some(DEFAULT_PRODUCT_CATEGORY.to_string()),
        }
    }
}

/// Similarity search service implementation
pub struct SimilaritySearchService {
    embedding: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndexProvider>,
    catalog: Arc<dyn CatalogStore>,
    filter: ResultFilter,
    settings: SearchSettings,
}

impl SimilaritySearchService {
    /// Create new search service with injected dependencies
    pub fn new(
        embedding: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndexProvider>,
        catalog: Arc<dyn CatalogStore>,
        filter: ResultFilter,
        settings: SearchSettings,
    ) -> Self {
        Self {
            embedding,
            index,
            catalog,
            filter,
            settings,
        }
    }

    /// Settings in use
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    async fn try_search(
        &self,
        vector: &[f32],
        limit: usize,
        category: Option<&str>,
    ) -> Result<Vec<SearchHit>> {
        let mut query = VectorQuery::new(vector.to_vec(), limit);
        if let Some(category) = category {
            query = query.with_category(category);
        }

        let matches = self.index.query(&self.settings.index, &query).await?;

        let mut hits = Vec::with_capacity(matches.len());
        for candidate in matches {
            match self.catalog.get(&candidate.item_id).await {
                Ok(Some(item)) => {
                    if category.is_some_and(|wanted| item.category != wanted) {
                        debug!(item_id = %candidate.item_id, "Item changed category since indexing");
                        continue;
                    }
                    hits.push(SearchHit::from_distance(item, candidate.distance));
                }
                Ok(None) => {
                    debug!(item_id = %candidate.item_id, "Index entry of a deleted item skipped");
                }
                Err(e) => {
                    warn!(item_id = %candidate.item_id, error = %e, "Catalog lookup failed; hit skipped");
                }
            }
        }

        Ok(hits)
    }
}

#[async_trait]
impl SimilaritySearchInterface for SimilaritySearchService {
    async fn find_similar(&self, photo: &ImagePayload) -> FilteredResult {
        let embedding = match self.embedding.embed(photo).await {
            Ok(EmbedOutcome::Embedded(embedding)) => embedding,
            Ok(EmbedOutcome::Rejected { reason }) => {
                info!(reason = %reason, "Photo rejected by embedding provider");
                return FilteredResult::empty();
            }
            Err(e) => {
                warn!(error = %e, "Photo embedding failed");
                return FilteredResult::empty();
            }
        };

        let hits = self
            .search_vector(
                &embedding.vector,
                self.settings.limit,
                self.settings.category.as_deref(),
            )
            .await;
        let candidates = hits.len();
        let result = self.filter.apply(hits);

        debug!(
            candidates,
            matches = result.len(),
            "Similarity search finished"
        );
        result
    }

    async fn search_vector(
        &self,
        vector: &[f32],
        limit: usize,
        category: Option<&str>,
    ) -> Vec<SearchHit> {
        match self.try_search(vector, limit, category).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(index = %self.settings.index, error = %e, "Vector search failed; no matches");
                Vec::new()
            }
        }
    }
}
