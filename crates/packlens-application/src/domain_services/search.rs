//! Similarity Search Service Interface

use async_trait::async_trait;
use packlens_domain::{FilteredResult, ImagePayload, SearchHit};

/// Similarity search over the catalog vector index
///
/// Searches fail closed: an unavailable index, a rejected photo or a
/// malformed query all produce an empty answer and a log line, never an
/// error for the caller to handle.
#[async_trait]
pub trait SimilaritySearchInterface: Send + Sync {
    /// Embed a photo, search the index and apply the result filter
    async fn find_similar(&self, photo: &ImagePayload) -> FilteredResult;

    /// Nearest catalog items to a query vector, best first, unfiltered
    ///
    /// Only items that still exist in the catalog (and still belong to
    /// `category`, when given) are returned.
    async fn search_vector(
        &self,
        vector: &[f32],
        limit: usize,
        category: Option<&str>,
    ) -> Vec<SearchHit>;
}
