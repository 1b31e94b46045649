use crate::error::Result;
use crate::value_objects::{IndexBatch, IndexCursor, IndexMatch, IndexStats, VectorQuery};
use async_trait::async_trait;

/// Vector Index Administrative Operations
///
/// Kept apart from the read/write surface so admin tooling does not need the
/// full provider.
#[async_trait]
pub trait VectorIndexAdmin: Send + Sync {
    /// Check if an index exists
    async fn index_exists(&self, name: &str) -> Result<bool>;

    /// Get statistics about an index
    ///
    /// Fails with `IndexUnavailable` when the index was never created.
    async fn stats(&self, name: &str) -> Result<IndexStats>;

    /// Get the name/identifier of this index provider
    fn provider_name(&self) -> &str;
}

/// Lazily Maintained Vector Index
///
/// Holds the searchable projection of catalog embeddings together with the
/// maintenance cursor. Only the index maintainer writes (through
/// [`commit_batch`](Self::commit_batch)); any number of searches may read
/// concurrently and observe whatever batches are committed at query time.
///
/// Distances are cosine distances in `[0, 2]`.
#[async_trait]
pub trait VectorIndexProvider: VectorIndexAdmin + Send + Sync {
    /// Create an index with a fixed vector dimension
    ///
    /// Creating an existing index with the same dimension is a no-op; a
    /// different dimension is an error.
    async fn create_index(&self, name: &str, dimensions: usize) -> Result<()>;

    /// Delete an index together with its cursor
    async fn delete_index(&self, name: &str) -> Result<()>;

    /// Current maintenance cursor of an index
    async fn cursor(&self, name: &str) -> Result<IndexCursor>;

    /// Bind an index to the catalog epoch its cursor counts in
    ///
    /// Binding to the current epoch is a no-op. Otherwise every entry is
    /// dropped and the cursor goes back to the start, since sequence numbers
    /// of another epoch say nothing about this catalog.
    async fn bind_catalog(&self, name: &str, catalog_epoch: &str) -> Result<()>;

    /// Apply a batch atomically
    ///
    /// Every upsert vector must match the index dimension and the batch
    /// cursor must not be behind the current one; otherwise nothing is
    /// applied.
    async fn commit_batch(&self, name: &str, batch: IndexBatch) -> Result<()>;

    /// Nearest entries to the query vector, closest first
    ///
    /// Fails with `DimensionMismatch` when the query length differs from the
    /// index dimension.
    async fn query(&self, name: &str, query: &VectorQuery) -> Result<Vec<IndexMatch>>;
}
