//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Image embedding model |
//! | CountingPipeline | Pack detection and counting model |
//! | CatalogStore | System of record for catalog items |
//! | VectorIndexProvider | Searchable projection of catalog embeddings |

/// Catalog store port
pub mod catalog_store;
/// Counting pipeline port
pub mod counting;
/// Embedding provider port
pub mod embedding;
/// Vector index port
pub mod vector_index;

pub use catalog_store::CatalogStore;
pub use counting::CountingPipeline;
pub use embedding::EmbeddingProvider;
pub use vector_index::{VectorIndexAdmin, VectorIndexProvider};
