//! Application Use Cases
//!
//! | Use Case | Description |
//! |----------|-------------|
//! | [`IndexMaintainer`] | Applies catalog changes to the vector index in batches |
//! | [`SimilaritySearchService`] | Photo and vector similarity search |
//! | [`AnalysisOrchestrator`] | Similarity search and pack counting joined per photo |
//! | [`CatalogIngestService`] | Loads catalog manifests into the store |

/// Photo analysis use case
pub mod analysis_orchestrator;
/// Catalog manifest ingestion use case
pub mod catalog_ingest;
/// Index maintenance use case
pub mod index_maintainer;
/// Similarity search use case
pub mod similarity_search;

pub use analysis_orchestrator::AnalysisOrchestrator;
pub use catalog_ingest::{
    CatalogIngestService, CatalogManifest, IngestReport, ManifestEntry, content_type_for,
};
pub use index_maintainer::{
    IndexMaintainer, MaintenanceHandle, MaintenancePolicy, MaintenanceReport, await_quiescence,
};
pub use similarity_search::{SearchSettings, SimilaritySearchService};
