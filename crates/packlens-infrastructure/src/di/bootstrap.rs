//! Application Bootstrap - composition root
//!
//! Builds every service from an [`AppConfig`]:
//!
//! ```text
//! AppConfig → Resolvers → linkme registry → embedding / counting providers
//!          → event bus → catalog store (publishes mutations)
//!          → vector index (created, optionally snapshot-backed)
//!          → IndexMaintainer, SimilaritySearchService, AnalysisOrchestrator
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(AppConfig::default()).await?;
//! let maintenance = context.start_maintenance().await?;
//!
//! context.ingest_manifest(Path::new("catalog.json")).await?;
//! let outcome = context.analysis().analyze(&photo).await;
//!
//! maintenance.shutdown().await?;
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use packlens_application::{
    AnalysisOrchestrator, AnalysisServiceInterface, CatalogIngestService, CatalogStore,
    CountingPipeline, EmbeddingProvider, EventBusProvider, IndexMaintainer, IngestReport,
    MaintenanceHandle, ResultFilter, SimilaritySearchInterface, SimilaritySearchService,
    VectorIndexAdmin, VectorIndexProvider, await_quiescence,
};
use packlens_domain::error::{Error, Result};
use packlens_domain::{IndexCursor, IndexStats};
use packlens_providers::catalog::InMemoryCatalogStore;
use packlens_providers::events::TokioEventBusProvider;
use packlens_providers::vector_index::InMemoryVectorIndex;
use tracing::info;

use crate::config::AppConfig;
use crate::di::provider_resolvers::{CountingPipelineResolver, EmbeddingProviderResolver};
use crate::error_ext::registry_error;

/// Application context holding every wired service
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ========================================================================
    // Providers
    // ========================================================================
    embedding: Arc<dyn EmbeddingProvider>,
    counting: Arc<dyn CountingPipeline>,
    catalog: Arc<dyn CatalogStore>,
    index: Arc<dyn VectorIndexProvider>,
    event_bus: Arc<dyn EventBusProvider>,

    // ========================================================================
    // Services
    // ========================================================================
    maintainer: Arc<IndexMaintainer>,
    search: Arc<SimilaritySearchService>,
    analysis: Arc<dyn AnalysisServiceInterface>,
    ingest: Arc<CatalogIngestService>,
}

impl AppContext {
    /// Get embedding provider
    pub fn embedding(&self) -> Arc<dyn EmbeddingProvider> {
        self.embedding.clone()
    }

    /// Get counting pipeline
    pub fn counting(&self) -> Arc<dyn CountingPipeline> {
        self.counting.clone()
    }

    /// Get catalog store
    pub fn catalog(&self) -> Arc<dyn CatalogStore> {
        self.catalog.clone()
    }

    /// Get vector index provider
    pub fn index(&self) -> Arc<dyn VectorIndexProvider> {
        self.index.clone()
    }

    /// Get event bus
    pub fn event_bus(&self) -> Arc<dyn EventBusProvider> {
        self.event_bus.clone()
    }

    /// Get index maintainer
    pub fn maintainer(&self) -> Arc<IndexMaintainer> {
        self.maintainer.clone()
    }

    /// Get similarity search service
    pub fn search(&self) -> Arc<dyn SimilaritySearchInterface> {
        self.search.clone()
    }

    /// Get photo analysis service
    pub fn analysis(&self) -> Arc<dyn AnalysisServiceInterface> {
        self.analysis.clone()
    }

    /// Get catalog ingestion service
    pub fn ingest(&self) -> Arc<CatalogIngestService> {
        self.ingest.clone()
    }

    /// Start background index maintenance
    pub async fn start_maintenance(&self) -> Result<MaintenanceHandle> {
        self.maintainer.clone().start().await
    }

    /// Statistics of the maintained index
    pub async fn index_stats(&self) -> Result<IndexStats> {
        self.index.stats(&self.config.index.name).await
    }

    /// Ingest a catalog manifest and wait until the index has caught up
    ///
    /// Requires background maintenance started with
    /// [`start_maintenance`](Self::start_maintenance). Gives up after the
    /// configured quiescence timeout.
    pub async fn ingest_manifest(&self, manifest: &Path) -> Result<IngestReport> {
        let mut events = self.event_bus.subscribe_events().await?;
        let report = self.ingest.ingest_file(manifest).await?;
        if report.last_sequence == 0 {
            return Ok(report);
        }

        let timeout = Duration::from_secs(self.config.maintenance.quiescence_timeout_secs);
        let index = &self.config.index.name;
        match tokio::time::timeout(
            timeout,
            await_quiescence(&mut events, index, report.last_sequence),
        )
        .await
        {
            Ok(Some(cursor)) => {
                info!(index = %index, cursor = cursor.sequence(), "Index caught up with catalog");
                Ok(report)
            }
            Ok(None) => Err(Error::internal(
                "event bus closed before the index caught up",
            )),
            Err(_) => Err(Error::internal(format!(
                "index '{index}' did not reach catalog sequence {} within {}s",
                report.last_sequence,
                timeout.as_secs()
            ))),
        }
    }

    /// Cursor of the maintained index
    pub async fn index_cursor(&self) -> Result<IndexCursor> {
        self.index.cursor(&self.config.index.name).await
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("embedding", &self.embedding.provider_name())
            .field("counting", &self.counting.provider_name())
            .field("catalog", &self.catalog.provider_name())
            .field("index", &self.config.index.name)
            .finish_non_exhaustive()
    }
}

/// Initialize application context
///
/// Providers are auto-registered via linkme distributed slices when
/// packlens-providers is linked; no explicit registration call is needed.
/// The vector index is created (or reopened from its snapshot) before the
/// context is returned; maintenance is not started.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let config = Arc::new(config);

    // ========================================================================
    // Resolve model providers from the registries
    // ========================================================================

    let embedding = EmbeddingProviderResolver::new(config.clone())
        .resolve_from_config()
        .map_err(|e| registry_error("Embedding", e))?;
    let counting = CountingPipelineResolver::new(config.clone())
        .resolve_from_config()
        .map_err(|e| registry_error("Counting", e))?;

    if embedding.dimensions() != config.index.dimensions {
        return Err(Error::config(format!(
            "Embedding provider '{}' produces {} dimensions, index '{}' expects {}",
            embedding.provider_name(),
            embedding.dimensions(),
            config.index.name,
            config.index.dimensions
        )));
    }

    info!(
        "Resolved providers: embedding={}, counting={}",
        embedding.provider_name(),
        counting.provider_name()
    );

    // ========================================================================
    // Storage and events
    // ========================================================================

    let event_bus: Arc<dyn EventBusProvider> = TokioEventBusProvider::new_shared();
    let catalog: Arc<dyn CatalogStore> =
        Arc::new(InMemoryCatalogStore::with_event_bus(event_bus.clone()));

    let vector_index = match &config.index.snapshot_path {
        Some(path) => InMemoryVectorIndex::with_snapshot(path.clone()).await?,
        None => InMemoryVectorIndex::new(),
    };
    let index: Arc<dyn VectorIndexProvider> = Arc::new(vector_index);
    index
        .create_index(&config.index.name, config.index.dimensions)
        .await?;

    // ========================================================================
    // Services
    // ========================================================================

    let maintainer = Arc::new(IndexMaintainer::new(
        catalog.clone(),
        index.clone(),
        embedding.clone(),
        event_bus.clone(),
        config.index.name.clone(),
        config.maintenance.policy(),
    ));
    let search = Arc::new(SimilaritySearchService::new(
        embedding.clone(),
        index.clone(),
        catalog.clone(),
        ResultFilter::new((&config.filter).into()),
        config.search.settings(&config.index.name),
    ));
    let analysis: Arc<dyn AnalysisServiceInterface> =
        Arc::new(AnalysisOrchestrator::new(search.clone(), counting.clone()));
    let ingest = Arc::new(CatalogIngestService::new(catalog.clone()));

    info!(index = %config.index.name, "Application context ready");

    Ok(AppContext {
        config,
        embedding,
        counting,
        catalog,
        index,
        event_bus,
        maintainer,
        search,
        analysis,
        ingest,
    })
}
