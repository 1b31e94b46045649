//! Shared fixtures wiring real in-memory providers

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use packlens_application::{
    IndexMaintainer, MaintenancePolicy, ResultFilter, SearchSettings, SimilaritySearchService,
    VectorIndexAdmin, VectorIndexProvider,
};
use packlens_domain::error::Result;
use packlens_domain::{
    CatalogItem, IndexBatch, IndexCursor, IndexMatch, IndexStats, ItemId, SearchHit, VectorQuery,
};
use packlens_providers::catalog::InMemoryCatalogStore;
use packlens_providers::embedding::NullEmbeddingProvider;
use packlens_providers::events::TokioEventBusProvider;
use packlens_providers::vector_index::InMemoryVectorIndex;

pub const INDEX: &str = "catalog_embeddings";

/// Unit vector whose cosine similarity to `[1, 0]` is `similarity`
pub fn at_similarity(similarity: f32) -> Vec<f32> {
    vec![similarity, (1.0 - similarity * similarity).max(0.0).sqrt()]
}

pub fn product(id: &str, embedding: Vec<f32>) -> CatalogItem {
    CatalogItem::new(id, format!("Product {id}"), "product").with_embedding(embedding)
}

pub fn hit(id: &str, similarity: f64) -> SearchHit {
    SearchHit::new(CatalogItem::new(id, format!("Product {id}"), "product"), similarity)
}

pub fn quick_policy(batch_size: usize) -> MaintenancePolicy {
    MaintenancePolicy {
        batch_size,
        cooldown: Duration::from_millis(1),
    }
}

/// Vector index wrapper counting the queries it serves
#[derive(Default)]
pub struct CountingIndex {
    inner: InMemoryVectorIndex,
    queries: AtomicUsize,
}

impl CountingIndex {
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn inner_contains(&self, item_id: &ItemId) -> bool {
        self.inner.contains(INDEX, item_id)
    }
}

#[async_trait]
impl VectorIndexAdmin for CountingIndex {
    async fn index_exists(&self, name: &str) -> Result<bool> {
        self.inner.index_exists(name).await
    }

    async fn stats(&self, name: &str) -> Result<IndexStats> {
        self.inner.stats(name).await
    }

    fn provider_name(&self) -> &str {
        "counting"
    }
}

#[async_trait]
impl VectorIndexProvider for CountingIndex {
    async fn create_index(&self, name: &str, dimensions: usize) -> Result<()> {
        self.inner.create_index(name, dimensions).await
    }

    async fn delete_index(&self, name: &str) -> Result<()> {
        self.inner.delete_index(name).await
    }

    async fn cursor(&self, name: &str) -> Result<IndexCursor> {
        self.inner.cursor(name).await
    }

    async fn bind_catalog(&self, name: &str, catalog_epoch: &str) -> Result<()> {
        self.inner.bind_catalog(name, catalog_epoch).await
    }

    async fn commit_batch(&self, name: &str, batch: IndexBatch) -> Result<()> {
        self.inner.commit_batch(name, batch).await
    }

    async fn query(&self, name: &str, query: &VectorQuery) -> Result<Vec<IndexMatch>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.query(name, query).await
    }
}

/// Catalog, index, embedding provider and event bus wired together
pub struct Fixture {
    pub catalog: Arc<InMemoryCatalogStore>,
    pub index: Arc<CountingIndex>,
    pub embedding: Arc<NullEmbeddingProvider>,
    pub bus: Arc<TokioEventBusProvider>,
}

impl Fixture {
    /// Fixture without the index created
    pub fn bare(dimensions: usize) -> Self {
        let bus = TokioEventBusProvider::new_shared();
        Self {
            catalog: Arc::new(InMemoryCatalogStore::with_event_bus(bus.clone())),
            index: Arc::new(CountingIndex::default()),
            embedding: Arc::new(NullEmbeddingProvider::with_dimensions(dimensions)),
            bus,
        }
    }

    pub async fn new(dimensions: usize) -> Self {
        let fixture = Self::bare(dimensions);
        fixture
            .index
            .create_index(INDEX, dimensions)
            .await
            .expect("create index");
        fixture
    }

    pub fn maintainer(&self, policy: MaintenancePolicy) -> IndexMaintainer {
        IndexMaintainer::new(
            self.catalog.clone(),
            self.index.clone(),
            self.embedding.clone(),
            self.bus.clone(),
            INDEX,
            policy,
        )
    }

    pub fn search(&self) -> SimilaritySearchService {
        SimilaritySearchService::new(
            self.embedding.clone(),
            self.index.clone(),
            self.catalog.clone(),
            ResultFilter::default(),
            SearchSettings::default(),
        )
    }
}
