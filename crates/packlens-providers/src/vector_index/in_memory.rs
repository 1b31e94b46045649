//! In-memory vector index provider implementation
//!
//! Exact nearest-neighbour search by cosine distance. Each index keeps its
//! vectors, their categories and the maintenance cursor. When opened with a
//! snapshot path, every change is written to a JSON snapshot (temporary file
//! then rename) so a restart resumes from the last committed cursor, as long
//! as the catalog still has the epoch the cursor was bound to.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use packlens_domain::error::{Error, Result};
use packlens_domain::ports::providers::{VectorIndexAdmin, VectorIndexProvider};
use packlens_domain::{
    IndexBatch, IndexCursor, IndexEntry, IndexMatch, IndexStats, ItemId, VectorQuery,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::constants::INDEX_SNAPSHOT_VERSION;
use crate::utils::{cosine_distance, l2_norm};

struct StoredVector {
    category: String,
    vector: Vec<f32>,
    norm: f64,
}

struct IndexData {
    dimensions: usize,
    cursor: IndexCursor,
    catalog_epoch: Option<String>,
    entries: HashMap<ItemId, StoredVector>,
}

impl IndexData {
    fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            cursor: IndexCursor::START,
            catalog_epoch: None,
            entries: HashMap::new(),
        }
    }

    fn insert(&mut self, entry: IndexEntry) {
        let norm = l2_norm(&entry.vector);
        self.entries.insert(
            entry.item_id,
            StoredVector {
                category: entry.category,
                vector: entry.vector,
                norm,
            },
        );
    }
}

#[derive(Serialize, Deserialize)]
struct IndexSnapshot {
    version: u32,
    indexes: BTreeMap<String, SnapshotIndex>,
}

#[derive(Serialize, Deserialize)]
struct SnapshotIndex {
    dimensions: usize,
    cursor: IndexCursor,
    #[serde(default)]
    catalog_epoch: Option<String>,
    entries: Vec<IndexEntry>,
}

/// In-memory vector index provider
///
/// Stores vectors in concurrent hash maps. A batch is applied while holding
/// the index's write guard, so queries observe either none or all of it.
#[derive(Default)]
pub struct InMemoryVectorIndex {
    indexes: DashMap<String, IndexData>,
    snapshot_path: Option<PathBuf>,
    persist_lock: Mutex<()>,
}

impl InMemoryVectorIndex {
    /// Create a new, non-persistent index provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an index provider backed by a snapshot file
    ///
    /// A missing file starts empty; an unreadable or foreign file is an
    /// error.
    pub async fn with_snapshot(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let provider = Self {
            snapshot_path: Some(path.clone()),
            ..Self::default()
        };

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No index snapshot yet");
                return Ok(provider);
            }
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read index snapshot {}", path.display()),
                    e,
                ));
            }
        };

        let snapshot: IndexSnapshot = serde_json::from_slice(&bytes)?;
        if snapshot.version != INDEX_SNAPSHOT_VERSION {
            return Err(Error::vector_index(format!(
                "Unsupported index snapshot version {} in {}",
                snapshot.version,
                path.display()
            )));
        }

        for (name, stored) in snapshot.indexes {
            let mut data = IndexData::new(stored.dimensions);
            data.cursor = stored.cursor;
            data.catalog_epoch = stored.catalog_epoch;
            for entry in stored.entries {
                if entry.vector.len() != stored.dimensions {
                    return Err(Error::dimension_mismatch(
                        stored.dimensions,
                        entry.vector.len(),
                    ));
                }
                data.insert(entry);
            }
            info!(
                index = %name,
                entries = data.entries.len(),
                cursor = data.cursor.sequence(),
                "Index restored from snapshot"
            );
            provider.indexes.insert(name, data);
        }

        Ok(provider)
    }

    /// Path of the snapshot file, if persistence is enabled
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    /// Whether `index` holds an entry for `item_id`
    pub fn contains(&self, index: &str, item_id: &ItemId) -> bool {
        self.indexes
            .get(index)
            .is_some_and(|data| data.entries.contains_key(item_id))
    }

    fn snapshot(&self) -> IndexSnapshot {
        let indexes = self
            .indexes
            .iter()
            .map(|data| {
                let mut entries: Vec<IndexEntry> = data
                    .entries
                    .iter()
                    .map(|(item_id, stored)| IndexEntry {
                        item_id: item_id.clone(),
                        category: stored.category.clone(),
                        vector: stored.vector.clone(),
                    })
                    .collect();
                entries.sort_by(|a, b| a.item_id.cmp(&b.item_id));
                (
                    data.key().clone(),
                    SnapshotIndex {
                        dimensions: data.dimensions,
                        cursor: data.cursor,
                        catalog_epoch: data.catalog_epoch.clone(),
                        entries,
                    },
                )
            })
            .collect();

        IndexSnapshot {
            version: INDEX_SNAPSHOT_VERSION,
            indexes,
        }
    }

    async fn persist(&self) -> Result<()> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };

        let _write = self.persist_lock.lock().await;
        let bytes = serde_json::to_vec(&self.snapshot())?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(format!("Failed to create {}", parent.display()), e)
            })?;
        }
        let temp = path.with_extension("tmp");
        tokio::fs::write(&temp, bytes).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write {}", temp.display()), e)
        })?;
        tokio::fs::rename(&temp, path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to replace {}", path.display()), e)
        })
    }
}

#[async_trait]
impl VectorIndexAdmin for InMemoryVectorIndex {
    async fn index_exists(&self, name: &str) -> Result<bool> {
        Ok(self.indexes.contains_key(name))
    }

    async fn stats(&self, name: &str) -> Result<IndexStats> {
        let data = self
            .indexes
            .get(name)
            .ok_or_else(|| Error::index_unavailable(name))?;
        Ok(IndexStats {
            index: name.to_string(),
            entries: data.entries.len(),
            dimensions: data.dimensions,
            cursor: data.cursor,
            catalog_epoch: data.catalog_epoch.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

#[async_trait]
impl VectorIndexProvider for InMemoryVectorIndex {
    async fn create_index(&self, name: &str, dimensions: usize) -> Result<()> {
        if dimensions == 0 {
            return Err(Error::invalid_argument("index dimension must be positive"));
        }

        match self.indexes.entry(name.to_string()) {
            Entry::Occupied(existing) => {
                let current = existing.get().dimensions;
                if current != dimensions {
                    return Err(Error::vector_index(format!(
                        "Index '{name}' exists with dimension {current}, requested {dimensions}"
                    )));
                }
                return Ok(());
            }
            Entry::Vacant(slot) => {
                slot.insert(IndexData::new(dimensions));
            }
        }

        info!(index = %name, dimensions, "Vector index created");
        self.persist().await
    }

    async fn delete_index(&self, name: &str) -> Result<()> {
        if self.indexes.remove(name).is_some() {
            info!(index = %name, "Vector index deleted");
            self.persist().await?;
        }
        Ok(())
    }

    async fn cursor(&self, name: &str) -> Result<IndexCursor> {
        self.indexes
            .get(name)
            .map(|data| data.cursor)
            .ok_or_else(|| Error::index_unavailable(name))
    }

    async fn bind_catalog(&self, name: &str, catalog_epoch: &str) -> Result<()> {
        {
            let mut data = self
                .indexes
                .get_mut(name)
                .ok_or_else(|| Error::index_unavailable(name))?;
            if data.catalog_epoch.as_deref() == Some(catalog_epoch) {
                return Ok(());
            }

            let dropped = data.entries.len();
            info!(
                index = %name,
                previous = ?data.catalog_epoch,
                catalog_epoch,
                dropped,
                stale_cursor = data.cursor.sequence(),
                "Index bound to catalog epoch"
            );
            data.entries.clear();
            data.cursor = IndexCursor::START;
            data.catalog_epoch = Some(catalog_epoch.to_string());
        }

        self.persist().await
    }

    async fn commit_batch(&self, name: &str, batch: IndexBatch) -> Result<()> {
        {
            let mut data = self
                .indexes
                .get_mut(name)
                .ok_or_else(|| Error::index_unavailable(name))?;

            if batch.cursor < data.cursor {
                return Err(Error::vector_index(format!(
                    "Batch cursor {} is behind index cursor {}",
                    batch.cursor.sequence(),
                    data.cursor.sequence()
                )));
            }
            if let Some(entry) = batch
                .upserts
                .iter()
                .find(|entry| entry.vector.len() != data.dimensions)
            {
                return Err(Error::dimension_mismatch(
                    data.dimensions,
                    entry.vector.len(),
                ));
            }

            for item_id in &batch.retired {
                data.entries.remove(item_id);
            }
            for entry in batch.upserts {
                data.insert(entry);
            }
            data.cursor = batch.cursor;
        }

        self.persist().await
    }

    async fn query(&self, name: &str, query: &VectorQuery) -> Result<Vec<IndexMatch>> {
        let data = self
            .indexes
            .get(name)
            .ok_or_else(|| Error::index_unavailable(name))?;

        if query.vector.len() != data.dimensions {
            return Err(Error::dimension_mismatch(
                data.dimensions,
                query.vector.len(),
            ));
        }
        if query.limit == 0 {
            return Ok(Vec::new());
        }

        let query_norm = l2_norm(&query.vector);

        // Max-heap on distance holding the `limit` closest entries
        let mut heap: BinaryHeap<Candidate<'_>> = BinaryHeap::with_capacity(query.limit + 1);
        for (item_id, stored) in &data.entries {
            if query
                .category
                .as_deref()
                .is_some_and(|category| stored.category != category)
            {
                continue;
            }

            let candidate = Candidate {
                distance: cosine_distance(&query.vector, query_norm, &stored.vector, stored.norm),
                item_id,
            };
            if heap.len() < query.limit {
                heap.push(candidate);
            } else if heap.peek().is_some_and(|worst| candidate < *worst) {
                heap.pop();
                heap.push(candidate);
            }
        }

        Ok(heap
            .into_sorted_vec()
            .into_iter()
            .map(|candidate| IndexMatch {
                item_id: candidate.item_id.clone(),
                distance: candidate.distance,
            })
            .collect())
    }
}

/// Scored entry for heap-based top-k selection
///
/// Ordered by distance, then identity, so results are deterministic.
struct Candidate<'a> {
    distance: f64,
    item_id: &'a ItemId,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.item_id.cmp(other.item_id))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
