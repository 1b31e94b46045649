//! Catalog Ingestion Use Case
//!
//! Loads a JSON manifest of raw catalog records into the catalog store.
//! Each entry carries the record document and, optionally, the path of the
//! item's reference image relative to the manifest:
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "record": { "schema_version": 1, "id": "sku-001", "name": "Water 6x500ml" },
//!       "image": "images/sku-001.jpg"
//!     }
//!   ]
//! }
//! ```
//!
//! A bad entry is reported and skipped; it never aborts the manifest.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use packlens_domain::error::{Error, Result};
use packlens_domain::{ImagePayload, ItemId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::ports::CatalogStore;

/// One manifest entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Raw catalog record document
    pub record: Value,
    /// Reference image, relative to the manifest directory
    #[serde(default)]
    pub image: Option<PathBuf>,
}

/// Catalog manifest file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Entries, ingested in order
    pub items: Vec<ManifestEntry>,
}

/// Outcome of ingesting a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Records stored
    pub stored: usize,
    /// Reference images attached
    pub images: usize,
    /// One line per rejected record or image
    pub failures: Vec<String>,
    /// Highest catalog sequence produced by the ingestion
    pub last_sequence: u64,
}

/// Catalog ingestion service
pub struct CatalogIngestService {
    catalog: Arc<dyn CatalogStore>,
}

impl CatalogIngestService {
    /// Create new ingestion service with injected dependencies
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    /// Read a manifest file and ingest it
    pub async fn ingest_file(&self, path: &Path) -> Result<IngestReport> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to read manifest {}", path.display()), e)
        })?;
        let manifest: CatalogManifest = serde_json::from_str(&raw)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        self.ingest(manifest, base_dir).await
    }

    /// Ingest a parsed manifest, resolving image paths against `base_dir`
    pub async fn ingest(&self, manifest: CatalogManifest, base_dir: &Path) -> Result<IngestReport> {
        let mut report = IngestReport::default();

        for entry in manifest.items {
            let id = entry
                .record
                .get("id")
                .and_then(Value::as_str)
                .map(ItemId::new);
            let label = id
                .as_ref()
                .map_or_else(|| "<no id>".to_string(), ToString::to_string);

            match self.catalog.put_document(entry.record).await {
                Ok(sequence) => {
                    report.stored += 1;
                    report.last_sequence = report.last_sequence.max(sequence);
                }
                Err(e) => {
                    warn!(item_id = %label, error = %e, "Catalog record rejected");
                    report.failures.push(format!("{label}: {e}"));
                    continue;
                }
            }

            let (Some(id), Some(image)) = (id, entry.image) else {
                continue;
            };
            let path = base_dir.join(image);
            match self.attach_image(&id, &path).await {
                Ok(sequence) => {
                    report.images += 1;
                    report.last_sequence = report.last_sequence.max(sequence);
                }
                Err(e) => {
                    warn!(item_id = %id, path = %path.display(), error = %e, "Reference image not attached");
                    report.failures.push(format!("{id}: {e}"));
                }
            }
        }

        info!(
            stored = report.stored,
            images = report.images,
            failures = report.failures.len(),
            "Catalog manifest ingested"
        );
        Ok(report)
    }

    async fn attach_image(&self, id: &ItemId, path: &Path) -> Result<u64> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to read image {}", path.display()), e)
        })?;
        self.catalog
            .put_image(id, ImagePayload::new(bytes, content_type_for(path)))
            .await
    }
}

/// Media type guessed from the file extension
pub fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
