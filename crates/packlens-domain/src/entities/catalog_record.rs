//! Versioned Catalog Record Schema
//!
//! The catalog store keeps items as dictionary-shaped JSON documents. Every
//! document crossing the store boundary is parsed into a [`CatalogRecord`]
//! and validated before it becomes a [`CatalogItem`]; a malformed document is
//! an [`Error::InvalidRecord`], never a panic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::constants::{CATALOG_RECORD_SCHEMA_VERSION, DEFAULT_PRODUCT_CATEGORY};
use crate::entities::{CatalogItem, ItemId};
use crate::error::{Error, Result};

fn default_category() -> String {
    DEFAULT_PRODUCT_CATEGORY.to_string()
}

/// Catalog record, schema version 1
///
/// ```json
/// {
///   "schema_version": 1,
///   "id": "sku-001",
///   "name": "Sparkling Water 6x500ml",
///   "brand": "Fizz",
///   "pack_size": "6x500ml",
///   "category": "product",
///   "embedding": [0.12, 0.03],
///   "created_at": "2026-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CatalogRecord {
    /// Schema version, must equal [`CATALOG_RECORD_SCHEMA_VERSION`]
    pub schema_version: u32,
    /// Item identity
    #[validate(length(min = 1, max = 256))]
    pub id: String,
    /// Display name
    #[validate(length(min = 1))]
    pub name: String,
    /// Brand
    #[serde(default)]
    pub brand: String,
    /// Pack-size descriptor
    #[serde(default)]
    pub pack_size: String,
    /// Category used for filtered search
    #[serde(default = "default_category")]
    #[validate(length(min = 1))]
    pub category: String,
    /// Reference embedding, if computed at ingestion
    #[serde(default)]
    #[validate(length(min = 1))]
    pub embedding: Option<Vec<f32>>,
    /// Creation timestamp (defaults to the time of parsing)
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl CatalogRecord {
    /// Parse and validate a raw store document
    pub fn from_document(document: &Value) -> Result<Self> {
        let version = document
            .get("schema_version")
            .and_then(Value::as_u64)
            .ok_or_else(|| Error::invalid_record("missing or non-numeric schema_version"))?;
        if version != u64::from(CATALOG_RECORD_SCHEMA_VERSION) {
            return Err(Error::invalid_record(format!(
                "unsupported schema_version {version} (expected {CATALOG_RECORD_SCHEMA_VERSION})"
            )));
        }

        let record: Self = serde_json::from_value(document.clone())
            .map_err(|e| Error::invalid_record(e.to_string()))?;
        record
            .validate()
            .map_err(|e| Error::invalid_record(format!("record '{}': {e}", record.id)))?;

        if let Some(embedding) = &record.embedding {
            if embedding.iter().any(|v| !v.is_finite()) {
                return Err(Error::invalid_record(format!(
                    "record '{}': embedding contains non-finite values",
                    record.id
                )));
            }
        }

        Ok(record)
    }

    /// Serialize into a raw store document
    pub fn to_document(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Convert into the catalog entity
    pub fn into_item(self) -> CatalogItem {
        CatalogItem {
            id: ItemId::new(self.id),
            display_name: self.name,
            brand: self.brand,
            pack_size: self.pack_size,
            category: self.category,
            embedding: self.embedding,
            created_at: self.created_at,
        }
    }
}

impl From<&CatalogItem> for CatalogRecord {
    fn from(item: &CatalogItem) -> Self {
        Self {
            schema_version: CATALOG_RECORD_SCHEMA_VERSION,
            id: item.id.as_str().to_string(),
            name: item.display_name.clone(),
            brand: item.brand.clone(),
            pack_size: item.pack_size.clone(),
            category: item.category.clone(),
            embedding: item.embedding.clone(),
            created_at: item.created_at,
        }
    }
}

impl CatalogItem {
    /// Parse a raw store document into an item
    pub fn from_document(document: &Value) -> Result<Self> {
        CatalogRecord::from_document(document).map(CatalogRecord::into_item)
    }

    /// Serialize the item into a raw store document
    pub fn to_document(&self) -> Result<Value> {
        CatalogRecord::from(self).to_document()
    }
}
