//! Catalog Item Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, unique identity of a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an identity from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Entity: Catalog Item
///
/// A product pack known to the catalog. The catalog store is the system of
/// record for items; the vector index only holds a derived projection of the
/// reference embedding.
///
/// ## Business Rules
///
/// - `id` is stable and unique within the catalog
/// - `embedding`, once set, is never replaced in place; a new image means a
///   new item
/// - `category` restricts which searches may return the item
///
/// ## Example
///
/// ```rust
/// use packlens_domain::CatalogItem;
///
/// let item = CatalogItem::new("sku-001", "Sparkling Water 6x500ml", "product")
///     .with_brand("Fizz")
///     .with_pack_size("6x500ml")
///     .with_embedding(vec![0.1, 0.2, 0.3]);
/// assert_eq!(item.id.as_str(), "sku-001");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable item identity
    pub id: ItemId,
    /// Human readable product name
    pub display_name: String,
    /// Brand owning the product
    pub brand: String,
    /// Pack-size descriptor (e.g. "6x330ml")
    pub pack_size: String,
    /// Category (type) used to scope searches
    pub category: String,
    /// Reference embedding computed at ingestion, if any
    pub embedding: Option<Vec<f32>>,
    /// When the item was created
    pub created_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Create an item with the required fields; everything else defaults
    pub fn new(
        id: impl Into<ItemId>,
        display_name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            brand: String::new(),
            pack_size: String::new(),
            category: category.into(),
            embedding: None,
            created_at: Utc::now(),
        }
    }

    /// Set the brand
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the pack-size descriptor
    pub fn with_pack_size(mut self, pack_size: impl Into<String>) -> Self {
        self.pack_size = pack_size.into();
        self
    }

    /// Set the reference embedding
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Set the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Whether the item already carries a reference embedding
    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }
}
