//! Domain Entities
//!
//! Entities carry identity. The catalog item is the only entity of the
//! similarity engine; its persisted shape is the versioned [`CatalogRecord`].

/// Catalog item entity and identity
pub mod catalog_item;
/// Versioned record schema used at the store boundary
pub mod catalog_record;

pub use catalog_item::{CatalogItem, ItemId};
pub use catalog_record::CatalogRecord;
