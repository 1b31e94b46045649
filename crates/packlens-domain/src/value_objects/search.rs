//! Search-Related Value Objects
//!
//! Value objects representing vector queries, raw index matches and the
//! search hits built from them.

use serde::{Deserialize, Serialize};

use crate::entities::{CatalogItem, ItemId};

/// Nearest-neighbour query against the vector index
///
/// The category filter and the proximity ranking are evaluated together:
/// entries of other categories never take a slot in the top `limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorQuery {
    /// Query vector, must match the index dimension
    pub vector: Vec<f32>,
    /// Maximum number of matches
    pub limit: usize,
    /// Only match entries of this category
    pub category: Option<String>,
}

impl VectorQuery {
    /// Create an unfiltered query
    pub fn new(vector: Vec<f32>, limit: usize) -> Self {
        Self {
            vector,
            limit,
            category: None,
        }
    }

    /// Restrict the query to one category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Raw match returned by the vector index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexMatch {
    /// Matched item
    pub item_id: ItemId,
    /// Cosine distance to the query, in `[0, 2]`
    pub distance: f64,
}

/// Value Object: Ranked Search Hit
///
/// A catalog item together with its cosine similarity to the query.
///
/// ## Business Rules
///
/// - `similarity = 1 - distance`, so it lies in `[-1, 1]`
/// - Higher is better
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Matched catalog item
    pub item: CatalogItem,
    /// Cosine similarity to the query
    pub similarity: f64,
}

impl SearchHit {
    /// Create a hit from a similarity score
    pub fn new(item: CatalogItem, similarity: f64) -> Self {
        Self { item, similarity }
    }

    /// Create a hit from a cosine distance
    pub fn from_distance(item: CatalogItem, distance: f64) -> Self {
        Self::new(item, 1.0 - distance)
    }
}

/// High-confidence search result, best first, at most a handful of hits
///
/// An empty result is a defined outcome ("no confident match"), not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredResult {
    hits: Vec<SearchHit>,
}

impl FilteredResult {
    /// Wrap hits that already passed result filtering
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self { hits }
    }

    /// The empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Accepted hits, best first
    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    /// The best hit, if any
    pub fn best(&self) -> Option<&SearchHit> {
        self.hits.first()
    }

    /// Number of accepted hits
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether no hit was accepted
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Consume into the hit list
    pub fn into_hits(self) -> Vec<SearchHit> {
        self.hits
    }
}
