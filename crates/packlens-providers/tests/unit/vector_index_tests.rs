//! Tests for the in-memory vector index
//!
//! Covers cosine ranking, filtered queries, atomic batches, cursor rules and
//! snapshot persistence.

use packlens_domain::ports::providers::{VectorIndexAdmin, VectorIndexProvider};
use packlens_domain::{Error, IndexBatch, IndexCursor, IndexEntry, ItemId, VectorQuery};
use packlens_providers::vector_index::InMemoryVectorIndex;
use tempfile::TempDir;

const INDEX: &str = "catalog_embeddings";

fn entry(id: &str, category: &str, vector: Vec<f32>) -> IndexEntry {
    IndexEntry {
        item_id: ItemId::new(id),
        category: category.to_string(),
        vector,
    }
}

async fn seeded_index() -> InMemoryVectorIndex {
    let index = InMemoryVectorIndex::new();
    index.create_index(INDEX, 2).await.unwrap();

    let mut batch = IndexBatch::new(IndexCursor::new(3));
    batch.upserts = vec![
        entry("east", "product", vec![1.0, 0.0]),
        entry("north-east", "product", vec![1.0, 1.0]),
        entry("north", "shelf", vec![0.0, 1.0]),
    ];
    index.commit_batch(INDEX, batch).await.unwrap();
    index
}

#[tokio::test]
async fn test_query_orders_by_cosine_distance() {
    let index = seeded_index().await;

    let matches = index
        .query(INDEX, &VectorQuery::new(vec![1.0, 0.1], 3))
        .await
        .unwrap();

    let ids: Vec<&str> = matches.iter().map(|m| m.item_id.as_str()).collect();
    assert_eq!(ids, vec!["east", "north-east", "north"]);
    assert!(matches[0].distance < 0.01);
    assert!(matches.windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[tokio::test]
async fn test_category_filter_is_applied_inside_the_query() {
    let index = seeded_index().await;

    // "north" is the closest entry overall, but not a product
    let matches = index
        .query(
            INDEX,
            &VectorQuery::new(vec![0.0, 1.0], 1).with_category("product"),
        )
        .await
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].item_id.as_str(), "north-east");
}

#[tokio::test]
async fn test_query_dimension_mismatch() {
    let index = seeded_index().await;

    let err = index
        .query(INDEX, &VectorQuery::new(vec![1.0, 0.0, 0.0], 3))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    ));
}

#[tokio::test]
async fn test_missing_index_is_unavailable() {
    let index = InMemoryVectorIndex::new();

    assert!(!index.index_exists(INDEX).await.unwrap());
    assert!(matches!(
        index.query(INDEX, &VectorQuery::new(vec![1.0], 1)).await,
        Err(Error::IndexUnavailable { .. })
    ));
    assert!(matches!(
        index.cursor(INDEX).await,
        Err(Error::IndexUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_create_index_is_idempotent_per_dimension() {
    let index = InMemoryVectorIndex::new();
    index.create_index(INDEX, 4).await.unwrap();
    index.create_index(INDEX, 4).await.unwrap();

    assert!(matches!(
        index.create_index(INDEX, 8).await,
        Err(Error::VectorIndex { .. })
    ));
}

#[tokio::test]
async fn test_batch_with_wrong_dimension_applies_nothing() {
    let index = seeded_index().await;

    let mut batch = IndexBatch::new(IndexCursor::new(5));
    batch.upserts = vec![
        entry("ok", "product", vec![0.5, 0.5]),
        entry("bad", "product", vec![0.5, 0.5, 0.5]),
    ];
    batch.retired = vec![ItemId::new("east")];

    assert!(index.commit_batch(INDEX, batch).await.is_err());

    let stats = index.stats(INDEX).await.unwrap();
    assert_eq!(stats.entries, 3);
    assert_eq!(stats.cursor, IndexCursor::new(3));
    assert!(index.contains(INDEX, &ItemId::new("east")));
    assert!(!index.contains(INDEX, &ItemId::new("ok")));
}

#[tokio::test]
async fn test_cursor_never_moves_backwards() {
    let index = seeded_index().await;

    assert!(
        index
            .commit_batch(INDEX, IndexBatch::new(IndexCursor::new(2)))
            .await
            .is_err()
    );
    assert_eq!(index.cursor(INDEX).await.unwrap(), IndexCursor::new(3));
}

#[tokio::test]
async fn test_retirement_removes_entry() {
    let index = seeded_index().await;

    let mut batch = IndexBatch::new(IndexCursor::new(4));
    batch.retired = vec![ItemId::new("east"), ItemId::new("never-indexed")];
    index.commit_batch(INDEX, batch).await.unwrap();

    assert!(!index.contains(INDEX, &ItemId::new("east")));
    assert_eq!(index.stats(INDEX).await.unwrap().entries, 2);
}

#[tokio::test]
async fn test_snapshot_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("index").join("snapshot.json");

    {
        let index = InMemoryVectorIndex::with_snapshot(&path).await.unwrap();
        index.create_index(INDEX, 2).await.unwrap();
        let mut batch = IndexBatch::new(IndexCursor::new(9));
        batch.upserts = vec![entry("east", "product", vec![1.0, 0.0])];
        index.commit_batch(INDEX, batch).await.unwrap();
    }

    assert!(path.exists());
    let reopened = InMemoryVectorIndex::with_snapshot(&path).await.unwrap();
    let stats = reopened.stats(INDEX).await.unwrap();
    assert_eq!(stats.cursor, IndexCursor::new(9));
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.dimensions, 2);

    let matches = reopened
        .query(INDEX, &VectorQuery::new(vec![1.0, 0.0], 1))
        .await
        .unwrap();
    assert_eq!(matches[0].item_id.as_str(), "east");
}

#[tokio::test]
async fn test_corrupt_snapshot_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, b"not json").unwrap();

    assert!(InMemoryVectorIndex::with_snapshot(&path).await.is_err());
}

#[tokio::test]
async fn test_bind_catalog_keeps_entries_for_same_epoch() {
    let index = seeded_index().await;
    assert_eq!(index.stats(INDEX).await.unwrap().catalog_epoch, None);

    // Entries of an unbound index are not trusted
    index.bind_catalog(INDEX, "epoch-a").await.unwrap();
    assert_eq!(index.stats(INDEX).await.unwrap().entries, 0);

    let mut batch = IndexBatch::new(IndexCursor::new(4));
    batch.upserts = vec![entry("west", "product", vec![-1.0, 0.0])];
    index.commit_batch(INDEX, batch).await.unwrap();
    index.bind_catalog(INDEX, "epoch-a").await.unwrap();

    let stats = index.stats(INDEX).await.unwrap();
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.cursor, IndexCursor::new(4));
    assert_eq!(stats.catalog_epoch.as_deref(), Some("epoch-a"));
}

#[tokio::test]
async fn test_bind_catalog_to_new_epoch_clears_entries_and_cursor() {
    let index = InMemoryVectorIndex::new();
    index.create_index(INDEX, 2).await.unwrap();
    index.bind_catalog(INDEX, "epoch-a").await.unwrap();
    let mut batch = IndexBatch::new(IndexCursor::new(3));
    batch.upserts = vec![entry("east", "product", vec![1.0, 0.0])];
    index.commit_batch(INDEX, batch).await.unwrap();

    index.bind_catalog(INDEX, "epoch-b").await.unwrap();

    let stats = index.stats(INDEX).await.unwrap();
    assert_eq!(stats.entries, 0);
    assert_eq!(stats.cursor, IndexCursor::START);
    assert_eq!(stats.dimensions, 2);
    assert_eq!(stats.catalog_epoch.as_deref(), Some("epoch-b"));
    assert!(!index.contains(INDEX, &ItemId::new("east")));
}

#[tokio::test]
async fn test_bind_catalog_on_missing_index_is_unavailable() {
    let index = InMemoryVectorIndex::new();

    let err = index.bind_catalog(INDEX, "epoch-a").await.unwrap_err();
    assert!(matches!(err, Error::IndexUnavailable { .. }));
}

#[tokio::test]
async fn test_snapshot_keeps_catalog_epoch() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");

    {
        let index = InMemoryVectorIndex::with_snapshot(&path).await.unwrap();
        index.create_index(INDEX, 2).await.unwrap();
        index.bind_catalog(INDEX, "epoch-a").await.unwrap();
        let mut batch = IndexBatch::new(IndexCursor::new(2));
        batch.upserts = vec![entry("east", "product", vec![1.0, 0.0])];
        index.commit_batch(INDEX, batch).await.unwrap();
    }

    let reopened = InMemoryVectorIndex::with_snapshot(&path).await.unwrap();
    let stats = reopened.stats(INDEX).await.unwrap();
    assert_eq!(stats.catalog_epoch.as_deref(), Some("epoch-a"));
    assert_eq!(stats.cursor, IndexCursor::new(2));

    // Rebinding is persisted too
    reopened.bind_catalog(INDEX, "epoch-b").await.unwrap();
    let again = InMemoryVectorIndex::with_snapshot(&path).await.unwrap();
    let stats = again.stats(INDEX).await.unwrap();
    assert_eq!(stats.catalog_epoch.as_deref(), Some("epoch-b"));
    assert_eq!(stats.entries, 0);
    assert_eq!(stats.cursor, IndexCursor::START);
}
