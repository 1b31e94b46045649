//! Tests for the similarity search service
//!
//! Entries are indexed through a real maintenance pass; small vectors keep
//! the similarities under control.

use packlens_application::{ResultFilter, SimilaritySearchInterface};
use packlens_domain::ports::providers::CatalogStore;
use packlens_domain::{CatalogItem, ImagePayload, ItemId};

use crate::test_utils::{Fixture, at_similarity, product, quick_policy};

const PHOTO: &[u8] = b"shelf photo: six packs of sparkling water";

#[tokio::test]
async fn test_exact_vector_is_top_hit() {
    let fixture = Fixture::new(2).await;
    fixture.catalog.put(product("a", at_similarity(0.5))).await.unwrap();
    fixture.catalog.put(product("b", vec![1.0, 0.0])).await.unwrap();
    fixture.maintainer(quick_policy(3)).run_until_quiescent().await.unwrap();

    let hits = fixture
        .search()
        .search_vector(&at_similarity(0.5), 5, Some("product"))
        .await;

    assert_eq!(hits[0].item.id, ItemId::new("a"));
    assert!((hits[0].similarity - 1.0).abs() < 1e-4);
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn test_search_then_filter_keeps_confident_hits() {
    let fixture = Fixture::new(2).await;
    fixture.catalog.put(product("strong", at_similarity(0.96))).await.unwrap();
    fixture.catalog.put(product("close", at_similarity(0.93))).await.unwrap();
    fixture.catalog.put(product("weak", at_similarity(0.80))).await.unwrap();
    fixture.maintainer(quick_policy(3)).run_until_quiescent().await.unwrap();

    let hits = fixture.search().search_vector(&[1.0, 0.0], 5, Some("product")).await;
    let result = ResultFilter::default().apply(hits);

    let ids: Vec<&str> = result.hits().iter().map(|h| h.item.id.as_str()).collect();
    assert_eq!(ids, vec!["strong", "close"]);
}

#[tokio::test]
async fn test_indexed_vector_exactly_at_gate_is_kept() {
    let fixture = Fixture::new(2).await;
    fixture.catalog.put(product("edge", at_similarity(0.90))).await.unwrap();
    fixture.maintainer(quick_policy(3)).run_until_quiescent().await.unwrap();

    let hits = fixture.search().search_vector(&[1.0, 0.0], 5, Some("product")).await;
    assert!((hits[0].similarity - 0.90).abs() < 1e-6);

    let result = ResultFilter::default().apply(hits);
    assert_eq!(result.hits().len(), 1);
    assert_eq!(result.hits()[0].item.id, ItemId::new("edge"));
}

#[tokio::test]
async fn test_photo_of_a_reference_image_matches_its_item() {
    let fixture = Fixture::new(16).await;
    let sku = CatalogItem::new("sku-001", "Sparkling Water 6x500ml", "product");
    fixture.catalog.put(sku).await.unwrap();
    fixture
        .catalog
        .put_image(&ItemId::new("sku-001"), ImagePayload::jpeg(PHOTO.to_vec()))
        .await
        .unwrap();
    let other = CatalogItem::new("sku-002", "Orange Juice 1l", "product");
    fixture.catalog.put(other).await.unwrap();
    fixture
        .catalog
        .put_image(
            &ItemId::new("sku-002"),
            ImagePayload::jpeg(b"a completely different reference image".to_vec()),
        )
        .await
        .unwrap();
    fixture.maintainer(quick_policy(3)).run_until_quiescent().await.unwrap();

    let result = fixture
        .search()
        .find_similar(&ImagePayload::jpeg(PHOTO.to_vec()))
        .await;

    assert_eq!(result.len(), 1);
    let best = result.best().unwrap();
    assert_eq!(best.item.id, ItemId::new("sku-001"));
    assert!(best.similarity > 0.999);
}

#[tokio::test]
async fn test_rejected_photo_never_queries_the_index() {
    let fixture = Fixture::new(16).await;
    fixture.catalog.put(product("a", vec![1.0; 16])).await.unwrap();
    fixture.maintainer(quick_policy(3)).run_until_quiescent().await.unwrap();

    // Below the embedding provider's minimum payload size
    let result = fixture
        .search()
        .find_similar(&ImagePayload::jpeg(vec![1, 2, 3]))
        .await;

    assert!(result.is_empty());
    assert_eq!(fixture.index.queries(), 0);
}

#[tokio::test]
async fn test_category_filter_excludes_other_categories() {
    let fixture = Fixture::new(2).await;
    let shelf = CatalogItem::new("shelf", "Shelf label", "shelf").with_embedding(vec![1.0, 0.0]);
    fixture.catalog.put(shelf).await.unwrap();
    fixture.catalog.put(product("p", at_similarity(0.95))).await.unwrap();
    fixture.maintainer(quick_policy(3)).run_until_quiescent().await.unwrap();

    let search = fixture.search();
    let products = search.search_vector(&[1.0, 0.0], 5, Some("product")).await;
    let everything = search.search_vector(&[1.0, 0.0], 5, None).await;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].item.id, ItemId::new("p"));
    assert_eq!(everything[0].item.id, ItemId::new("shelf"));
}

#[tokio::test]
async fn test_deleted_item_is_not_returned_before_retirement() {
    let fixture = Fixture::new(2).await;
    fixture.catalog.put(product("gone", vec![1.0, 0.0])).await.unwrap();
    fixture.maintainer(quick_policy(3)).run_until_quiescent().await.unwrap();

    fixture.catalog.delete(&ItemId::new("gone")).await.unwrap();

    let hits = fixture.search().search_vector(&[1.0, 0.0], 5, Some("product")).await;
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_category_change_is_rechecked_at_join() {
    let fixture = Fixture::new(2).await;
    fixture.catalog.put(product("a", vec![1.0, 0.0])).await.unwrap();
    fixture.maintainer(quick_policy(3)).run_until_quiescent().await.unwrap();

    let moved = CatalogItem::new("a", "Product a", "shelf").with_embedding(vec![1.0, 0.0]);
    fixture.catalog.put(moved).await.unwrap();

    let hits = fixture.search().search_vector(&[1.0, 0.0], 5, Some("product")).await;
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_failures_yield_empty_results() {
    // Index never created
    let fixture = Fixture::bare(2);
    let search = fixture.search();
    assert!(search.search_vector(&[1.0, 0.0], 5, None).await.is_empty());

    // Wrong query dimension
    let fixture = Fixture::new(2).await;
    fixture.catalog.put(product("a", vec![1.0, 0.0])).await.unwrap();
    fixture.maintainer(quick_policy(3)).run_until_quiescent().await.unwrap();
    let hits = fixture.search().search_vector(&[1.0, 0.0, 0.0], 5, None).await;
    assert!(hits.is_empty());
}
