//! Unit tests for the versioned catalog record schema

use packlens_domain::constants::DEFAULT_PRODUCT_CATEGORY;
use packlens_domain::{CatalogItem, CatalogRecord, Error};
use serde_json::json;

fn valid_document() -> serde_json::Value {
    json!({
        "schema_version": 1,
        "id": "sku-001",
        "name": "Sparkling Water 6x500ml",
        "brand": "Fizz",
        "pack_size": "6x500ml",
        "category": "product",
        "embedding": [0.5, 0.5, 0.0],
        "created_at": "2026-01-01T00:00:00Z"
    })
}

#[test]
fn test_valid_document_becomes_item() {
    let item = CatalogItem::from_document(&valid_document()).expect("valid record");

    assert_eq!(item.id.as_str(), "sku-001");
    assert_eq!(item.display_name, "Sparkling Water 6x500ml");
    assert_eq!(item.brand, "Fizz");
    assert_eq!(item.pack_size, "6x500ml");
    assert_eq!(item.embedding, Some(vec![0.5, 0.5, 0.0]));
}

#[test]
fn test_optional_fields_take_defaults() {
    let document = json!({
        "schema_version": 1,
        "id": "sku-002",
        "name": "Crisps"
    });

    let item = CatalogItem::from_document(&document).expect("minimal record");
    assert_eq!(item.category, DEFAULT_PRODUCT_CATEGORY);
    assert!(item.brand.is_empty());
    assert!(!item.has_embedding());
}

#[test]
fn test_missing_schema_version_is_rejected() {
    let mut document = valid_document();
    document.as_object_mut().unwrap().remove("schema_version");

    let err = CatalogRecord::from_document(&document).unwrap_err();
    assert!(matches!(err, Error::InvalidRecord { .. }));
}

#[test]
fn test_future_schema_version_is_rejected() {
    let mut document = valid_document();
    document["schema_version"] = json!(2);

    let err = CatalogRecord::from_document(&document).unwrap_err();
    match err {
        Error::InvalidRecord { message } => assert!(message.contains("schema_version 2")),
        other => panic!("Expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn test_empty_name_fails_validation() {
    let mut document = valid_document();
    document["name"] = json!("");

    assert!(matches!(
        CatalogRecord::from_document(&document),
        Err(Error::InvalidRecord { .. })
    ));
}

#[test]
fn test_empty_embedding_fails_validation() {
    let mut document = valid_document();
    document["embedding"] = json!([]);

    assert!(matches!(
        CatalogRecord::from_document(&document),
        Err(Error::InvalidRecord { .. })
    ));
}

#[test]
fn test_wrongly_typed_field_is_rejected() {
    let mut document = valid_document();
    document["embedding"] = json!("not a vector");

    assert!(matches!(
        CatalogRecord::from_document(&document),
        Err(Error::InvalidRecord { .. })
    ));
}

#[test]
fn test_item_document_round_trip_preserves_fields() {
    let item = CatalogItem::new("sku-003", "Cola 12x330ml", "product")
        .with_brand("Bubbly")
        .with_pack_size("12x330ml")
        .with_embedding(vec![1.0, 0.0]);

    let document = item.to_document().expect("serializable");
    assert_eq!(document["schema_version"], json!(1));
    assert_eq!(document["name"], json!("Cola 12x330ml"));

    let parsed = CatalogItem::from_document(&document).expect("parses back");
    assert_eq!(parsed, item);
}
