//! Unit tests for domain error types

use packlens_domain::Error;

#[test]
fn test_not_found_error() {
    let error = Error::not_found("sku-404");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "sku-404"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_dimension_mismatch_display() {
    let error = Error::dimension_mismatch(2048, 512);
    assert_eq!(
        error.to_string(),
        "Dimension mismatch: expected 2048, got 512"
    );
}

#[test]
fn test_index_unavailable_error() {
    let error = Error::index_unavailable("catalog_embeddings");
    match error {
        Error::IndexUnavailable { index } => assert_eq!(index, "catalog_embeddings"),
        _ => panic!("Expected IndexUnavailable error"),
    }
}

#[test]
fn test_embedding_error() {
    let error = Error::embedding("Model not available");
    match error {
        Error::Embedding { message } => assert_eq!(message, "Model not available"),
        _ => panic!("Expected Embedding error"),
    }
}

#[test]
fn test_io_error_from_std() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io_error.into();
    assert!(matches!(error, Error::IoSimple { .. }));
}

#[test]
fn test_string_conversions() {
    let from_str: Error = "boom".into();
    let from_string: Error = String::from("bang").into();
    assert_eq!(from_str.to_string(), "String error: boom");
    assert_eq!(from_string.to_string(), "String error: bang");
}
