//! Error Extension Tests

use packlens_domain::error::{Error, Result};
use packlens_infrastructure::error_ext::{ErrorContext, registry_error};
use std::io;

#[test]
fn test_io_context_keeps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read manifest");

    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("failed to read manifest"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context_maps_to_configuration() {
    let parse_error = "x".parse::<u32>().unwrap_err();

    let result: Result<u32> = Err(parse_error).config_context("bad batch size");

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_lazy_context_is_infrastructure() {
    let io_error = io::Error::other("disk full");

    let result: Result<()> = Err(io_error).with_context(|| format!("snapshot {}", 3));

    match result {
        Err(Error::Infrastructure { message, .. }) => assert_eq!(message, "snapshot 3: disk full"),
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_registry_error_names_the_kind() {
    let error = registry_error("Embedding", "Unknown embedding provider 'clip'".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: Embedding: Unknown embedding provider 'clip'"
    );
}
