//! Environment override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p packlens-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```

use packlens_infrastructure::config::ConfigLoader;
use std::env;
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_prefixed_env_vars_override_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("packlens.toml");
    std::fs::write(&path, "[maintenance]\nbatch_size = 10\n").unwrap();
    set_env("PACKLENS__MAINTENANCE__BATCH_SIZE", "7");
    set_env("PACKLENS__INDEX__NAME", "shelf_index");

    let config = ConfigLoader::new().with_config_path(&path).load();

    remove_env("PACKLENS__MAINTENANCE__BATCH_SIZE");
    remove_env("PACKLENS__INDEX__NAME");
    let config = config.unwrap();
    assert_eq!(config.maintenance.batch_size, 7);
    assert_eq!(config.index.name, "shelf_index");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_is_ignored() {
    let dir = TempDir::new().unwrap();
    set_env("PACKLENS_INDEX_NAME", "ignored");

    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load();

    remove_env("PACKLENS_INDEX_NAME");
    assert_eq!(config.unwrap().index.name, "catalog_embeddings");
}
