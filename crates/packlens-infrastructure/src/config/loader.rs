//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use packlens_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `PACKLENS__INDEX__DIMENSIONS`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_provider_config(config)?;
    validate_index_config(config)?;
    validate_maintenance_config(config)?;
    validate_filter_config(config)?;
    Ok(())
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Configuration {
        message: message.into(),
        source: None,
    }
}

fn validate_provider_config(config: &AppConfig) -> Result<()> {
    if config.embedding.provider.trim().is_empty() {
        return Err(invalid("Embedding provider name cannot be empty"));
    }
    if config.counting.provider.trim().is_empty() {
        return Err(invalid("Counting pipeline name cannot be empty"));
    }
    Ok(())
}

fn validate_index_config(config: &AppConfig) -> Result<()> {
    if config.index.name.trim().is_empty() {
        return Err(invalid("Index name cannot be empty"));
    }
    if config.index.dimensions == 0 {
        return Err(invalid("Index dimensions must be greater than 0"));
    }
    Ok(())
}

fn validate_maintenance_config(config: &AppConfig) -> Result<()> {
    if config.maintenance.batch_size == 0 {
        return Err(invalid("Maintenance batch size must be greater than 0"));
    }
    if config.maintenance.quiescence_timeout_secs == 0 {
        return Err(invalid("Quiescence timeout must be greater than 0"));
    }
    Ok(())
}

fn validate_filter_config(config: &AppConfig) -> Result<()> {
    let filter = &config.filter;
    for (name, value) in [
        ("similarity_floor", filter.similarity_floor),
        ("best_match_gate", filter.best_match_gate),
        ("relative_gap", filter.relative_gap),
    ] {
        if !(value > 0.0 && value <= 1.0) {
            return Err(invalid(format!(
                "Filter {name} must be in (0, 1], got {value}"
            )));
        }
    }
    if filter.best_match_gate < filter.similarity_floor {
        return Err(invalid(format!(
            "Filter best_match_gate ({}) cannot be below similarity_floor ({})",
            filter.best_match_gate, filter.similarity_floor
        )));
    }
    if filter.max_results == 0 {
        return Err(invalid("Filter max_results must be greater than 0"));
    }
    if config.search.limit < filter.max_results {
        return Err(invalid(format!(
            "Search limit ({}) cannot be below filter max_results ({})",
            config.search.limit, filter.max_results
        )));
    }
    Ok(())
}
