//! Command line front end
//!
//! Every command writes one JSON document to stdout. Logs go to stderr (and
//! optionally a file) so the output stays machine-readable.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use packlens_application::{
    AnalysisServiceInterface, IngestReport, content_type_for, list_counting_pipelines,
    list_embedding_providers,
};
use packlens_domain::{AnalysisReport, ImagePayload, IndexStats};
use packlens_infrastructure::config::{AppConfig, ConfigLoader};
use packlens_infrastructure::di::{AppContext, init_app};
use packlens_infrastructure::logging::init_logging;
use serde::Serialize;
use tracing::{info, warn};

/// Command line interface for PackLens
#[derive(Parser, Debug)]
#[command(name = "packlens")]
#[command(about = "PackLens - Shelf photo analysis against a pack catalog")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ingest a catalog manifest and report index statistics
    Index {
        /// Catalog manifest (JSON)
        #[arg(long)]
        catalog: PathBuf,
    },
    /// Analyze shelf photos against a catalog
    Analyze {
        /// Catalog manifest (JSON)
        #[arg(long)]
        catalog: PathBuf,
        /// Photos to analyze
        #[arg(required = true)]
        photos: Vec<PathBuf>,
    },
    /// List registered embedding and counting providers
    Providers,
}

/// Output of `index`
#[derive(Debug, Serialize)]
pub struct IndexSummary {
    pub ingest: IngestReport,
    pub index: IndexStats,
}

/// Output of `analyze`, one per photo
#[derive(Debug, Serialize)]
pub struct PhotoAnalysis {
    pub photo: PathBuf,
    pub report: AnalysisReport,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    pub description: String,
}

/// Output of `providers`
#[derive(Debug, Serialize)]
pub struct ProviderListing {
    pub embedding: Vec<ProviderInfo>,
    pub counting: Vec<ProviderInfo>,
}

impl ProviderListing {
    /// Snapshot of the linkme registries
    pub fn collect() -> Self {
        let to_info = |(name, description): (&str, &str)| ProviderInfo {
            name: name.to_string(),
            description: description.to_string(),
        };
        Self {
            embedding: list_embedding_providers().into_iter().map(to_info).collect(),
            counting: list_counting_pipelines().into_iter().map(to_info).collect(),
        }
    }
}

/// Load config, initialize logging, run the command and print its output
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let output = execute(config, &cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Load configuration from optional path
pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Run one command and return its JSON output
pub async fn execute(config: AppConfig, command: &Command) -> anyhow::Result<serde_json::Value> {
    let output = match command {
        Command::Providers => serde_json::to_value(ProviderListing::collect())?,
        Command::Index { catalog } => {
            let context = init_app(config).await?;
            serde_json::to_value(index_catalog(&context, catalog).await?)?
        }
        Command::Analyze { catalog, photos } => {
            let context = init_app(config).await?;
            index_catalog(&context, catalog).await?;
            serde_json::to_value(analyze_photos(&context, photos).await?)?
        }
    };
    Ok(output)
}

/// Ingest `catalog` with background maintenance running until the index catches up
pub async fn index_catalog(context: &AppContext, catalog: &Path) -> anyhow::Result<IndexSummary> {
    let maintenance = context.start_maintenance().await?;
    let ingested = context.ingest_manifest(catalog).await;
    maintenance.shutdown().await?;

    let ingest = ingested.with_context(|| format!("failed to index {}", catalog.display()))?;
    for failure in &ingest.failures {
        warn!(catalog = %catalog.display(), "{failure}");
    }

    let index = context.index_stats().await?;
    info!(
        stored = ingest.stored,
        images = ingest.images,
        entries = index.entries,
        "Catalog indexed"
    );
    Ok(IndexSummary { ingest, index })
}

/// Analyze each photo in turn
///
/// An unreadable photo aborts the run; a photo that matches nothing yields an
/// empty report.
pub async fn analyze_photos(
    context: &AppContext,
    photos: &[PathBuf],
) -> anyhow::Result<Vec<PhotoAnalysis>> {
    let analysis = context.analysis();
    let mut results = Vec::with_capacity(photos.len());

    for photo in photos {
        let bytes = tokio::fs::read(photo)
            .await
            .with_context(|| format!("failed to read photo {}", photo.display()))?;
        let payload = ImagePayload::new(bytes, content_type_for(photo));
        let outcome = analysis.analyze(&payload).await;
        info!(
            photo = %photo.display(),
            matches = outcome.matches.len(),
            counts = outcome.counts.len(),
            "Photo analyzed"
        );
        results.push(PhotoAnalysis {
            photo: photo.clone(),
            report: outcome.to_report(),
        });
    }

    Ok(results)
}
