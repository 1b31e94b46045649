//! PackLens - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `packlens index --catalog catalog.json` | Ingest a catalog and report index statistics |
//! | `packlens analyze --catalog catalog.json shelf.jpg` | Match and count packs in shelf photos |
//! | `packlens providers` | List registered embedding and counting providers |

// Force-link packlens-providers to ensure linkme inventory registrations are included
extern crate packlens_providers;

use clap::Parser;
use packlens::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
