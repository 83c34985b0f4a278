//! Haven console client.
//!
//! Composition root for one tabletop session:
//! 1. Configuration from `.env`, the environment, then command-line flags
//! 2. Logging into a per-session log directory
//! 3. Catalog loaded from RON and handed to the runtime
//! 4. A line-oriented console loop driving the runtime handle
//!
//! # Examples
//!
//! ```bash
//! # Default catalog, logs under the platform cache directory
//! cargo run -p haven-client
//!
//! # Reproducible draws with logs on stderr
//! cargo run -p haven-client -- --seed 42 --stderr-logs
//! ```
mod app;
mod command;
mod config;
mod logging;
mod render;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use app::ConsoleApp;
use config::{Cli, ClientConfig};
use runtime::Runtime;
use tabletop_content::CatalogLoader;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env().with_cli(Cli::parse());
    let _log_guard = logging::setup_logging(&config)?;

    let catalog = Arc::new(CatalogLoader::load(&config.catalog_path)?);
    info!(
        "Catalog loaded: {} ({} characters, {} monsters)",
        config.catalog_path.display(),
        catalog.characters.len(),
        catalog.monsters.len()
    );

    let runtime = Runtime::builder()
        .config(config.runtime.clone())
        .shared_catalog(catalog.clone())
        .build()
        .await?;

    ConsoleApp::new(runtime.handle(), catalog).run().await?;

    runtime.shutdown().await?;
    Ok(())
}
