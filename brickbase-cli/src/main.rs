//! Brickbase command-line entry point.
//!
//! Two operational commands:
//!
//! ```bash
//! brickbase serve              # run the read-only HTTP surface
//! brickbase sync-index         # full-rewrite push into the search index
//! ```
//!
//! Both read `brickbase.toml` from the working directory unless
//! `--config` points elsewhere, with `BB_*` environment variables
//! applied on top.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use brickbase_core::http::{self, AppState};
use brickbase_core::search::{self, HostedSearchClient, MemoryIndex, SearchIndex};
use brickbase_core::{init_logging, BrickbaseConfig, DocumentStore};

#[derive(Parser)]
#[command(name = "brickbase", about = "Real-estate content backend", version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "brickbase.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the public JSON API
    Serve,

    /// Rewrite the hosted search index from the property collection
    SyncIndex,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = BrickbaseConfig::load_from(&cli.config)?;
    init_logging(&config.logging);

    let store = Arc::new(DocumentStore::open(&config.storage.data_dir)?);
    let index = build_index(&config);

    match cli.command {
        Commands::Serve => {
            let state = Arc::new(AppState::new(store, index));
            http::serve(&config.server.bind_addr(), state).await
        }
        Commands::SyncIndex => {
            let pushed = search::sync_all(&store, index.as_ref()).await?;
            println!("pushed {pushed} record(s) to the search index");
            Ok(())
        }
    }
}

/// The hosted index needs an API key; without one, fall back to the
/// in-process index so local development works out of the box.
fn build_index(config: &BrickbaseConfig) -> Arc<dyn SearchIndex> {
    if config.search.api_key.is_some() {
        Arc::new(HostedSearchClient::new(&config.search))
    } else {
        log::warn!("BB_SEARCH_API_KEY not set, using the in-process search index");
        Arc::new(MemoryIndex::new())
    }
}
