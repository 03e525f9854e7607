//! quickpaste server binary.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use quickpaste::config::{Config, StoreKind};
use quickpaste::store::{FsStore, MemoryStore, PasteStore};
use quickpaste::{Server, paste};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let store: Arc<dyn PasteStore> = match config.store {
        StoreKind::Memory => Arc::new(MemoryStore::new()),
        StoreKind::Fs => Arc::new(
            FsStore::open(&config.data_dir)
                .await
                .with_context(|| format!("failed to open store at {}", config.data_dir.display()))?,
        ),
    };
    tracing::info!(store = ?config.store, "store ready");

    Server::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?
        .serve(paste::app(store))
        .await
        .context("server error")
}
