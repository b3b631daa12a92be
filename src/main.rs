use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use bioastra::api::{self, AppState};
use bioastra::engine::{Config, RecordSource, StaticStore};

#[derive(Parser)]
#[command(name = "bioastra", about = "BIOAstra: search and aggregate space-biology publications")]
struct Cli {
    /// Config file. Defaults to ~/.config/bioastra/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding `server.bind`.
    #[arg(long)]
    bind: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    let store = match &config.store.data_path {
        Some(path) => StaticStore::from_path(path)
            .with_context(|| format!("loading records from {}", path.display()))?,
        None => StaticStore::sample().context("loading embedded sample records")?,
    };
    tracing::info!(records = store.len(), "record store ready");

    let source: Arc<dyn RecordSource> = Arc::new(store);
    let state = Arc::new(AppState::new(source, &config));
    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());

    api::serve(&bind, state).await
}
