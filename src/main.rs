use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use matchboard::config::AppConfig;
use matchboard::db::cache::CacheStore;
use matchboard::logging;
use matchboard::server::{self, AppState};
use matchboard::service::aggregator::MatchService;
use matchboard::upstream::client::FootballApiClient;

#[derive(Parser)]
#[command(about = "Football fixtures backend")]
struct Cli {
    /// Path to the TOML config file (default: config/default.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, secrets) = AppConfig::load(cli.config.as_deref())?;

    logging::init_logging(&config.monitoring)?;

    let token = secrets
        .football_data_token
        .context("FOOTBALL_DATA_TOKEN is not set")?;
    let client = FootballApiClient::new(&config.upstream, token)?;

    // The service is useful without its cache, just slower and more
    // expensive upstream, so a broken database is not fatal.
    let cache = match CacheStore::connect(&config.cache.path).await {
        Ok(cache) => cache,
        Err(e) => {
            warn!(path = %config.cache.path, error = %e, "Cache database unavailable — running uncached");
            CacheStore::disconnected()
        }
    };

    let state = AppState::new(MatchService::new(client, cache));
    let app = server::router(state, &config.server.cors_origin);

    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.bind, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(addr = %addr, "matchboard backend listening");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
