//! Pokedex CLI - An interactive PokeAPI client
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging (stderr, so the prompt stays clean)
//! 2. Load configuration from environment variables
//! 3. Create the response cache, which spawns its background reaper
//! 4. Build the HTTP client and run the REPL
//! 5. On exit, drain the reaper before the process ends

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedexcli::api::{HttpFetch, PokeApiClient};
use pokedexcli::cache::Cache;
use pokedexcli::repl::Repl;
use pokedexcli::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to warnings only; RUST_LOG overrides
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedexcli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "configuration loaded: cache_interval={:?}, page_size={}, base_url={}",
        config.cache_interval, config.page_size, config.api_base_url
    );

    let cache = Cache::new(config.cache_interval);
    let fetcher = HttpFetch::new(config.request_timeout).context("failed to build HTTP client")?;
    let client = PokeApiClient::new(fetcher, cache.clone(), config.api_base_url.clone());

    let mut repl = Repl::new(client, config.page_size);
    let run_result = repl.run().await;

    // Drain the reaper whether the loop ended by exit, EOF, or Ctrl-C
    cache.shutdown().await;
    info!("shutdown complete");

    run_result.context("REPL terminated on an I/O failure")?;
    Ok(())
}
