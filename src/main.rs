// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use order_cache_viewer::{
    cache::OrderCache, cli::Cli, config::load_config, utils::setup_logging, viewer::view,
};

fn main() -> Result<()> {
    // Parse first so a missing ORDER_ID never touches config or the network.
    let cli = Cli::parse();

    let config = load_config().context("failed to load viewer configuration")?;
    setup_logging(config.log_level).context("failed to initialize logging")?;
    config.validate_and_log();

    let mut cache = OrderCache::open(&config.redis_url).context("failed to open Redis client")?;
    let stdout = std::io::stdout();
    view(&mut cache, &cli.order_id, config.render_width, &mut stdout.lock())
        .map_err(|e| {
            error!("Lookup of {} failed ({}): {}", cli.order_id, e.kind(), e);
            e
        })
        .with_context(|| format!("failed to view cached order {}", cli.order_id))?;
    Ok(())
}
