//! vigil-scored - Behavioral risk scoring service.
//!
//! Entry point for the scorer binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil::config::Config;
use vigil::scoring::ScoreLog;

/// Command-line arguments for vigil-scored
#[derive(Parser, Debug)]
#[command(name = "vigil-scored")]
#[command(version, about = "Behavioral risk scoring service", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Listen address, host:port
    #[arg(short, long, env = "VIGIL_LISTEN_ADDR")]
    listen: Option<String>,

    /// Score log path
    #[arg(long, env = "VIGIL_SCORE_LOG")]
    score_log: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil=debug,warp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting vigil-scored v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = config.with_overrides(args.listen, args.score_log);

    let addr: SocketAddr = config
        .listen
        .parse()
        .with_context(|| format!("invalid listen address {}", config.listen))?;
    let log = Arc::new(ScoreLog::new(&config.score_log));

    tracing::info!(
        "Scoring service listening on {} (score log: {})",
        addr,
        log.path().display()
    );
    vigil::server::run(addr, log).await;

    Ok(())
}
