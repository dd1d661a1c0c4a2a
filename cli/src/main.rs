#![cfg(feature = "executable")]

use clap::Parser as _;
use color_eyre::{Result, eyre::WrapErr as _};
use dotenvy::dotenv;
use moties_cli::{args::Cli, config};
use moties_engine::{HttpMotionApi, MotionView};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber, filter::LevelFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logger().wrap_err("Failed to initialize logger")?;

    if let Err(err) = dotenv() {
        debug!(%err, "No `.env` file loaded");
    }

    let cli = Cli::parse();
    let config = config::resolve(cli.api_base_url, cli.limit).wrap_err("Failed to read config")?;
    info!(api_base_url = %config.api_base_url, "Using backend");

    let api = HttpMotionApi::from_config(&config);
    let mut view = MotionView::new(config.recent_limit);
    let mut stdout = std::io::stdout().lock();

    moties_cli::run(cli.command, &mut view, &api, &mut stdout).await
}

/// Initialize logger writing to stderr, so that stdout only carries command output.
fn init_logger() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).wrap_err("Failed to set global logger")
}
