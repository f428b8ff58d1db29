//! hotsam server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) layered with
//! `HOTSAM_*` environment variables, builds the process-wide schedule, and
//! serves the site over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use hotsam_core::{Fixture, MemoryStore, Schedule, SystemClock};
use hotsam_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "HotSam match schedule server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Override the configured listen port.
  #[arg(short, long)]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("HOTSAM").try_parsing(true))
    .build()
    .context("failed to read config file")?;

  let mut server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;
  if let Some(port) = cli.port {
    server_cfg.port = port;
  }

  let schedule = match &server_cfg.fixtures_path {
    Some(path) => Schedule::new(
      Fixture::load_all(path)
        .with_context(|| format!("failed to load fixtures from {path:?}"))?,
    ),
    None => Schedule::with_sample_fixtures(),
  };
  tracing::info!(fixtures = schedule.fixtures().len(), "schedule ready");

  let state = AppState {
    store:  Arc::new(MemoryStore::new(schedule)),
    clock:  Arc::new(SystemClock),
    config: Arc::new(server_cfg.clone()),
  };

  let app = hotsam_web::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
