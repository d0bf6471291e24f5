//! symptra-server binary.
//!
//! Reads `symptra.toml` (or the path given with `--config`) layered with
//! `SYMPTRA_*` environment variables, loads the classifier and reference
//! tables once, and serves the JSON API over HTTP.
//!
//! ```
//! cargo run -p symptra-server -- --config symptra.toml
//! cargo run -p symptra-server -- --check
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use symptra_server::{AppState, ServerConfig, startup};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Symptra symptom lookup server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "symptra.toml")]
  config: PathBuf,

  /// Load the model and reference tables, report problems, and exit.
  #[arg(long)]
  check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(
      config::Environment::with_prefix("SYMPTRA")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true),
    )
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let predictor = startup::load(&server_cfg)?;

  if cli.check {
    tracing::info!(
      symptoms = predictor.vocabulary().len(),
      diseases = predictor.references().diseases().len(),
      "deployment check passed"
    );
    return Ok(());
  }

  let app = symptra_server::router(AppState::new(predictor));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
