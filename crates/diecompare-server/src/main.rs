//! Die Compare server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, and serves the JSON API over HTTP.
//!
//! ```
//! diecompare                      # same as `diecompare serve`
//! diecompare import               # import the seed catalog and exit
//! diecompare export-catalog --out frontend/public/public-dies.json
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use diecompare_core::import::import_catalog;
use diecompare_server::{ServerConfig, export::export_catalog};
use diecompare_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Die Compare catalogue server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the HTTP API (the default).
  Serve,
  /// Import the built-in catalog into the configured store and exit.
  Import,
  /// Write the built-in catalog, merged with extra entry files, as JSON.
  ExportCatalog {
    /// Output file.
    #[arg(short, long, default_value = "public-dies.json")]
    out: PathBuf,
    /// JSON array of additional dies; may be repeated.
    #[arg(long)]
    extra: Vec<PathBuf>,
  },
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

  match cli.command.unwrap_or(Command::Serve) {
    Command::Serve => serve(&cli.config).await,
    Command::Import => import(&cli.config).await,
    Command::ExportCatalog { out, extra } => {
      let written = export_catalog(&out, &extra)?;
      tracing::info!(path = %out.display(), entries = written, "catalog exported");
      Ok(())
    }
  }
}

fn load_config(path: &std::path::Path) -> anyhow::Result<ServerConfig> {
  ServerConfig::load(path).context("failed to load configuration")
}

async fn open_store(cfg: &ServerConfig) -> anyhow::Result<SqliteStore> {
  let store_path = cfg.resolved_store_path();
  SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))
}

async fn serve(config_path: &std::path::Path) -> anyhow::Result<()> {
  let cfg = load_config(config_path)?;
  let store = open_store(&cfg).await?;

  let app = diecompare_server::router(Arc::new(store), &cfg);
  let address = cfg.address();

  tracing::info!(origins = ?cfg.origins(), "Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

async fn import(config_path: &std::path::Path) -> anyhow::Result<()> {
  let cfg = load_config(config_path)?;
  let store = open_store(&cfg).await?;

  let summary = import_catalog(&store).await.context("import failed")?;
  tracing::info!(
    imported = summary.imported_count,
    skipped = summary.skipped_count,
    "catalog import finished"
  );
  println!("{}", summary.message);
  Ok(())
}
