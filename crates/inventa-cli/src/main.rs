//! inventa command-line binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the JSON
//! snapshot store, resumes the persisted session, and dispatches one
//! subcommand. State is written back after every mutation.

mod cli;
mod commands;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser as _;
use inventa_core::{auth::Session, repository::Repository};
use inventa_store_json::JsonStore;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

/// Runtime configuration, deserialised from `config.toml` layered with
/// `INVENTA_*` environment variables.
#[derive(Debug, Deserialize)]
struct AppConfig {
  /// Directory holding the snapshot and session files.
  #[serde(default = "default_data_dir")]
  data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf { PathBuf::from(".inventa") }

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("INVENTA"))
    .build()
    .context("failed to read configuration")?;

  let app_cfg: AppConfig = settings
    .try_deserialize()
    .context("failed to deserialise AppConfig")?;

  let store = JsonStore::open(&app_cfg.data_dir).with_context(|| {
    format!("failed to open data directory {}", app_cfg.data_dir.display())
  })?;

  let mut session = Session::resume(&store).unwrap_or_else(|e| {
    tracing::warn!("could not resume session: {e}");
    Session::default()
  });

  let mut repo = Repository::open(store.clone())
    .context("failed to load the asset snapshot")?;

  match cli.command {
    Command::Login { username, password } => {
      commands::login(&mut session, &store, &username, &password)
    }
    Command::Logout => commands::logout(&mut session, &store),
    Command::Whoami => commands::whoami(&session),
    Command::Add(args) => commands::add(&mut repo, &session, args),
    Command::Update { id, draft } => {
      commands::update(&mut repo, &session, id, draft)
    }
    Command::Delete { id, yes } => {
      commands::delete(&mut repo, &session, id, yes)
    }
    Command::List { search } => commands::list(&repo, &session, search),
    Command::Report { kind } => commands::report(&repo, &session, kind),
    Command::Export { format, search, out } => {
      commands::export(&repo, &session, format, search, out)
    }
    Command::Import { file } => commands::import(&mut repo, &session, &file),
    Command::Qr { id } => commands::qr(&repo, &session, id),
  }
}
