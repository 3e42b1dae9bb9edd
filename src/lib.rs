mod cli;
pub mod db;
pub mod goals;
pub mod journal;
pub mod mood;
pub mod mood_series;
pub mod settings;
mod utils;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use db::Database;
use settings::SettingsStore;

pub const DATABASE_FILE: &str = "wellmind.sqlite3";
pub const SETTINGS_FILE: &str = "settings.json";

/// Shared handles passed to every command.
pub struct AppState {
    pub db: Database,
    pub settings: SettingsStore,
}

impl AppState {
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let db = Database::new(data_dir.join(DATABASE_FILE))?;
        let settings = SettingsStore::new(data_dir.join(SETTINGS_FILE))?;

        Ok(Self { db, settings })
    }
}

/// Initialize logging; `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
}

pub fn run() -> Result<()> {
    init_logging();

    let cli = cli::Cli::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(cli::execute(cli))
}
