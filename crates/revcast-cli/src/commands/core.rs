//! Shared session setup and output helpers

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use revcast_core::config::{default_data_dir, EngineConfig};
use revcast_core::format::format_currency;
use revcast_core::{DataSet, RevcastEngine};
use serde::Serialize;

/// Everything a command needs: the engine, the loaded data and output mode
pub struct Session {
    pub engine: RevcastEngine,
    pub data: DataSet,
    pub json: bool,
}

impl Session {
    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: f64) -> String {
        format_currency(&self.engine.config().budget.currency_symbol, amount)
    }
}

/// Load config and data, then build the engine
pub fn open_session(
    data_dir: Option<&Path>,
    config_path: Option<&Path>,
    seed: Option<u64>,
    json: bool,
) -> Result<Session> {
    let mut config = EngineConfig::load(config_path).context("Failed to load engine config")?;
    if seed.is_some() {
        config.seed = seed;
    }

    let dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_data_dir().unwrap_or_else(|| PathBuf::from(".")),
    };
    let data = DataSet::load(&dir)
        .with_context(|| format!("Failed to load data from {}", dir.display()))?;

    let engine = RevcastEngine::new(config, data.source.clone());
    Ok(Session { engine, data, json })
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
