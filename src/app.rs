//! Application entry points behind the `paranoid` binary

use std::path::Path;

use paranoid_app::config::{self, Settings};
use paranoid_core::prelude::*;
use paranoid_core::{read_contract_file, SAMPLE_CONTRACT};

use crate::headless;

/// Where the initial contract text comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractSource<'a> {
    None,
    Sample,
    File(&'a Path),
}

impl ContractSource<'_> {
    /// Read the contract text, if any
    pub fn load(&self) -> Result<Option<String>> {
        match self {
            ContractSource::None => Ok(None),
            ContractSource::Sample => Ok(Some(SAMPLE_CONTRACT.to_string())),
            ContractSource::File(path) => read_contract_file(path)
                .with_context(|| format!("Failed to preload {}", path.display()))
                .map(Some),
        }
    }
}

/// Install error reporting and file logging
pub fn init() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    paranoid_core::logging::init()
}

/// Load settings from `config_path`, or the default location
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_config_path);
    info!("Config file: {}", path.display());
    config::load_settings(&path)
}

/// Run the TUI, optionally with a preloaded contract
pub async fn run_tui(settings: Settings, source: ContractSource<'_>) -> Result<()> {
    let initial_text = source.load()?;

    let result = paranoid_tui::run(settings, initial_text).await;
    match result {
        Err(ref e) if e.is_recoverable() => warn!("Application stopped: {}", e),
        Err(ref e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }
    result
}

/// Run the pipeline without a UI and print NDJSON events
pub async fn run_headless(settings: Settings, source: ContractSource<'_>) -> Result<()> {
    match source.load()? {
        Some(text) => headless::run_headless(&settings, text).await,
        None => Err(Error::EmptyContract),
    }
}
