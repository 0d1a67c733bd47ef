//! Paranoid Scan - a terminal demo of a contract risk scanner
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use paranoid_app::config;
use paranoid_core::prelude::*;
use paranoid_scan::{app, ContractSource};

/// Paranoid Scan - don't sign blind
#[derive(Parser, Debug)]
#[command(name = "paranoid")]
#[command(about = "Scan a contract for risky clauses (demo)", long_about = None)]
#[command(group(ArgGroup::new("source").args(["file", "sample"])))]
struct Args {
    /// Contract to preload (.txt only)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Preload the built-in sample contract
    #[arg(long)]
    sample: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run without the TUI and print NDJSON events (needs FILE or --sample)
    #[arg(long, requires = "source")]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let path = args.config.unwrap_or_else(config::default_config_path);
        if config::init_config_file(&path)? {
            eprintln!("Created {}", path.display());
        } else {
            eprintln!("Config already exists: {}", path.display());
        }
        return Ok(());
    }

    app::init()?;
    let settings = app::load_settings(args.config.as_deref());

    let source = match (&args.file, args.sample) {
        (Some(path), _) => ContractSource::File(path),
        (None, true) => ContractSource::Sample,
        (None, false) => ContractSource::None,
    };

    if args.headless {
        return app::run_headless(settings, source).await;
    }

    app::run_tui(settings, source).await
}
