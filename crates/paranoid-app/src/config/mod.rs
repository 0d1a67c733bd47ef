//! Configuration file parsing for Paranoid Scan
//!
//! Settings live in `~/.config/paranoid-scan/config.toml` unless a path is
//! passed on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
