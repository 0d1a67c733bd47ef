//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "paranoid.log";

/// Filter used when `PARANOID_LOG` is unset: info for every workspace crate
const DEFAULT_FILTER: &str =
    "paranoid_scan=info,paranoid_core=info,paranoid_app=info,paranoid_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/paranoid-scan/logs/` so the TUI
/// never competes with log output on the terminal.
/// Log level is controlled by the `PARANOID_LOG` environment variable.
///
/// # Examples
/// ```bash
/// PARANOID_LOG=debug cargo run
/// PARANOID_LOG=paranoid_app=trace cargo run -- --sample
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via PARANOID_LOG
    let env_filter = EnvFilter::try_from_env("PARANOID_LOG").unwrap_or_else(|_| {
        EnvFilter::new(DEFAULT_FILTER)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Paranoid Scan starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("paranoid-scan").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_app_directory() {
        let path = get_current_log_file().unwrap();
        assert!(path.ends_with("paranoid-scan/logs/paranoid.log"));
    }

    #[test]
    fn test_default_filter_covers_every_crate() {
        for krate in ["paranoid_scan", "paranoid_core", "paranoid_app", "paranoid_tui"] {
            assert!(
                DEFAULT_FILTER.contains(&format!("{}=info", krate)),
                "{} missing from default filter",
                krate
            );
        }
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
