//! Configuration types for Paranoid Scan
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::progress::ProgressSchedule;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub analysis: AnalysisSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Simulated analysis timing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisSettings {
    /// Delay between two progress labels in milliseconds
    #[serde(default = "default_step_interval_ms")]
    pub step_interval_ms: u64,

    /// Delay before the result is produced, in milliseconds
    #[serde(default = "default_total_duration_ms")]
    pub total_duration_ms: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            step_interval_ms: default_step_interval_ms(),
            total_duration_ms: default_total_duration_ms(),
        }
    }
}

impl AnalysisSettings {
    /// Timer schedule for the progress simulation.
    pub fn schedule(&self) -> ProgressSchedule {
        ProgressSchedule::new(
            Duration::from_millis(self.step_interval_ms),
            Duration::from_millis(self.total_duration_ms),
        )
    }
}

fn default_step_interval_ms() -> u64 {
    500
}

fn default_total_duration_ms() -> u64 {
    3000
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// How long transient notices stay visible, in milliseconds
    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            notice_duration_ms: default_notice_duration_ms(),
        }
    }
}

impl UiSettings {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

fn default_notice_duration_ms() -> u64 {
    3000
}

/// Page shown when the TUI starts without a preloaded contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPage {
    #[default]
    Landing,
    Analyze,
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    #[serde(default)]
    pub start_page: StartPage,
}
