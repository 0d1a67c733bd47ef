//! paranoid-tui - Terminal UI for Paranoid Scan
//!
//! ratatui rendering of the [`paranoid_app`] state, crossterm event polling
//! and the main loop that ties them together.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
