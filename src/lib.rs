//! Paranoid Scan - a terminal demo of a contract risk scanner
//!
//! The binary lives in `main.rs`; this library exposes the entry points so
//! integration tests can drive the headless pipeline.

pub mod app;
pub mod headless;

pub use app::{run_headless, run_tui, ContractSource};
pub use headless::{run_pipeline, HeadlessEvent};
