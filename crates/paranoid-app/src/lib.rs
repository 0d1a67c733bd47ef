//! # paranoid-app - Application State and Orchestration
//!
//! TEA (The Elm Architecture) core of Paranoid Scan: the [`AppState`] model,
//! the [`Message`] set, the [`handler::update`] function and the background
//! actions (progress timer, file loading, report export) it requests.
//!
//! ## Components
//!
//! - [`Navigator`] - active page and the last report
//! - [`IntakeState`] - contract buffer and analysis progress
//! - [`ReportViewState`] - risk list selection and expansion
//!
//! ## Event flow
//!
//! ```text
//! key / paste / timer ──▶ Message ──▶ update() ──▶ UpdateAction ──▶ tokio task
//!                                         ▲                              │
//!                                         └────────── Message ◀──────────┘
//! ```

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod intake;
pub mod message;
pub mod navigator;
pub mod process;
pub mod progress;
pub mod report_view;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::{abort_analysis_task, spawn_progress_timer, AnalysisTaskSlot};
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use intake::IntakeState;
pub use message::Message;
pub use navigator::{Navigator, Page, Transition};
pub use process::process_message;
pub use progress::{AnalysisProgress, ProgressSchedule, ANALYSIS_STEPS};
pub use report_view::{ReportOverview, ReportViewState, SeverityIcon};
pub use state::AppState;
