//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per page
//! - `intake`: Buffer, file intake and analysis run handlers
//! - `report`: Report page handlers

pub(crate) mod intake;
pub(crate) mod keys;
pub(crate) mod report;
pub(crate) mod update;


use paranoid_core::AnalysisResult;
use std::path::PathBuf;

use crate::message::Message;
use crate::progress::ProgressSchedule;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Spawn the progress timer for run `run_id`
    StartAnalysisTimer {
        run_id: u64,
        schedule: ProgressSchedule,
    },

    /// Abort the progress timer of run `run_id`
    CancelAnalysisTimer { run_id: u64 },

    /// Read a `.txt` contract from disk into the intake buffer
    LoadContractFile { path: PathBuf },

    /// Render the report through the exporter
    ExportReport { result: Box<AnalysisResult> },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
