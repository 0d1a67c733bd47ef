//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use crate::input_key::InputKey;
use crate::navigator::Page;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal (also how file drops arrive)
    Paste(String),

    /// Tick event for periodic updates (spinner, notice expiry)
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    /// Switch to a page
    Navigate(Page),

    // ─────────────────────────────────────────────────────────
    // Intake Buffer Messages
    // ─────────────────────────────────────────────────────────
    InsertChar(char),
    InsertText(String),
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearBuffer,
    /// Overwrite the buffer with the built-in sample
    LoadSample,

    // ─────────────────────────────────────────────────────────
    // File Intake Messages
    // ─────────────────────────────────────────────────────────
    /// Open the path entry prompt
    OpenFilePrompt,
    CancelFilePrompt,
    /// Load the path typed in the prompt
    SubmitFilePrompt,
    FilePromptInput(char),
    FilePromptBackspace,
    /// Read a contract file into the buffer
    LoadContractFile(PathBuf),
    /// File read finished
    ContractFileLoaded { path: PathBuf, text: String },
    /// File refused or unreadable; logged only
    ContractFileRejected { path: PathBuf, reason: String },

    // ─────────────────────────────────────────────────────────
    // Analysis Messages
    // ─────────────────────────────────────────────────────────
    /// Run the analyzer on the buffer (no-op when blank or running)
    StartAnalysis,
    /// Progress timer emitted step `step` (0-based) of run `run_id`
    AnalysisStep { run_id: u64, step: usize },
    /// Progress timer reached the total duration of run `run_id`
    AnalysisTimerElapsed { run_id: u64 },

    // ─────────────────────────────────────────────────────────
    // Report Messages
    // ─────────────────────────────────────────────────────────
    SelectNextRisk,
    SelectPrevRisk,
    /// Expand or collapse the highlighted risk
    ToggleRisk,
    /// Hand the current report to the exporter
    DownloadReport,
    /// Exporter finished; `Err` carries the display message
    ReportExportFinished {
        format: String,
        outcome: Result<usize, String>,
    },

    /// Hide the transient notice (Esc on the report)
    DismissNotice,
}
