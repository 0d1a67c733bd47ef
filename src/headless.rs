//! Headless mode - NDJSON event output without the TUI
//!
//! Runs the same timer-driven pipeline as the scanner page and prints one
//! JSON object per line on stdout.
//!
//! ```json
//! {"event":"progress","step":1,"label":"Parsing the document...","percent":16.7,"timestamp":1704700001000}
//! {"event":"result","result":{"score":3.2,"contractType":"...",...},"timestamp":1704700003000}
//! ```

use chrono::Utc;
use paranoid_app::message::Message;
use paranoid_app::{spawn_progress_timer, AnalysisProgress, ProgressSchedule, Settings};
use paranoid_core::prelude::*;
use paranoid_core::{is_blank, AnalysisResult, ContractAnalyzer, MockAnalyzer};
use serde::Serialize;
use std::io::{self, Write};
use tokio::sync::mpsc;

/// Run id of the single headless run
const HEADLESS_RUN_ID: u64 = 1;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// One progress label was reached
    Progress {
        /// 1-based step number
        step: usize,
        label: String,
        percent: f64,
        timestamp: i64,
    },

    /// The analysis produced its report
    Result {
        result: Box<AnalysisResult>,
        timestamp: i64,
    },

    /// The run failed
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn progress(progress: &AnalysisProgress) -> Option<Self> {
        Some(Self::Progress {
            step: progress.steps_emitted(),
            label: progress.current_label()?.to_string(),
            percent: (progress.percent() * 10.0).round() / 10.0,
            timestamp: Self::now(),
        })
    }

    pub fn result(result: AnalysisResult) -> Self {
        Self::Result {
            result: Box::new(result),
            timestamp: Self::now(),
        }
    }

    pub fn error(err: &Error) -> Self {
        Self::Error {
            message: err.to_string(),
            fatal: err.is_fatal(),
            timestamp: Self::now(),
        }
    }
}

/// Run the headless pipeline on `contract_text`, printing events to stdout
pub async fn run_headless(settings: &Settings, contract_text: String) -> Result<()> {
    info!("Headless analysis of {} bytes", contract_text.len());

    let outcome = run_pipeline(
        &contract_text,
        settings.analysis.schedule(),
        &MockAnalyzer,
        |event| event.emit(),
    )
    .await
    .context("Headless analysis failed");

    if let Err(ref e) = outcome {
        HeadlessEvent::error(e).emit();
    }
    outcome.map(|_| ())
}

/// Drive the progress timer and the analyzer for one run
///
/// `sink` receives one `Progress` event per step, then the `Result` event.
/// Blank contracts are rejected before the timer starts.
pub async fn run_pipeline<F>(
    contract_text: &str,
    schedule: ProgressSchedule,
    analyzer: &dyn ContractAnalyzer,
    mut sink: F,
) -> Result<AnalysisResult>
where
    F: FnMut(HeadlessEvent),
{
    if is_blank(contract_text) {
        return Err(Error::EmptyContract);
    }

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(16);
    let timer = spawn_progress_timer(HEADLESS_RUN_ID, schedule, msg_tx);

    let mut progress = AnalysisProgress::default();
    progress.start(HEADLESS_RUN_ID);

    while let Some(message) = msg_rx.recv().await {
        match message {
            Message::AnalysisStep { run_id, step } => {
                if progress.advance(run_id, step) {
                    if let Some(event) = HeadlessEvent::progress(&progress) {
                        sink(event);
                    }
                }
            }
            Message::AnalysisTimerElapsed { run_id } if progress.finish(run_id) => {
                let result = analyzer.analyze(contract_text);
                info!(
                    "Analysis finished: score {} ({} risks)",
                    result.score,
                    result.risks.len()
                );
                sink(HeadlessEvent::result(result.clone()));
                return Ok(result);
            }
            other => debug!("Ignoring headless message: {:?}", other),
        }
    }

    timer.abort();
    Err(Error::ChannelClosed)
}
