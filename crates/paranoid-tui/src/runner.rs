//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use paranoid_app::message::Message;
use paranoid_app::signals;
use paranoid_app::{abort_analysis_task, process_message, AnalysisTaskSlot, AppState, Settings};
use paranoid_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the TUI until the user quits
///
/// With `initial_text` the app opens on the scanner with the contract
/// already in the buffer.
pub async fn run(settings: Settings, initial_text: Option<String>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut state = match initial_text {
        Some(text) => {
            info!("Starting with a preloaded contract ({} bytes)", text.len());
            AppState::with_contract(settings, text)
        }
        None => AppState::with_settings(settings),
    };

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_paste() {
        warn!("{}", e);
    }

    // Unified message channel (signal handler, timers, file loads, exports)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let analysis_task: AnalysisTaskSlot = Arc::new(std::sync::Mutex::new(None));

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &analysis_task);

    // Nothing may keep emitting progress after the UI is gone
    if abort_analysis_task(&analysis_task) {
        debug!("Aborted progress timer on exit");
    }

    terminal::disable_paste();
    ratatui::restore();

    info!("Paranoid Scan exited");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    analysis_task: &AnalysisTaskSlot,
) -> Result<()> {
    while !state.should_quit() {
        // Messages from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, analysis_task);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Terminal events, or a Tick after the poll timeout
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, analysis_task);
        }
    }

    Ok(())
}
