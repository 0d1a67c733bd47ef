//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `intake`: buffer edits, file intake, analysis runs
//! - `report`: report page selection, expansion and download

use paranoid_core::prelude::*;

use crate::message::Message;
use crate::state::AppState;

use super::{intake, keys::handle_key, report, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => intake::handle_paste(state, text),

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Navigate(page) => {
            let from = state.current_page();
            let cancelled = state.navigate(page);
            debug!("Navigate {:?} -> {:?}", from, page);

            match cancelled {
                Some(run_id) => {
                    info!("Analysis run {} cancelled by leaving the scanner", run_id);
                    UpdateResult::action(UpdateAction::CancelAnalysisTimer { run_id })
                }
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Intake Buffer Messages
        // ─────────────────────────────────────────────────────────
        Message::InsertChar(c) => intake::handle_edit(state, |i| i.insert_char(c)),
        Message::InsertText(text) => intake::handle_edit(state, |i| i.insert_text(&text)),
        Message::Newline => intake::handle_edit(state, |i| i.newline()),
        Message::Backspace => intake::handle_edit(state, |i| i.backspace()),
        Message::Delete => intake::handle_edit(state, |i| i.delete()),
        Message::CursorLeft => intake::handle_edit(state, |i| i.cursor_left()),
        Message::CursorRight => intake::handle_edit(state, |i| i.cursor_right()),
        Message::CursorHome => intake::handle_edit(state, |i| i.cursor_home()),
        Message::CursorEnd => intake::handle_edit(state, |i| i.cursor_end()),
        Message::ClearBuffer => intake::handle_edit(state, |i| i.clear()),
        Message::LoadSample => intake::handle_load_sample(state),

        // ─────────────────────────────────────────────────────────
        // File Intake Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenFilePrompt => intake::handle_open_file_prompt(state),
        Message::CancelFilePrompt => intake::handle_cancel_file_prompt(state),
        Message::SubmitFilePrompt => intake::handle_submit_file_prompt(state),
        Message::FilePromptInput(c) => intake::handle_file_prompt_input(state, c),
        Message::FilePromptBackspace => intake::handle_file_prompt_backspace(state),
        Message::LoadContractFile(path) => intake::handle_load_contract_file(state, path),
        Message::ContractFileLoaded { path, text } => {
            intake::handle_contract_file_loaded(state, &path, text)
        }
        Message::ContractFileRejected { path, reason } => {
            intake::handle_contract_file_rejected(&path, &reason)
        }

        // ─────────────────────────────────────────────────────────
        // Analysis Messages
        // ─────────────────────────────────────────────────────────
        Message::StartAnalysis => intake::handle_start_analysis(state),
        Message::AnalysisStep { run_id, step } => {
            intake::handle_analysis_step(state, run_id, step)
        }
        Message::AnalysisTimerElapsed { run_id } => {
            intake::handle_analysis_timer_elapsed(state, run_id)
        }

        // ─────────────────────────────────────────────────────────
        // Report Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNextRisk => report::handle_select_next(state),
        Message::SelectPrevRisk => report::handle_select_prev(state),
        Message::ToggleRisk => report::handle_toggle_risk(state),
        Message::DownloadReport => report::handle_download_report(state),
        Message::ReportExportFinished { format, outcome } => {
            report::handle_export_finished(&format, outcome)
        }

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }
    }
}
