//! Intake handlers: buffer edits, file intake and analysis runs

use std::path::{Path, PathBuf};

use paranoid_core::intake::is_text_contract;
use paranoid_core::{dropped_path, prelude::*};

use crate::intake::{FilePrompt, IntakeState};
use crate::message::Message;
use crate::navigator::Page;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Whether the intake accepts input: Analyze is shown and no run is active
fn intake_editable(state: &AppState) -> bool {
    state.current_page() == Page::Analyze && !state.intake.is_running()
}

/// Apply `edit` to the buffer when the intake accepts input
pub fn handle_edit(state: &mut AppState, edit: impl FnOnce(&mut IntakeState)) -> UpdateResult {
    if intake_editable(state) {
        edit(&mut state.intake);
    }
    UpdateResult::none()
}

pub fn handle_load_sample(state: &mut AppState) -> UpdateResult {
    if intake_editable(state) {
        state.intake.load_sample();
        debug!("Loaded sample contract ({} chars)", state.intake.char_count());
    }
    UpdateResult::none()
}

/// Bracketed paste: a lone existing file path is a drop, anything else is text
pub fn handle_paste(state: &mut AppState, text: String) -> UpdateResult {
    if !intake_editable(state) {
        return UpdateResult::none();
    }

    if let Some(prompt) = state.intake.file_prompt.as_mut() {
        prompt.input.push_str(text.lines().next().unwrap_or_default());
        return UpdateResult::none();
    }

    if let Some(path) = dropped_path(&text) {
        debug!("Paste recognized as dropped file {:?}", path);
        return UpdateResult::message(Message::LoadContractFile(path));
    }

    state.intake.insert_text(&text);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// File Prompt
// ─────────────────────────────────────────────────────────

pub fn handle_open_file_prompt(state: &mut AppState) -> UpdateResult {
    if intake_editable(state) {
        state.intake.file_prompt = Some(FilePrompt::default());
    }
    UpdateResult::none()
}

pub fn handle_cancel_file_prompt(state: &mut AppState) -> UpdateResult {
    state.intake.file_prompt = None;
    UpdateResult::none()
}

pub fn handle_file_prompt_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(prompt) = state.intake.file_prompt.as_mut() {
        prompt.input.push(c);
    }
    UpdateResult::none()
}

pub fn handle_file_prompt_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(prompt) = state.intake.file_prompt.as_mut() {
        prompt.input.pop();
    }
    UpdateResult::none()
}

pub fn handle_submit_file_prompt(state: &mut AppState) -> UpdateResult {
    let Some(prompt) = state.intake.file_prompt.take() else {
        return UpdateResult::none();
    };

    match parse_prompt_path(&prompt.input) {
        Some(path) => UpdateResult::message(Message::LoadContractFile(path)),
        None => UpdateResult::none(),
    }
}

/// Trim, unquote and expand a leading `~/` in a typed path
fn parse_prompt_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    let unquoted = trimmed
        .strip_prefix(['"', '\''])
        .and_then(|s| s.strip_suffix(['"', '\'']))
        .unwrap_or(trimmed);

    if unquoted.is_empty() {
        return None;
    }

    if let Some(rest) = unquoted.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Some(home.join(rest));
        }
    }

    Some(PathBuf::from(unquoted))
}

// ─────────────────────────────────────────────────────────
// File Loading
// ─────────────────────────────────────────────────────────

/// Gate on the extension before touching the disk; other files are ignored
pub fn handle_load_contract_file(state: &mut AppState, path: PathBuf) -> UpdateResult {
    if !intake_editable(state) {
        return UpdateResult::none();
    }

    if !is_text_contract(&path) {
        warn!("Ignoring {:?}: only .txt contracts are accepted", path);
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::LoadContractFile { path })
}

pub fn handle_contract_file_loaded(state: &mut AppState, path: &Path, text: String) -> UpdateResult {
    if !intake_editable(state) {
        debug!("Discarding contents of {:?}: intake no longer active", path);
        return UpdateResult::none();
    }

    info!("Loaded contract from {:?} ({} bytes)", path, text.len());
    state.intake.set_text(text);
    UpdateResult::none()
}

pub fn handle_contract_file_rejected(path: &Path, reason: &str) -> UpdateResult {
    warn!("Could not load {:?}: {}", path, reason);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Analysis Runs
// ─────────────────────────────────────────────────────────

/// Start a run, unless the buffer is blank or a run is already active
pub fn handle_start_analysis(state: &mut AppState) -> UpdateResult {
    if state.current_page() != Page::Analyze || !state.intake.can_analyze() {
        debug!("Analysis trigger ignored: intake blank or busy");
        return UpdateResult::none();
    }

    let run_id = state.begin_analysis();
    info!(
        "Starting analysis run {} on {} chars",
        run_id,
        state.intake.char_count()
    );

    UpdateResult::action(UpdateAction::StartAnalysisTimer {
        run_id,
        schedule: state.settings.analysis.schedule(),
    })
}

pub fn handle_analysis_step(state: &mut AppState, run_id: u64, step: usize) -> UpdateResult {
    if state.intake.progress.advance(run_id, step) {
        trace!("Run {} step {}", run_id, step);
    } else {
        trace!("Ignoring stale step {} of run {}", step, run_id);
    }
    UpdateResult::none()
}

/// Timer elapsed: compute the report and hand it to the navigator
pub fn handle_analysis_timer_elapsed(state: &mut AppState, run_id: u64) -> UpdateResult {
    if !state.intake.progress.finish(run_id) {
        trace!("Ignoring stale completion of run {}", run_id);
        return UpdateResult::none();
    }

    let result = state.analyzer.analyze(state.intake.text());
    info!(
        "Run {} finished with {} analyzer: score {}, {} risk(s)",
        run_id,
        state.analyzer.name(),
        result.score,
        result.risks.len()
    );

    state.complete_analysis(result);
    UpdateResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prompt_path() {
        assert_eq!(parse_prompt_path("  "), None);
        assert_eq!(parse_prompt_path("\"\""), None);
        assert_eq!(
            parse_prompt_path(" /tmp/a b.txt "),
            Some(PathBuf::from("/tmp/a b.txt"))
        );
        assert_eq!(
            parse_prompt_path("'/tmp/contract.txt'"),
            Some(PathBuf::from("/tmp/contract.txt"))
        );
    }

    #[test]
    fn test_parse_prompt_path_expands_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                parse_prompt_path("~/contract.txt"),
                Some(home.join("contract.txt"))
            );
        }
    }
}
