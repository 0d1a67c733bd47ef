//! Report page handlers

use paranoid_core::prelude::*;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Notice shown when a download is requested
pub const DOWNLOAD_NOTICE: &str = "Generating PDF report...";

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    if let Some(result) = state.navigator.last_result() {
        state.report_view.select_next(result.risks.len());
    }
    UpdateResult::none()
}

pub fn handle_select_prev(state: &mut AppState) -> UpdateResult {
    if let Some(result) = state.navigator.last_result() {
        state.report_view.select_prev(result.risks.len());
    }
    UpdateResult::none()
}

pub fn handle_toggle_risk(state: &mut AppState) -> UpdateResult {
    if let Some(result) = state.navigator.last_result() {
        state.report_view.toggle_selected(result);
    }
    UpdateResult::none()
}

pub fn handle_download_report(state: &mut AppState) -> UpdateResult {
    let Some(result) = state.navigator.last_result() else {
        return UpdateResult::none();
    };

    let result = Box::new(result.clone());
    state.show_notice(DOWNLOAD_NOTICE);
    UpdateResult::action(UpdateAction::ExportReport { result })
}

pub fn handle_export_finished(
    format: &str,
    outcome: std::result::Result<usize, String>,
) -> UpdateResult {
    match outcome {
        Ok(bytes) => info!("{} report generated ({} bytes)", format, bytes),
        Err(reason) => warn!("{} report not generated: {}", format, reason),
    }
    UpdateResult::none()
}
