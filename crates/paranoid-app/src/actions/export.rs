//! Report export

use paranoid_core::prelude::*;
use paranoid_core::{AnalysisResult, PendingPdfExporter, ReportExporter};
use tokio::sync::mpsc;

use super::send_message;
use crate::message::Message;

/// Render `result` with the PDF exporter and report the outcome.
pub(super) async fn export_report(result: Box<AnalysisResult>, msg_tx: mpsc::Sender<Message>) {
    let exporter = PendingPdfExporter;
    let outcome = exporter
        .render(&result)
        .map(|bytes| bytes.len())
        .map_err(|e| e.to_string());

    let msg = Message::ReportExportFinished {
        format: exporter.format().to_string(),
        outcome,
    };
    if let Err(e) = send_message(&msg_tx, msg).await {
        warn!("Dropped export result: {}", e);
    }
}
