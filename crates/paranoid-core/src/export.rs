//! Report export collaborator
//!
//! The "download report" action hands the current result to a
//! [`ReportExporter`]. No real document generation exists yet; the only
//! implementation reports itself as unavailable.

use crate::error::{Error, Result};
use crate::report::AnalysisResult;

/// Renders a finished report into a downloadable byte stream.
pub trait ReportExporter: std::fmt::Debug + Send + Sync {
    /// Human-readable format name ("PDF")
    fn format(&self) -> &'static str;

    fn render(&self, result: &AnalysisResult) -> Result<Vec<u8>>;
}

/// Placeholder for the future PDF report service.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingPdfExporter;

impl ReportExporter for PendingPdfExporter {
    fn format(&self) -> &'static str {
        "PDF"
    }

    fn render(&self, result: &AnalysisResult) -> Result<Vec<u8>> {
        tracing::debug!(
            "PDF export requested for {} risk(s), score {}",
            result.risks.len(),
            result.score
        );
        Err(Error::export_unavailable(self.format()))
    }
}
