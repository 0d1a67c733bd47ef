//! Report page view state and derived aggregates
//!
//! Nothing here mutates the [`AnalysisResult`]; the report page only keeps a
//! selection cursor and the id of the one expanded risk.

use paranoid_core::{AnalysisResult, RiskLevel, RiskScore, SeverityCounts};

/// Icon kind for a severity bucket. The TUI picks the glyph and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityIcon {
    Alert,
    Info,
    Check,
}

impl From<RiskLevel> for SeverityIcon {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => SeverityIcon::Alert,
            RiskLevel::Medium => SeverityIcon::Info,
            RiskLevel::Low => SeverityIcon::Check,
        }
    }
}

/// Fixed figures shown in the "analysis stats" panel of the demo report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoStats {
    pub clauses_analyzed: u32,
    pub keywords_detected: u32,
    pub analysis_time: &'static str,
    pub confidence_percent: u8,
}

pub const DEMO_STATS: DemoStats = DemoStats {
    clauses_analyzed: 24,
    keywords_detected: 156,
    analysis_time: "2.3s",
    confidence_percent: 94,
};

/// Closing advice shown under the prioritized actions.
pub const NEXT_STEPS: [&str; 3] = [
    "Send the recommendations to the other party",
    "Have a lawyer review the revised version",
    "Do not sign before the risky clauses are renegotiated",
];

/// Aggregates the report header and gauge are drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOverview {
    pub score: RiskScore,
    /// Bucket derived from the score
    pub level: RiskLevel,
    pub label: &'static str,
    pub verdict: &'static str,
    pub counts: SeverityCounts,
}

impl ReportOverview {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let level = RiskLevel::from_score(result.score);
        Self {
            score: result.score,
            level,
            label: level.label(),
            verdict: level.verdict(),
            counts: result.severity_counts(),
        }
    }
}

/// 1-based `line_number` of `text`, trimmed. `None` when out of range or blank.
pub fn line_excerpt(text: &str, line_number: usize) -> Option<&str> {
    let line = text.lines().nth(line_number.checked_sub(1)?)?.trim();
    (!line.is_empty()).then_some(line)
}

/// Selection and expansion state of the risk list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportViewState {
    /// Index of the highlighted risk
    pub selected: usize,
    /// Id of the expanded risk; at most one is expanded
    pub expanded_id: Option<String>,
}

impl ReportViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id.as_deref() == Some(id)
    }

    /// Expand `id`, or collapse it if it is the expanded one.
    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded_id = None;
        } else {
            self.expanded_id = Some(id.to_string());
        }
    }

    /// Toggle the highlighted risk of `result`
    pub fn toggle_selected(&mut self, result: &AnalysisResult) {
        if let Some(risk) = result.risks.get(self.selected) {
            self.toggle(&risk.id);
        }
    }

    /// Move the highlight down, wrapping around
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the highlight up, wrapping around
    pub fn select_prev(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
