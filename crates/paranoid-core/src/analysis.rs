//! Contract analysis seam and the mock pipeline behind it
//!
//! [`MockAnalyzer`] is a constant function of its input: apart from echoing
//! the text back as `contract_text`, every call returns the same hand-authored
//! report. Callers must not assume the output depends on the content.

use crate::report::{AnalysisResult, Risk, RiskLevel, RiskScore};

/// Fixed score returned by the mock pipeline.
pub const MOCK_SCORE: f64 = 3.2;

/// Anything that turns contract text into a risk report.
///
/// Implementations are synchronous and total over non-empty input.
pub trait ContractAnalyzer: std::fmt::Debug + Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    fn analyze(&self, text: &str) -> AnalysisResult;
}

/// The demo analyzer: always returns the same report.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalyzer;

impl ContractAnalyzer for MockAnalyzer {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn analyze(&self, text: &str) -> AnalysisResult {
        generate(text)
    }
}

/// Produce the fixed mock report for `text`.
pub fn generate(text: &str) -> AnalysisResult {
    let score = RiskScore::new(MOCK_SCORE);

    AnalysisResult {
        score,
        contract_type: "Software development contract".to_string(),
        risk_level: RiskLevel::from_score(score),
        risks: mock_risks(),
        summary: "RED ALERT: this contract carries major financial and legal risks. Several \
                  clauses are particularly unfavorable: disproportionate late penalties, \
                  unlimited liability, abusive termination and excessive payment terms. \
                  Signing without renegotiation is strongly discouraged."
            .to_string(),
        recommendations: vec![
            "Cap late penalties at 10% of the total amount".to_string(),
            "Limit liability to the contract amount".to_string(),
            "Negotiate a termination notice of at least 30 days".to_string(),
            "Reduce payment terms to 30 days maximum".to_string(),
            "Limit the non-compete clause to 6 months".to_string(),
        ],
        contract_text: text.to_string(),
    }
}

fn mock_risks() -> Vec<Risk> {
    let entries = [
        (
            "1",
            "Late penalties - Article 2",
            RiskLevel::High,
            "EUR 500/day penalties from 15 days of delay. Disproportionate amount and a major financial risk.",
            "Negotiate a penalty cap at 10% of the total amount and a 30-day grace period.",
            8,
        ),
        (
            "2",
            "Unlimited liability - Article 5",
            RiskLevel::High,
            "Full liability without limitation for all direct and indirect damages.",
            "Limit liability to the contract amount and exclude indirect damages.",
            18,
        ),
        (
            "3",
            "Abusive termination - Article 6",
            RiskLevel::High,
            "Unilateral termination without notice plus an obligation to refund 50%.",
            "Require 30 days of notice and remove the refund obligation.",
            21,
        ),
        (
            "4",
            "Payment terms - Article 3",
            RiskLevel::Medium,
            "Payment within 90 days, creating a significant cash-flow risk.",
            "Reduce to 30 days maximum and add late-payment penalties.",
            13,
        ),
        (
            "5",
            "Excessive non-compete - Article 8",
            RiskLevel::Medium,
            "A 2-year non-compete clause is too restrictive for a freelancer.",
            "Limit to 6 months and define the geographic scope precisely.",
            26,
        ),
    ];

    entries
        .into_iter()
        .map(
            |(id, clause, severity, description, recommendation, line_number)| Risk {
                id: id.to_string(),
                clause: clause.to_string(),
                severity,
                description: description.to_string(),
                recommendation: recommendation.to_string(),
                line_number,
            },
        )
        .collect()
}
