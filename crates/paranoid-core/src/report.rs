//! Risk report domain types
//!
//! An [`AnalysisResult`] is the output of one analysis run. It owns its
//! [`Risk`] entries and the verbatim contract text it was computed from.

use serde::{Deserialize, Serialize};

/// Upper bound of the risk score scale.
pub const MAX_SCORE: f64 = 10.0;

/// Scores below this are [`RiskLevel::High`].
pub const HIGH_RISK_BELOW: f64 = 4.0;

/// Scores at or above this are [`RiskLevel::Low`].
pub const LOW_RISK_FROM: f64 = 7.0;

/// Overall contract score on a `0..=10` scale; lower means riskier.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Create a score, clamping into `0..=10`. NaN collapses to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, MAX_SCORE))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Fraction of the full scale, used by gauges.
    pub fn ratio(&self) -> f64 {
        self.0 / MAX_SCORE
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Risk bucket shared by individual risks and the overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// All levels, most severe first.
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    /// The single place where a score is bucketed into a level.
    pub fn from_score(score: RiskScore) -> Self {
        let value = score.value();
        if value >= LOW_RISK_FROM {
            RiskLevel::Low
        } else if value >= HIGH_RISK_BELOW {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    /// Qualitative label shown next to the score gauge.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low risk",
            RiskLevel::Medium => "moderate risk",
            RiskLevel::High => "high risk",
        }
    }

    /// One-sentence verdict for the score panel.
    pub fn verdict(&self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "This contract carries minimal risk. A few points need attention but it is broadly acceptable."
            }
            RiskLevel::Medium => {
                "This contract contains several worrying clauses that need careful attention."
            }
            RiskLevel::High => {
                "WARNING: this contract carries major risks. Signing without renegotiation is strongly discouraged."
            }
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problematic clause detected in a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    /// Unique within its parent result
    pub id: String,
    /// Clause/article label
    pub clause: String,
    pub severity: RiskLevel,
    pub description: String,
    pub recommendation: String,
    /// Approximate 1-based line in the contract text
    pub line_number: usize,
}

/// Output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: RiskScore,
    pub contract_type: String,
    pub risk_level: RiskLevel,
    /// Detection order, not severity order
    pub risks: Vec<Risk>,
    pub summary: String,
    /// Priority order
    pub recommendations: Vec<String>,
    pub contract_text: String,
}

impl AnalysisResult {
    /// Whether `risk_level` agrees with the bucket of `score`.
    pub fn is_consistent(&self) -> bool {
        self.risk_level == RiskLevel::from_score(self.score)
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts::from_risks(&self.risks)
    }

    pub fn risk(&self, id: &str) -> Option<&Risk> {
        self.risks.iter().find(|r| r.id == id)
    }
}

/// Number of risks per severity bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn from_risks(risks: &[Risk]) -> Self {
        risks.iter().fold(Self::default(), |mut counts, risk| {
            match risk.severity {
                RiskLevel::High => counts.high += 1,
                RiskLevel::Medium => counts.medium += 1,
                RiskLevel::Low => counts.low += 1,
            }
            counts
        })
    }

    pub fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(id: &str, severity: RiskLevel) -> Risk {
        Risk {
            id: id.to_string(),
            clause: format!("Clause {}", id),
            severity,
            description: String::new(),
            recommendation: String::new(),
            line_number: 1,
        }
    }

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(RiskScore::new(-1.0).value(), 0.0);
        assert_eq!(RiskScore::new(12.5).value(), 10.0);
        assert_eq!(RiskScore::new(f64::NAN).value(), 0.0);
        assert_eq!(RiskScore::new(3.2).value(), 3.2);
    }

    #[test]
    fn test_score_display_has_one_decimal() {
        assert_eq!(RiskScore::new(3.2).to_string(), "3.2");
        assert_eq!(RiskScore::new(7.0).to_string(), "7.0");
    }

    #[test]
    fn test_level_bucket_boundaries() {
        assert_eq!(RiskLevel::from_score(RiskScore::new(0.0)), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(RiskScore::new(3.99)), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(RiskScore::new(4.0)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(RiskScore::new(6.99)), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(RiskScore::new(7.0)), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(RiskScore::new(10.0)), RiskLevel::Low);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(RiskLevel::Low.label(), "low risk");
        assert_eq!(RiskLevel::Medium.label(), "moderate risk");
        assert_eq!(RiskLevel::High.label(), "high risk");
    }

    #[test]
    fn test_severity_counts() {
        let risks = vec![
            risk("1", RiskLevel::High),
            risk("2", RiskLevel::Medium),
            risk("3", RiskLevel::High),
        ];
        let counts = SeverityCounts::from_risks(&risks);
        assert_eq!(counts.get(RiskLevel::High), 2);
        assert_eq!(counts.get(RiskLevel::Medium), 1);
        assert_eq!(counts.get(RiskLevel::Low), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_severity_counts_empty() {
        assert_eq!(SeverityCounts::from_risks(&[]), SeverityCounts::default());
    }

    #[test]
    fn test_result_json_shape() {
        let result = AnalysisResult {
            score: RiskScore::new(5.5),
            contract_type: "NDA".to_string(),
            risk_level: RiskLevel::Medium,
            risks: vec![risk("1", RiskLevel::Low)],
            summary: "ok".to_string(),
            recommendations: vec!["sign".to_string()],
            contract_text: "text".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 5.5);
        assert_eq!(json["contractType"], "NDA");
        assert_eq!(json["riskLevel"], "MEDIUM");
        assert_eq!(json["risks"][0]["severity"], "LOW");
        assert_eq!(json["risks"][0]["lineNumber"], 1);
        assert_eq!(json["contractText"], "text");
        assert!(result.is_consistent());
    }

    #[test]
    fn test_lookup_risk_by_id() {
        let result = AnalysisResult {
            score: RiskScore::new(1.0),
            contract_type: String::new(),
            risk_level: RiskLevel::High,
            risks: vec![risk("a", RiskLevel::High), risk("b", RiskLevel::Low)],
            summary: String::new(),
            recommendations: Vec::new(),
            contract_text: String::new(),
        };
        assert_eq!(result.risk("b").map(|r| r.severity), Some(RiskLevel::Low));
        assert!(result.risk("z").is_none());
    }
}
