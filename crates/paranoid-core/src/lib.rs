//! # paranoid-core - Core Domain Types
//!
//! Foundation crate for Paranoid Scan. Provides the risk report model, the
//! analyzer seam with its mock pipeline, intake file rules, the report export
//! collaborator, error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Report model (`report`)
//! - [`AnalysisResult`] - Output of one analysis run
//! - [`Risk`] - One problematic clause
//! - [`RiskLevel`] - LOW / MEDIUM / HIGH bucket, with [`RiskLevel::from_score`]
//! - [`RiskScore`] - Score clamped to `0..=10`
//! - [`SeverityCounts`] - Risks per bucket
//!
//! ### Analysis (`analysis`)
//! - [`ContractAnalyzer`] - Analyzer trait
//! - [`MockAnalyzer`], [`generate()`] - Constant-output demo pipeline
//!
//! ### Intake (`intake`)
//! - [`read_contract_file()`], [`validate_contract_path()`] - `.txt` gating
//! - [`dropped_path()`] - Detect a file drop in pasted text
//!
//! ### Export (`export`)
//! - [`ReportExporter`], [`PendingPdfExporter`]
//!
//! ## Prelude
//!
//! ```rust
//! use paranoid_core::prelude::*;
//! ```

pub mod analysis;
pub mod error;
pub mod export;
pub mod intake;
pub mod logging;
pub mod report;
pub mod sample;

/// Prelude for common imports used throughout all Paranoid Scan crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use analysis::{generate, ContractAnalyzer, MockAnalyzer, MOCK_SCORE};
pub use error::{Error, Result, ResultExt};
pub use export::{PendingPdfExporter, ReportExporter};
pub use intake::{dropped_path, is_blank, read_contract_file, validate_contract_path};
pub use report::{AnalysisResult, Risk, RiskLevel, RiskScore, SeverityCounts};
pub use sample::SAMPLE_CONTRACT;
