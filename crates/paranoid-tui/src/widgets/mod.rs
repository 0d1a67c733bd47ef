//! Custom widget components

mod footer;
mod header;
mod intake;
mod landing;
mod report;

pub use footer::Footer;
pub use header::MainHeader;
pub use intake::{AnalysisProgressView, FilePromptDialog, IntakeEditor};
pub use landing::{Landing, TAGLINE};
pub use report::{EmptyReport, ReportView};
