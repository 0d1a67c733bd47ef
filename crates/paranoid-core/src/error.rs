//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Intake Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported contract file (only .txt is accepted): {path}")]
    UnsupportedFile { path: PathBuf },

    #[error("Contract file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("No contract text to analyze")]
    EmptyContract,

    // ─────────────────────────────────────────────────────────────
    // Report Export Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{format} report generation is not available yet")]
    ExportUnavailable { format: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    pub fn unsupported_file(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFile { path: path.into() }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn export_unavailable(format: impl Into<String>) -> Self {
        Self::ExportUnavailable {
            format: format.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedFile { .. }
                | Error::FileNotFound { .. }
                | Error::EmptyContract
                | Error::ExportUnavailable { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::ChannelClosed)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unsupported_file("/tmp/contract.pdf");
        assert!(err.to_string().contains("/tmp/contract.pdf"));
        assert!(err.to_string().contains(".txt"));

        let err = Error::export_unavailable("PDF");
        assert_eq!(
            err.to_string(),
            "PDF report generation is not available yet"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::ChannelClosed.is_fatal());
        assert!(!Error::EmptyContract.is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::unsupported_file("a.docx").is_recoverable());
        assert!(Error::file_not_found("missing.txt").is_recoverable());
        assert!(Error::export_unavailable("PDF").is_recoverable());
        assert!(!Error::TerminalInit("x".into()).is_recoverable());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::config("test");
        let _ = Error::channel_send("test");
    }

    #[test]
    fn test_context_preserves_error_variant() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading contract").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
