//! Error types for Questfolio.
//!
//! The domain itself has no failure modes: all content is compile-time
//! static, unrecognized navigation is silently ignored, and rendering never
//! errors. What can fail is the edge of the Rust rendition - terminal
//! setup/teardown I/O and log-file creation - so the taxonomy is small.

use thiserror::Error;

/// Unified error type for the fallible edges of the application.
#[derive(Debug, Error)]
pub enum QuestfolioError {
    /// Terminal or filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No platform state directory could be resolved for log output.
    #[error("no writable state directory for log output")]
    NoStateDir,
}

/// Result alias used throughout the crate.
pub type QuestfolioResult<T> = Result<T, QuestfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: QuestfolioError = io.into();
        assert!(matches!(err, QuestfolioError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_no_state_dir_message() {
        let err = QuestfolioError::NoStateDir;
        assert!(err.to_string().contains("state directory"));
    }
}
