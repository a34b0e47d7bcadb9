//! Error types for the portfolio

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A typewriter needs at least one phrase to cycle through
    #[error("Typewriter requires at least one phrase")]
    EmptyPhrases,

    /// A scroll spy needs at least one section to track
    #[error("Scroll spy requires at least one section")]
    NoSections,

    /// A section id that the nav does not know about
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Failure reported by an injected contact submitter.
///
/// Both variants surface to the visitor as the same inline message; the
/// detail only reaches the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The receiving side refused the message
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// The receiving side could not be reached
    #[error("Submission service unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::UnknownSection("blog".to_string());
        assert_eq!(format!("{}", err), "Unknown section: blog");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    #[test]
    fn test_submit_error_display() {
        let err = SubmitError::Unavailable("timeout".to_string());
        assert_eq!(err.to_string(), "Submission service unavailable: timeout");
    }
}
