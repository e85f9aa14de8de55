//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command line usage
    #[error("{message}")]
    Usage {
        /// Error message
        message: String,
    },

    /// Comparison pipeline error
    #[error(transparent)]
    Cotejar(#[from] cotejar::CotejarError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a usage error
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error() {
        let err = CliError::usage("expected two image paths");
        assert!(err.to_string().contains("expected two image paths"));
    }

    #[test]
    fn test_cotejar_error_is_transparent() {
        let inner = cotejar::CotejarError::FileNotFound {
            path: "ref.png".into(),
        };
        let err: CliError = inner.into();
        assert!(err.to_string().contains("file not found"));
        assert!(err.to_string().contains("ref.png"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CliError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }
}
