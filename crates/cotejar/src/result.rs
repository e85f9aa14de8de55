//! Result and error types for cotejar.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for cotejar operations
pub type CotejarResult<T> = Result<T, CotejarError>;

/// Errors that can occur while acquiring or comparing images
#[derive(Debug, Error)]
pub enum CotejarError {
    /// Input path does not exist
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The missing path
        path: PathBuf,
    },

    /// File exists but cannot be parsed as an image
    #[error("failed to decode {}: {message}", path.display())]
    Decode {
        /// The offending path
        path: PathBuf,
        /// Underlying decoder cause
        message: String,
    },

    /// Comparator was handed grids of unequal size
    ///
    /// Unreachable through [`compare_files`](crate::compare_files), which
    /// resamples the candidate before the pixel scan.
    #[error("image dimensions differ: reference {ref_width}x{ref_height}, candidate {cand_width}x{cand_height}")]
    DimensionMismatch {
        /// Reference image width
        ref_width: u32,
        /// Reference image height
        ref_height: u32,
        /// Candidate image width
        cand_width: u32,
        /// Candidate image height
        cand_height: u32,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_names_path() {
        let err = CotejarError::FileNotFound {
            path: PathBuf::from("missing.png"),
        };
        assert!(err.to_string().contains("file not found"));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_decode_carries_cause() {
        let err = CotejarError::Decode {
            path: PathBuf::from("broken.png"),
            message: "unexpected end of file".to_string(),
        };
        assert!(err.to_string().contains("broken.png"));
        assert!(err.to_string().contains("unexpected end of file"));
    }

    #[test]
    fn test_dimension_mismatch_names_both_sizes() {
        let err = CotejarError::DimensionMismatch {
            ref_width: 4,
            ref_height: 4,
            cand_width: 2,
            cand_height: 2,
        };
        assert!(err.to_string().contains("4x4"));
        assert!(err.to_string().contains("2x2"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CotejarError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }
}
