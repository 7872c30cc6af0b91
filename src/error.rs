//! Error types for rasterpad operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterpad operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Polygon constructed with an empty vertex list.
    #[error("Polygon requires at least one vertex")]
    EmptyVertices,

    /// Curve constructed with fewer than two control points.
    #[error("Curve requires at least 2 control points, got {count}")]
    TooFewControlPoints {
        /// Number of control points provided.
        count: usize,
    },

    /// Malformed drawing script line.
    #[error("Script error at line {line}: {message}")]
    Script {
        /// 1-based line number within the script.
        line: usize,
        /// Description of what failed to parse.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_script_error_carries_line() {
        let err = Error::Script {
            line: 7,
            message: "expected integer".into(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("expected integer"));
    }

    #[test]
    fn test_too_few_control_points() {
        let err = Error::TooFewControlPoints { count: 1 };
        assert!(err.to_string().contains('1'));
    }
}
