//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every variant belongs to one of four kinds (missing input, invalid image,
//! configuration, unexpected) so callers and the CLI can branch on the bucket
//! without matching every variant.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing input image: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Invalid image {}: {reason}", path.display())]
    InvalidImage { path: PathBuf, reason: String },

    #[error("Channel planes differ in size: low-pass {low:?}, high-pass {high:?}")]
    DimensionMismatch {
        low: (usize, usize),
        high: (usize, usize),
    },

    #[error("Invalid configuration: {field} {reason}")]
    Configuration { field: &'static str, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    #[error("Unsupported output format for {}", path.display())]
    UnsupportedOutputFormat { path: PathBuf },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Display error: {0}")]
    Display(String),

    #[error("Preset error: {0}")]
    Preset(#[from] serde_json::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    InvalidImage,
    Configuration,
    Unexpected,
}

impl ErrorKind {
    /// Process exit code used by the CLI for this kind.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Unexpected => 1,
            ErrorKind::MissingInput => 3,
            ErrorKind::InvalidImage => 4,
            ErrorKind::Configuration => 5,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::MissingInput => write!(f, "missing input"),
            ErrorKind::InvalidImage => write!(f, "invalid image"),
            ErrorKind::Configuration => write!(f, "configuration error"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingInput { .. } => ErrorKind::MissingInput,
            Error::InvalidImage { .. } | Error::DimensionMismatch { .. } => {
                ErrorKind::InvalidImage
            }
            Error::Configuration { .. } | Error::Preset(_) => ErrorKind::Configuration,
            Error::Io(_)
            | Error::Encode { .. }
            | Error::UnsupportedOutputFormat { .. }
            | Error::Processing(_)
            | Error::Resize(_)
            | Error::Display(_) => ErrorKind::Unexpected,
        }
    }

    pub fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Configuration {
            field,
            reason: reason.into(),
        }
    }

    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_the_path() {
        let err = Error::MissingInput {
            path: PathBuf::from("dog.jpg"),
        };
        assert_eq!(err.kind(), ErrorKind::MissingInput);
        assert!(err.to_string().contains("dog.jpg"));
    }

    #[test]
    fn kinds_have_distinct_exit_codes() {
        let codes = [
            ErrorKind::MissingInput.exit_code(),
            ErrorKind::InvalidImage.exit_code(),
            ErrorKind::Configuration.exit_code(),
            ErrorKind::Unexpected.exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn io_failures_are_unexpected() {
        let err: Error = std::io::Error::other("disk full").into();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn dimension_mismatch_counts_as_invalid_image() {
        let err = Error::DimensionMismatch {
            low: (4, 4),
            high: (2, 2),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidImage);
    }
}
