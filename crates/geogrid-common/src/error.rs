//! Error types for tile configuration and decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using DecodeError.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Invalid or incomplete conversion configuration.
///
/// All of these are detected before any input byte is read.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing input file")]
    MissingInput,

    #[error("missing output file")]
    MissingOutput,

    #[error("scale factor must be a finite value > 0, got {0}")]
    InvalidScale(f64),

    #[error("grid extent {axis} must be >= 1")]
    ZeroExtent { axis: &'static str },

    #[error("word size must be >= 1 byte, got {0}")]
    InvalidWordSize(usize),

    #[error("grid {nx}x{ny}x{nz} with {word_size}-byte words overflows the addressable size")]
    GridTooLarge {
        nx: usize,
        ny: usize,
        nz: usize,
        word_size: usize,
    },

    #[error("deflate level must be within 0..=9, got {0}")]
    InvalidCompressionLevel(i32),
}

/// Errors produced while turning raw tile bytes into a [`crate::Field`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The input holds fewer bytes than `word_size * nx * ny * nz`.
    #[error("truncated input: expected {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("sample count {actual} does not match grid extents ({expected} samples)")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DecodeError {
    /// Create an Io error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure was caused by the configuration rather than the data.
    pub fn is_config(&self) -> bool {
        matches!(self, DecodeError::Config(_))
    }
}
