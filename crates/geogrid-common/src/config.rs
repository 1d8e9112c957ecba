//! Tile decode configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Byte order of each multi-byte word in a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// First byte read is the most significant (geogrid default).
    #[default]
    Big,
    /// First byte read is the least significant.
    Little,
}

impl Endianness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endianness::Big => "big",
            Endianness::Little => "little",
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a raw geogrid tile is laid out on disk.
///
/// The WRF `index` file is not parsed; every field here is supplied by the
/// caller. Construct with [`TileConfig::new`] and the `with_*` setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileConfig {
    /// Source tile path
    pub path: PathBuf,
    /// Number of points in X (fastest varying)
    pub nx: usize,
    /// Number of points in Y
    pub ny: usize,
    /// Number of levels
    pub nz: usize,
    /// Bytes per encoded sample
    pub word_size: usize,
    /// Two's-complement interpretation of each word
    pub signed: bool,
    /// Byte order of each word
    pub endianness: Endianness,
    /// Divisor applied after integer decode
    pub scale: f64,
}

impl TileConfig {
    /// Default word size of a geogrid tile, in bytes.
    pub const DEFAULT_WORD_SIZE: usize = 4;

    /// Create a config with 4-byte unsigned big-endian words and scale 1.
    pub fn new(path: impl Into<PathBuf>, nx: usize, ny: usize, nz: usize) -> Self {
        Self {
            path: path.into(),
            nx,
            ny,
            nz,
            word_size: Self::DEFAULT_WORD_SIZE,
            signed: false,
            endianness: Endianness::Big,
            scale: 1.0,
        }
    }

    pub fn with_word_size(mut self, word_size: usize) -> Self {
        self.word_size = word_size;
        self
    }

    pub fn with_signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total number of samples, `nx * ny * nz`.
    pub fn num_samples(&self) -> Result<usize, ConfigError> {
        self.nx
            .checked_mul(self.ny)
            .and_then(|n| n.checked_mul(self.nz))
            .ok_or_else(|| self.too_large())
    }

    /// Number of bytes a tile must hold, `word_size * nx * ny * nz`.
    pub fn expected_len(&self) -> Result<usize, ConfigError> {
        self.num_samples()?
            .checked_mul(self.word_size)
            .ok_or_else(|| self.too_large())
    }

    /// Check every decode parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::InvalidScale(self.scale));
        }

        for (axis, extent) in [("nx", self.nx), ("ny", self.ny), ("nz", self.nz)] {
            if extent == 0 {
                return Err(ConfigError::ZeroExtent { axis });
            }
        }

        if self.word_size == 0 {
            return Err(ConfigError::InvalidWordSize(self.word_size));
        }

        self.expected_len().map(|_| ())
    }

    fn too_large(&self) -> ConfigError {
        ConfigError::GridTooLarge {
            nx: self.nx,
            ny: self.ny,
            nz: self.nz,
            word_size: self.word_size,
        }
    }
}
