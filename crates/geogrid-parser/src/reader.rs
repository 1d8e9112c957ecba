//! Tile decoding.

use std::path::Path;

use bytes::Bytes;
use tracing::{debug, info};

use geogrid_common::{DecodeError, DecodeResult, Field, TileConfig};

use crate::words::word_value;

/// Decode a raw tile into a [`Field`].
///
/// The configuration is validated before any byte is inspected. Input
/// shorter than `word_size * nx * ny * nz` is rejected; bytes past that
/// length are ignored.
pub fn decode(bytes: &[u8], config: &TileConfig) -> DecodeResult<Field> {
    config.validate()?;

    let expected = config.expected_len()?;
    if bytes.len() < expected {
        return Err(DecodeError::TruncatedInput {
            expected,
            actual: bytes.len(),
        });
    }
    if bytes.len() > expected {
        debug!(
            expected = expected,
            trailing = bytes.len() - expected,
            "Ignoring trailing bytes past end of tile"
        );
    }

    // Word k sits at offset word_size * k with k = z*nx*ny + y*nx + x,
    // so walking consecutive words visits z, y, x in storage order.
    let values: Vec<f32> = bytes[..expected]
        .chunks_exact(config.word_size)
        .map(|word| (word_value(word, config.endianness, config.signed) / config.scale) as f32)
        .collect();

    Field::from_values(config.nx, config.ny, config.nz, values)
}

/// Owns the bytes of one tile.
#[derive(Debug, Clone)]
pub struct TileReader {
    data: Bytes,
}

impl TileReader {
    pub fn new(data: Bytes) -> Self {
        Self { data }
    }

    /// Read a whole tile file into memory.
    pub fn open(path: impl AsRef<Path>) -> DecodeResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| DecodeError::io(path, e))?;

        debug!(path = %path.display(), size = data.len(), "Read geogrid tile");
        Ok(Self::new(Bytes::from(data)))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn decode(&self, config: &TileConfig) -> DecodeResult<Field> {
        let field = decode(&self.data, config)?;

        info!(
            nx = config.nx,
            ny = config.ny,
            nz = config.nz,
            word_size = config.word_size,
            signed = config.signed,
            endianness = %config.endianness,
            scale = config.scale,
            "Decoded geogrid tile"
        );

        Ok(field)
    }
}
