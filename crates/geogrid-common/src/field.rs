//! Decoded sample buffer.

use crate::error::{DecodeError, DecodeResult};

/// A dense 3D field of `f32` samples.
///
/// Logically indexed `[z][y][x]` and stored row-major with `x` fastest,
/// in the same order as the source tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    nx: usize,
    ny: usize,
    nz: usize,
    values: Vec<f32>,
}

impl Field {
    /// Wrap `values` as a field, checking the length against the extents.
    pub fn from_values(nx: usize, ny: usize, nz: usize, values: Vec<f32>) -> DecodeResult<Self> {
        let expected = nx.saturating_mul(ny).saturating_mul(nz);
        if values.len() != expected {
            return Err(DecodeError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }

        Ok(Self { nx, ny, nz, values })
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Shape in storage order, `(nz, ny, nx)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nz, self.ny, self.nx)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All samples in storage order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Sample at `[z][y][x]`, or `None` when out of range.
    pub fn get(&self, z: usize, y: usize, x: usize) -> Option<f32> {
        if z >= self.nz || y >= self.ny || x >= self.nx {
            return None;
        }
        self.values.get(z * self.nx * self.ny + y * self.nx + x).copied()
    }

    /// The `nx * ny` samples of level `z`.
    pub fn level(&self, z: usize) -> Option<&[f32]> {
        let plane = self.nx * self.ny;
        let start = z.checked_mul(plane)?;
        let end = start.checked_add(plane)?;
        self.values.get(start..end)
    }

    /// Iterate over the levels in ascending `z`.
    pub fn levels(&self) -> impl Iterator<Item = &[f32]> {
        // chunk size must be non-zero
        self.values.chunks_exact((self.nx * self.ny).max(1))
    }
}
