//! Dimension layout of the output dataset.

use geogrid_common::Field;

/// Name of the single data variable.
pub const VARIABLE_NAME: &str = "var";

/// A named dataset dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub name: &'static str,
    pub len: usize,
}

/// Dimensions of the output variable, outermost first.
///
/// Single-level fields are written as rank-2 `(y, x)` variables and
/// multi-level fields as rank-3 `(z, y, x)`. Consumers tell the two apart
/// by rank, so the `z` dimension is left out entirely when `nz == 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSchema {
    dimensions: Vec<Dimension>,
}

impl DatasetSchema {
    pub fn from_extents(nx: usize, ny: usize, nz: usize) -> Self {
        let mut dimensions = Vec::with_capacity(3);
        if nz > 1 {
            dimensions.push(Dimension { name: "z", len: nz });
        }
        dimensions.push(Dimension { name: "y", len: ny });
        dimensions.push(Dimension { name: "x", len: nx });

        Self { dimensions }
    }

    pub fn for_field(field: &Field) -> Self {
        Self::from_extents(field.nx(), field.ny(), field.nz())
    }

    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    /// Dimensions in declaration order (`z, y, x` or `y, x`).
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn dimension_names(&self) -> Vec<&'static str> {
        self.dimensions.iter().map(|d| d.name).collect()
    }

    pub fn variable_name(&self) -> &'static str {
        VARIABLE_NAME
    }

    /// Number of values the variable holds.
    pub fn num_values(&self) -> usize {
        self.dimensions.iter().map(|d| d.len).product()
    }
}
