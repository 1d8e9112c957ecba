//! Storage backend seam for dataset writing.

use std::path::Path;

use crate::error::DatasetResult;

/// Backend that receives the individual dataset steps.
///
/// Each call is independent: an implementation must return an error (not
/// panic) when asked to perform a step whose prerequisites failed, for
/// example defining a dimension when no file could be created.
pub trait DatasetSink {
    /// Create the container at `path`, replacing any existing file.
    fn create(&mut self, path: &Path) -> DatasetResult<()>;

    fn define_dimension(&mut self, name: &str, len: usize) -> DatasetResult<()>;

    /// Define an `f32` variable over `dims`, outermost first.
    fn define_variable(&mut self, name: &str, dims: &[&str]) -> DatasetResult<()>;

    fn define_deflate(&mut self, variable: &str, level: i32, shuffle: bool) -> DatasetResult<()>;

    /// Leave define mode.
    fn end_definitions(&mut self) -> DatasetResult<()>;

    /// Write all values of `variable` in one bulk operation.
    fn put_values(&mut self, variable: &str, values: &[f32]) -> DatasetResult<()>;

    fn close(&mut self) -> DatasetResult<()>;
}
