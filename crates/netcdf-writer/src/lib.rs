//! NetCDF-4 writer for decoded geogrid fields.
//!
//! Writing is split into independent steps (create, define dimensions,
//! define variable, define compression, end definitions, write, close).
//! Every step is attempted and its outcome recorded in a [`WriteReport`],
//! even when an earlier one failed, so a single run shows every problem
//! with a dataset definition at once.
//!
//! # Output layout
//!
//! ```text
//! nz > 1:  dimensions z(nz), y(ny), x(nx)   float var(z, y, x)
//! nz == 1: dimensions y(ny), x(nx)          float var(y, x)
//! ```
//!
//! `var` is deflate-compressed (level 4, no shuffle by default).
//!
//! # Example
//!
//! ```ignore
//! use netcdf_writer::{CompressionConfig, DatasetWriter, NetCdfSink};
//!
//! let mut sink = NetCdfSink::new();
//! let report = DatasetWriter::new(CompressionConfig::default())
//!     .write(&mut sink, "out.nc".as_ref(), &field);
//! print!("{}", report);
//! ```

pub mod error;
pub mod native;
pub mod report;
pub mod schema;
pub mod sink;
pub mod writer;

pub use error::{DatasetError, DatasetResult};
pub use native::{silence_hdf5_errors, NetCdfSink};
pub use report::{StepOutcome, WriteReport, WriteStep};
pub use schema::{DatasetSchema, Dimension, VARIABLE_NAME};
pub use sink::DatasetSink;
pub use writer::{CompressionConfig, DatasetWriter};
