//! WRF geogrid to NetCDF-4 converter.
//!
//! Provides an independent check on WRF static input tiles: a tile is
//! decoded with explicitly supplied layout parameters, written out as a
//! compressed NetCDF variable and summarised level by level.
//!
//! ```text
//! Args ─► ConverterConfig ─► TileReader::decode ─► Field ─┬─► DatasetWriter ─► WriteReport
//!                                                         └─► aggregate_levels ─► LevelStats
//! ```

pub mod config;
pub mod pipeline;
pub mod report;

pub use config::{usage_error_kind, Args, ConverterConfig, ReportFormat};
pub use pipeline::{
    exit_status, ConversionOutcome, ConversionPipeline, EXIT_DECODE_FAILURE, EXIT_SUCCESS,
    EXIT_USAGE,
};
