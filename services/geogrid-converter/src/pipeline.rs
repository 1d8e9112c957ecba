//! Conversion pipeline: decode, write, summarise.

use tracing::info;

use geogrid_common::{aggregate_levels, DecodeResult, LevelStats};
use geogrid_parser::TileReader;
use netcdf_writer::{CompressionConfig, DatasetSink, DatasetWriter, WriteReport};

use crate::config::ConverterConfig;

/// Process exit status of a completed run, `[XX]` steps included.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit status when the tile could not be read or decoded.
pub const EXIT_DECODE_FAILURE: u8 = 1;
/// Process exit status for usage and configuration errors.
pub const EXIT_USAGE: u8 = 2;

/// Everything a run reports once the tile has been decoded.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    /// Per-step dataset results
    pub write_report: WriteReport,
    /// One record per level, ascending
    pub stats: Vec<LevelStats>,
}

/// Runs one conversion from a [`ConverterConfig`].
pub struct ConversionPipeline {
    config: ConverterConfig,
    writer: DatasetWriter,
}

impl ConversionPipeline {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            writer: DatasetWriter::new(CompressionConfig::default()),
        }
    }

    /// Decode the tile, write it through `sink` and compute level statistics.
    ///
    /// Decode failures abort the run. Dataset step failures do not: they
    /// are returned inside [`ConversionOutcome::write_report`] and the
    /// statistics are still computed.
    pub fn run<S: DatasetSink + ?Sized>(&self, sink: &mut S) -> DecodeResult<ConversionOutcome> {
        let tile = &self.config.tile;
        tile.validate()?;

        info!(input = %tile.path.display(), output = %self.config.output.display(), "Starting conversion");

        let field = TileReader::open(tile.path())?.decode(tile)?;

        let write_report = self.writer.write(sink, &self.config.output, &field);
        let stats = aggregate_levels(&field);

        info!(
            levels = stats.len(),
            failed_steps = write_report.failure_count(),
            "Conversion complete"
        );

        Ok(ConversionOutcome {
            write_report,
            stats,
        })
    }
}

/// Exit status for the result of [`ConversionPipeline::run`].
///
/// Dataset step failures never change the status: the run still
/// completed and reported them.
pub fn exit_status(result: &DecodeResult<ConversionOutcome>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) if e.is_config() => EXIT_USAGE,
        Err(_) => EXIT_DECODE_FAILURE,
    }
}
