//! Command line arguments and the converter configuration built from them.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing::Level;

use geogrid_common::{ConfigError, Endianness, TileConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "geogrid-to-nc")]
#[command(about = "Convert a WRF geogrid tile to NetCDF-4")]
#[command(
    long_about = "Converts a WRF geogrid file (which is actually an ENVI file) to NetCDF4.\n\
                  The WRF 'index' file is not parsed, instead all settings should be \
                  provided via the command line options."
)]
pub struct Args {
    /// Input file (geogrid)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (netcdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Grid size NX
    #[arg(short = 'x', long, default_value_t = 1)]
    pub nx: usize,

    /// Grid size NY
    #[arg(short = 'y', long, default_value_t = 1)]
    pub ny: usize,

    /// Grid size NZ
    #[arg(short = 'z', long, default_value_t = 1)]
    pub nz: usize,

    /// Word size in bytes
    #[arg(short = 'w', long = "wsize", default_value_t = TileConfig::DEFAULT_WORD_SIZE)]
    pub word_size: usize,

    /// Scale factor (decoded integers are divided by it)
    #[arg(short, long, default_value_t = 1.0)]
    pub scale: f64,

    /// Signed data (default unsigned)
    #[arg(short = 'm', long)]
    pub signed: bool,

    /// Little endian words (default big endian)
    #[arg(short = 'l', long = "littleendian")]
    pub little_endian: bool,

    /// Print the configuration before converting
    #[arg(short, long)]
    pub verbose: bool,

    /// Statistics report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log level for diagnostics on stderr (default: warn, info with --verbose)
    #[arg(long)]
    pub log_level: Option<Level>,
}

impl Args {
    /// Tracing level to install.
    pub fn log_level(&self) -> Level {
        match self.log_level {
            Some(level) => level,
            None if self.verbose => Level::INFO,
            None => Level::WARN,
        }
    }
}

/// Usage error category for a configuration rejected after parsing.
pub fn usage_error_kind(err: &ConfigError) -> ErrorKind {
    match err {
        ConfigError::MissingInput | ConfigError::MissingOutput => {
            ErrorKind::MissingRequiredArgument
        }
        _ => ErrorKind::ValueValidation,
    }
}

/// Output format of the per-level statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// `<level> <mean> <min> <max>` per line
    #[default]
    Text,
    /// JSON array of level records
    Json,
}

/// Validated, immutable conversion settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    pub tile: TileConfig,
    pub output: PathBuf,
    pub verbose: bool,
    pub format: ReportFormat,
}

impl ConverterConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let input = args.input.ok_or(ConfigError::MissingInput)?;
        let output = args.output.ok_or(ConfigError::MissingOutput)?;

        let endianness = if args.little_endian {
            Endianness::Little
        } else {
            Endianness::Big
        };

        let tile = TileConfig::new(input, args.nx, args.ny, args.nz)
            .with_word_size(args.word_size)
            .with_signed(args.signed)
            .with_endianness(endianness)
            .with_scale(args.scale);
        tile.validate()?;

        Ok(Self {
            tile,
            output,
            verbose: args.verbose,
            format: args.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Result<ConverterConfig, ConfigError> {
        let args = Args::try_parse_from(argv).expect("arguments should parse");
        ConverterConfig::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["geogrid-to-nc", "-i", "in.bin", "-o", "out.nc"]).unwrap();

        assert_eq!(config.tile.path, PathBuf::from("in.bin"));
        assert_eq!(config.output, PathBuf::from("out.nc"));
        assert_eq!((config.tile.nx, config.tile.ny, config.tile.nz), (1, 1, 1));
        assert_eq!(config.tile.word_size, 4);
        assert_eq!(config.tile.scale, 1.0);
        assert!(!config.tile.signed);
        assert_eq!(config.tile.endianness, Endianness::Big);
        assert!(!config.verbose);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_short_flags() {
        let config = parse(&[
            "geogrid-to-nc", "-i", "in.bin", "-o", "out.nc", "-x", "600", "-y", "400", "-z", "3",
            "-w", "2", "-s", "10", "-m", "-l", "-v",
        ])
        .unwrap();

        assert_eq!((config.tile.nx, config.tile.ny, config.tile.nz), (600, 400, 3));
        assert_eq!(config.tile.word_size, 2);
        assert_eq!(config.tile.scale, 10.0);
        assert!(config.tile.signed);
        assert_eq!(config.tile.endianness, Endianness::Little);
        assert!(config.verbose);
    }

    #[test]
    fn test_long_flags() {
        let config = parse(&[
            "geogrid-to-nc", "--input", "in.bin", "--output", "out.nc", "--nx", "5", "--wsize",
            "1", "--signed", "--littleendian", "--format", "json",
        ])
        .unwrap();

        assert_eq!(config.tile.nx, 5);
        assert_eq!(config.tile.word_size, 1);
        assert!(config.tile.signed);
        assert_eq!(config.tile.endianness, Endianness::Little);
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    fn test_missing_paths() {
        assert_eq!(
            parse(&["geogrid-to-nc", "-o", "out.nc"]),
            Err(ConfigError::MissingInput)
        );
        assert_eq!(
            parse(&["geogrid-to-nc", "-i", "in.bin"]),
            Err(ConfigError::MissingOutput)
        );
    }

    #[test]
    fn test_zero_scale_rejected() {
        assert_eq!(
            parse(&["geogrid-to-nc", "-i", "in.bin", "-o", "out.nc", "-s", "0"]),
            Err(ConfigError::InvalidScale(0.0))
        );
    }

    #[test]
    fn test_log_level() {
        let args = Args::try_parse_from(["geogrid-to-nc"]).unwrap();
        assert_eq!(args.log_level(), Level::WARN);

        let args = Args::try_parse_from(["geogrid-to-nc", "-v"]).unwrap();
        assert_eq!(args.log_level(), Level::INFO);

        let args = Args::try_parse_from(["geogrid-to-nc", "--log-level", "DEBUG"]).unwrap();
        assert_eq!(args.log_level(), Level::DEBUG);

        let args = Args::try_parse_from(["geogrid-to-nc", "-v", "--log-level", "error"]).unwrap();
        assert_eq!(args.log_level(), Level::ERROR);
    }

    #[test]
    fn test_unknown_log_level_is_usage_error() {
        let err = Args::try_parse_from(["geogrid-to-nc", "--log-level", "loud"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_usage_error_kind() {
        assert_eq!(
            usage_error_kind(&ConfigError::MissingInput),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            usage_error_kind(&ConfigError::MissingOutput),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            usage_error_kind(&ConfigError::InvalidScale(0.0)),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            usage_error_kind(&ConfigError::ZeroExtent { axis: "nx" }),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            usage_error_kind(&ConfigError::InvalidWordSize(0)),
            ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_rejected_config_exits_with_usage_status() {
        let args = Args::try_parse_from(["geogrid-to-nc", "-i", "in.bin"]).unwrap();
        let err = ConverterConfig::from_args(args).unwrap_err();
        let clap_err = Args::command().error(usage_error_kind(&err), err);
        assert_eq!(clap_err.exit_code(), 2);
    }
}
