//! WRF geogrid to NetCDF-4 converter.
//!
//! Decodes a raw geogrid tile with the layout given on the command line,
//! writes it as a compressed NetCDF-4 variable and prints per-level
//! statistics.

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use geogrid_converter::report::{format_config, format_outcome};
use geogrid_converter::{
    exit_status, usage_error_kind, Args, ConversionPipeline, ConverterConfig,
};
use netcdf_writer::{silence_hdf5_errors, NetCdfSink};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = match ConverterConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => Args::command().error(usage_error_kind(&e), e).exit(),
    };

    if config.verbose {
        print!("{}", format_config(&config));
    }

    silence_hdf5_errors();

    let format = config.format;
    let pipeline = ConversionPipeline::new(config);
    let mut sink = NetCdfSink::new();
    let result = pipeline.run(&mut sink);

    match &result {
        Ok(outcome) => {
            print!("{}", format_outcome(outcome, format)?);

            if !outcome.write_report.is_success() {
                info!(
                    failures = outcome.write_report.failure_count(),
                    "Some dataset steps failed; see [XX] lines"
                );
            }
        }
        Err(e) => {
            error!(error = %e, "Conversion aborted");
            eprintln!("Error: {e}");
        }
    }

    Ok(ExitCode::from(exit_status(&result)))
}
