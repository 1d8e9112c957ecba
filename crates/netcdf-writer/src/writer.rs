//! Drives a [`DatasetSink`] through every dataset step.

use std::path::Path;

use tracing::{info, warn};

use geogrid_common::{ConfigError, Field};

use crate::error::{DatasetError, DatasetResult};
use crate::report::{WriteReport, WriteStep};
use crate::schema::DatasetSchema;
use crate::sink::DatasetSink;

/// Deflate settings for the data variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionConfig {
    /// Deflate level (0-9).
    pub deflate_level: i32,

    /// Enable the byte shuffle filter.
    pub shuffle: bool,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            deflate_level: 4,
            shuffle: false,
        }
    }
}

impl CompressionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=9).contains(&self.deflate_level) {
            return Err(ConfigError::InvalidCompressionLevel(self.deflate_level));
        }
        Ok(())
    }
}

/// Writes a [`Field`] as a single compressed variable.
#[derive(Debug, Clone, Default)]
pub struct DatasetWriter {
    compression: CompressionConfig,
}

impl DatasetWriter {
    pub fn new(compression: CompressionConfig) -> Self {
        Self { compression }
    }

    /// Run every step against `sink` and collect their outcomes.
    ///
    /// No step is skipped because an earlier one failed; the sink reports
    /// missing prerequisites as errors of its own.
    pub fn write<S: DatasetSink + ?Sized>(
        &self,
        sink: &mut S,
        path: &Path,
        field: &Field,
    ) -> WriteReport {
        let schema = DatasetSchema::for_field(field);
        let variable = schema.variable_name();
        let mut report = WriteReport::new();

        record(
            &mut report,
            WriteStep::Create {
                path: path.to_path_buf(),
            },
            sink.create(path),
        );

        for dim in schema.dimensions() {
            record(
                &mut report,
                WriteStep::DefineDimension {
                    name: dim.name,
                    len: dim.len,
                },
                sink.define_dimension(dim.name, dim.len),
            );
        }

        let dims = schema.dimension_names();
        let result = sink.define_variable(variable, &dims);
        record(
            &mut report,
            WriteStep::DefineVariable {
                name: variable.to_string(),
                dims,
            },
            result,
        );

        let CompressionConfig {
            deflate_level,
            shuffle,
        } = self.compression;
        let result = self
            .compression
            .validate()
            .map_err(|e| DatasetError::define(e.to_string()))
            .and_then(|()| sink.define_deflate(variable, deflate_level, shuffle));
        record(
            &mut report,
            WriteStep::DefineDeflate {
                level: deflate_level,
                shuffle,
            },
            result,
        );

        record(&mut report, WriteStep::EndDefinitions, sink.end_definitions());

        record(
            &mut report,
            WriteStep::PutValues {
                variable: variable.to_string(),
                count: field.len(),
            },
            sink.put_values(variable, field.values()),
        );

        record(&mut report, WriteStep::Close, sink.close());

        if report.is_success() {
            info!(path = %path.display(), rank = schema.rank(), values = field.len(), "Dataset written");
        } else {
            warn!(
                path = %path.display(),
                failures = report.failure_count(),
                "Dataset written with failures; output file is unreliable"
            );
        }

        report
    }
}

fn record(report: &mut WriteReport, step: WriteStep, result: DatasetResult<()>) {
    match &result {
        Ok(()) => info!(step = %step, "Dataset step ok"),
        Err(e) => warn!(step = %step, stage = e.stage(), error = %e, "Dataset step failed"),
    }
    report.push(step, result);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls; optionally fails `create`, after which every other
    /// step fails too, like a real backend with no open file.
    #[derive(Default)]
    struct RecordingSink {
        fail_create: bool,
        open: bool,
        calls: Vec<String>,
        written: Vec<f32>,
    }

    impl RecordingSink {
        fn require_open(&self, err: fn(&str) -> DatasetError) -> DatasetResult<()> {
            if self.open {
                Ok(())
            } else {
                Err(err("no open dataset"))
            }
        }
    }

    impl DatasetSink for RecordingSink {
        fn create(&mut self, path: &Path) -> DatasetResult<()> {
            self.calls.push("create".to_string());
            if self.fail_create {
                return Err(DatasetError::create(path, "permission denied"));
            }
            self.open = true;
            Ok(())
        }

        fn define_dimension(&mut self, name: &str, len: usize) -> DatasetResult<()> {
            self.calls.push(format!("dim {} {}", name, len));
            self.require_open(|m| DatasetError::define(m))
        }

        fn define_variable(&mut self, name: &str, dims: &[&str]) -> DatasetResult<()> {
            self.calls.push(format!("var {} {}", name, dims.join(",")));
            self.require_open(|m| DatasetError::define(m))
        }

        fn define_deflate(&mut self, _variable: &str, level: i32, shuffle: bool) -> DatasetResult<()> {
            self.calls.push(format!("deflate {} {}", level, shuffle));
            self.require_open(|m| DatasetError::define(m))
        }

        fn end_definitions(&mut self) -> DatasetResult<()> {
            self.calls.push("enddef".to_string());
            self.require_open(|m| DatasetError::define(m))
        }

        fn put_values(&mut self, _variable: &str, values: &[f32]) -> DatasetResult<()> {
            self.calls.push("put".to_string());
            self.require_open(|m| DatasetError::write(m))?;
            self.written = values.to_vec();
            Ok(())
        }

        fn close(&mut self) -> DatasetResult<()> {
            self.calls.push("close".to_string());
            self.require_open(|m| DatasetError::write(m))?;
            self.open = false;
            Ok(())
        }
    }

    fn field_3d() -> Field {
        Field::from_values(2, 2, 3, (0..12).map(|i| i as f32).collect()).unwrap()
    }

    #[test]
    fn test_all_steps_in_order() {
        let mut sink = RecordingSink::default();
        let report =
            DatasetWriter::default().write(&mut sink, Path::new("out.nc"), &field_3d());

        assert!(report.is_success());
        assert_eq!(
            sink.calls,
            vec![
                "create",
                "dim z 3",
                "dim y 2",
                "dim x 2",
                "var var z,y,x",
                "deflate 4 false",
                "enddef",
                "put",
                "close",
            ]
        );
        assert_eq!(sink.written.len(), 12);
        assert_eq!(report.steps().len(), 9);
    }

    #[test]
    fn test_single_level_skips_z() {
        let field = Field::from_values(3, 2, 1, vec![0.0; 6]).unwrap();
        let mut sink = RecordingSink::default();
        DatasetWriter::default().write(&mut sink, Path::new("out.nc"), &field);

        assert!(sink.calls.contains(&"var var y,x".to_string()));
        assert!(!sink.calls.iter().any(|c| c.starts_with("dim z")));
    }

    #[test]
    fn test_failed_create_still_attempts_every_step() {
        let mut sink = RecordingSink {
            fail_create: true,
            ..Default::default()
        };
        let report =
            DatasetWriter::default().write(&mut sink, Path::new("out.nc"), &field_3d());

        assert_eq!(sink.calls.len(), 9);
        assert_eq!(report.failure_count(), 9);

        let stages: Vec<&str> = report
            .failures()
            .map(|s| s.result.as_ref().unwrap_err().stage())
            .collect();
        assert_eq!(
            stages,
            vec![
                "create", "define", "define", "define", "define", "define", "define", "write",
                "write"
            ]
        );
        assert!(report.to_string().starts_with("[XX] create(out.nc): cannot create out.nc"));
    }

    #[test]
    fn test_invalid_compression_fails_only_its_step() {
        let writer = DatasetWriter::new(CompressionConfig {
            deflate_level: 12,
            shuffle: false,
        });
        let mut sink = RecordingSink::default();
        let report = writer.write(&mut sink, Path::new("out.nc"), &field_3d());

        assert_eq!(report.failure_count(), 1);
        let failed = report.failures().next().unwrap();
        assert_eq!(
            failed.step,
            WriteStep::DefineDeflate {
                level: 12,
                shuffle: false
            }
        );
        assert!(!sink.calls.iter().any(|c| c.starts_with("deflate")));
        assert_eq!(sink.written.len(), 12);
    }

    #[test]
    fn test_compression_validate() {
        assert!(CompressionConfig::default().validate().is_ok());
        let bad = CompressionConfig {
            deflate_level: -1,
            shuffle: true,
        };
        assert_eq!(
            bad.validate(),
            Err(ConfigError::InvalidCompressionLevel(-1))
        );
    }
}
