//! NetCDF-4 backend using the netcdf library.
//!
//! The netcdf crate wraps libnetcdf/HDF5. Files are created in NetCDF-4
//! (HDF5) format so the deflate filter is available.
//!
//! The crate switches from define mode to data mode on its own at the first
//! data write, so [`NetCdfSink::end_definitions`] has no library call to
//! make. It checks instead that everything requested during the define
//! steps actually exists in the file, which is the last point a schema
//! problem can be reported before data goes in.

use std::path::Path;
use std::sync::Once;

use tracing::debug;

use crate::error::{DatasetError, DatasetResult};
use crate::sink::DatasetSink;

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose error stacks to stderr for failures
/// that are already reported through the returned status, e.g.
///
/// ```text
/// HDF5-DIAG: Error detected in HDF5 (1.10.8) thread 0:
///   #000: ../../../src/H5F.c line 532 in H5Fcreate(): unable to create file
/// ```
///
/// Only needs to be called once per process, but is safe to call multiple times.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and we're passing null pointers
        // to disable error output, which is a documented valid use.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

const NOT_OPEN: &str = "no open dataset";

/// [`DatasetSink`] writing a NetCDF-4 file.
///
/// The file handle is owned here and released when the sink is closed or
/// dropped, whichever comes first.
#[derive(Default)]
pub struct NetCdfSink {
    file: Option<netcdf::FileMut>,
    requested_dimensions: Vec<String>,
    requested_variables: Vec<String>,
}

impl NetCdfSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn file_for_define(&mut self) -> DatasetResult<&mut netcdf::FileMut> {
        self.file.as_mut().ok_or_else(|| DatasetError::define(NOT_OPEN))
    }

    fn file_for_write(&mut self) -> DatasetResult<&mut netcdf::FileMut> {
        self.file.as_mut().ok_or_else(|| DatasetError::write(NOT_OPEN))
    }
}

impl DatasetSink for NetCdfSink {
    fn create(&mut self, path: &Path) -> DatasetResult<()> {
        silence_hdf5_errors();

        self.requested_dimensions.clear();
        self.requested_variables.clear();

        let file = netcdf::create_with(path, netcdf::Options::NETCDF4)
            .map_err(|e| DatasetError::create(path, e.to_string()))?;

        debug!(path = %path.display(), "Created NetCDF-4 dataset");
        self.file = Some(file);
        Ok(())
    }

    fn define_dimension(&mut self, name: &str, len: usize) -> DatasetResult<()> {
        self.requested_dimensions.push(name.to_string());

        self.file_for_define()?
            .add_dimension(name, len)
            .map_err(|e| DatasetError::define(format!("dimension {}: {}", name, e)))?;
        Ok(())
    }

    fn define_variable(&mut self, name: &str, dims: &[&str]) -> DatasetResult<()> {
        self.requested_variables.push(name.to_string());

        self.file_for_define()?
            .add_variable::<f32>(name, dims)
            .map_err(|e| DatasetError::define(format!("variable {}: {}", name, e)))?;
        Ok(())
    }

    fn define_deflate(&mut self, variable: &str, level: i32, shuffle: bool) -> DatasetResult<()> {
        let mut var = self
            .file_for_define()?
            .variable_mut(variable)
            .ok_or_else(|| DatasetError::define(format!("unknown variable {}", variable)))?;

        var.set_compression(level, shuffle)
            .map_err(|e| DatasetError::define(format!("deflate on {}: {}", variable, e)))
    }

    fn end_definitions(&mut self) -> DatasetResult<()> {
        let file = self.file.as_ref().ok_or_else(|| DatasetError::define(NOT_OPEN))?;

        let missing_dimensions = self
            .requested_dimensions
            .iter()
            .filter(|name| file.dimension(name).is_none());
        let missing_variables = self
            .requested_variables
            .iter()
            .filter(|name| file.variable(name).is_none());

        let missing: Vec<&str> = missing_dimensions
            .chain(missing_variables)
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(DatasetError::define(format!(
                "definitions missing from dataset: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }

    fn put_values(&mut self, variable: &str, values: &[f32]) -> DatasetResult<()> {
        let mut var = self
            .file_for_write()?
            .variable_mut(variable)
            .ok_or_else(|| DatasetError::write(format!("unknown variable {}", variable)))?;

        var.put_values(values, ..)
            .map_err(|e| DatasetError::write(format!("{}: {}", variable, e)))
    }

    fn close(&mut self) -> DatasetResult<()> {
        let file = self.file.take().ok_or_else(|| DatasetError::write(NOT_OPEN))?;
        file.close().map_err(|e| DatasetError::write(e.to_string()))
    }
}
