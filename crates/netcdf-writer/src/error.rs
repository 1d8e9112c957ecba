//! Error types for dataset writing.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset writer operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Failure of a single dataset step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// The container file could not be created
    #[error("cannot create {}: {message}", path.display())]
    Create { path: PathBuf, message: String },

    /// A dimension, variable or filter could not be defined
    #[error("{0}")]
    Define(String),

    /// Values could not be written or the file not closed cleanly
    #[error("{0}")]
    Write(String),
}

impl DatasetError {
    pub fn create(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Create {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn define(msg: impl Into<String>) -> Self {
        Self::Define(msg.into())
    }

    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Short name of the failing stage.
    pub fn stage(&self) -> &'static str {
        match self {
            DatasetError::Create { .. } => "create",
            DatasetError::Define(_) => "define",
            DatasetError::Write(_) => "write",
        }
    }
}
