//! Per-step outcome of a dataset write.

use std::fmt;
use std::path::PathBuf;

use crate::error::DatasetError;

/// One step of writing a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteStep {
    Create { path: PathBuf },
    DefineDimension { name: &'static str, len: usize },
    DefineVariable { name: String, dims: Vec<&'static str> },
    DefineDeflate { level: i32, shuffle: bool },
    EndDefinitions,
    PutValues { variable: String, count: usize },
    Close,
}

impl fmt::Display for WriteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteStep::Create { path } => write!(f, "create({})", path.display()),
            WriteStep::DefineDimension { name, len } => write!(f, "def_dim({}, {})", name, len),
            WriteStep::DefineVariable { name, dims } => {
                write!(f, "def_var({}, float, [{}])", name, dims.join(", "))
            }
            WriteStep::DefineDeflate { level, shuffle } => {
                write!(f, "def_var_deflate(level={}, shuffle={})", level, shuffle)
            }
            WriteStep::EndDefinitions => f.write_str("enddef"),
            WriteStep::PutValues { variable, count } => {
                write!(f, "put_var({}, {} values)", variable, count)
            }
            WriteStep::Close => f.write_str("close"),
        }
    }
}

/// A step together with its result.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub step: WriteStep,
    pub result: Result<(), DatasetError>,
}

impl StepOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(()) => write!(f, "[OK] {}", self.step),
            Err(e) => write!(f, "[XX] {}: {}", self.step, e),
        }
    }
}

/// Outcomes of every attempted step, in order.
///
/// A report with any failure means the output file, if one exists at all,
/// must be treated as unreliable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteReport {
    steps: Vec<StepOutcome>,
}

impl WriteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: WriteStep, result: Result<(), DatasetError>) {
        self.steps.push(StepOutcome { step, result });
    }

    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }

    pub fn is_success(&self) -> bool {
        self.steps.iter().all(StepOutcome::is_ok)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|s| !s.is_ok())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

impl fmt::Display for WriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.steps {
            writeln!(f, "{}", outcome)?;
        }
        Ok(())
    }
}
