// ============================================================
// Layer 3 — Error Kinds
// ============================================================
// Every failure the pipeline can report, as one typed enum.
//
//   MissingInputFile  — fatal, nothing is written
//   Load              — fatal, nothing is written
//   InsufficientData  — non-fatal, the draw takes all records
//   Write             — non-fatal, the next sample size runs
//
// Whether a kind is fatal is decided by the orchestrator,
// not here; this module only describes what went wrong.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::label::Label;

/// Boxed cause for I/O and serialisation failures
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SubsampleError {
    #[error("{label} input file does not exist: {}", path.display())]
    MissingInputFile { label: Label, path: PathBuf },

    #[error("failed to load '{}'", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: BoxedCause,
    },

    #[error("{label} dataset has {available} records, fewer than the {requested} requested; taking all")]
    InsufficientData {
        label: Label,
        available: usize,
        requested: usize,
    },

    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: BoxedCause,
    },
}

impl SubsampleError {
    pub fn load(path: impl Into<PathBuf>, source: impl Into<BoxedCause>) -> Self {
        Self::Load { path: path.into(), source: source.into() }
    }

    pub fn write(path: impl Into<PathBuf>, source: impl Into<BoxedCause>) -> Self {
        Self::Write { path: path.into(), source: source.into() }
    }
}
