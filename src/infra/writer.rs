// ============================================================
// Layer 6 — Sample Writer
// ============================================================
// Persists each combined sample as a JSON array file and
// reports what went into it.
//
// Output format:
//   - UTF-8, 2-space indentation (serde_json's pretty printer)
//   - non-ASCII text written literally, never \uXXXX-escaped
//   - record keys in the order they had in the input file
//
// File naming convention (one file per sample size):
//   <output_dir>/
//     sampled_data_5.json    ← 5 safe + 5 harmful
//     sampled_data_10.json   ← 10 safe + 10 harmful
//     ...
//
// A failed write is returned as SubsampleError::Write. The
// orchestrator reports it and moves on to the next size.

use std::{fs, path::{Path, PathBuf}};

use crate::domain::{error::SubsampleError, label::LabelCounts, record::Record};

/// Prefix of every output file name
pub const OUTPUT_PREFIX: &str = "sampled_data_";

/// What was written to one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path:    PathBuf,
    /// Number of records in the file
    pub written: usize,
    /// Marker tallies over the written records
    pub labels:  LabelCounts,
}

/// Serialise `records` to `path` as a pretty-printed JSON array.
pub fn write_json_array(records: &[&Record], path: &Path) -> Result<WriteSummary, SubsampleError> {
    // serde_json::to_string_pretty indents with two spaces and
    // leaves non-ASCII characters as-is
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| SubsampleError::write(path, e))?;

    fs::write(path, json).map_err(|e| SubsampleError::write(path, e))?;

    let summary = WriteSummary {
        path:    path.to_path_buf(),
        written: records.len(),
        labels:  LabelCounts::tally(records.iter().copied()),
    };

    tracing::debug!(
        "Wrote '{}': {} records ({} safe, {} harmful)",
        path.display(),
        summary.written,
        summary.labels.safe,
        summary.labels.harmful,
    );
    Ok(summary)
}

/// Writes per-size sample files into one directory.
pub struct SampleWriter {
    /// Directory that receives the sampled_data_{n}.json files
    dir: PathBuf,
}

impl SampleWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the output file for sample size `size`
    pub fn output_path(&self, size: usize) -> PathBuf {
        self.dir.join(format!("{OUTPUT_PREFIX}{size}.json"))
    }

    /// Write the combined sample for `size`
    pub fn write(&self, size: usize, records: &[&Record]) -> Result<WriteSummary, SubsampleError> {
        write_json_array(records, &self.output_path(size))
    }
}
