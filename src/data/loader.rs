// ============================================================
// Layer 4 — JSON Array Loader
// ============================================================
// Loads one input dataset from a file containing a flat JSON
// array of objects:
//
//   [
//     { "instruction": "...", "input": "...", "output": "... intent: safe" },
//     { ... }
//   ]
//
// Each array element becomes one Record, in file order.
// Any problem — unreadable file, invalid JSON, a top-level
// value that is not an array, or an element that is not an
// object — is reported as SubsampleError::Load. Unlike a
// directory scan, we never skip bad elements: a dataset is
// either loaded whole or not at all.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use std::{fs, path::PathBuf};

use crate::domain::{error::SubsampleError, record::Record, traits::RecordSource};

/// Loads records from a single JSON array file.
/// Implements the RecordSource trait from Layer 3.
pub struct JsonArrayLoader {
    /// Path to the JSON file
    path: PathBuf,
}

impl JsonArrayLoader {
    /// Create a new JsonArrayLoader pointed at a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonArrayLoader {
    fn load_all(&self) -> Result<Vec<Record>, SubsampleError> {
        // Read the whole file as UTF-8 text
        let text = fs::read_to_string(&self.path)
            .map_err(|e| SubsampleError::load(&self.path, e))?;

        // Parse straight into records; non-object elements fail here
        let records: Vec<Record> = serde_json::from_str(&text)
            .map_err(|e| SubsampleError::load(&self.path, e))?;

        tracing::info!(
            "Loaded {} records from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
