// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The orchestrator loads datasets through RecordSource rather
// than through a concrete file loader. Production code uses
// JsonArrayLoader; tests hand in records built in memory, so
// the sampling workflow can be exercised without touching
// the filesystem.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::{error::SubsampleError, record::Record};

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce an ordered list of records.
///
/// Implementations:
///   - JsonArrayLoader → parses a JSON array file
pub trait RecordSource {
    /// Load every record, in source order.
    /// A failure here is fatal for the run.
    fn load_all(&self) -> Result<Vec<Record>, SubsampleError>;
}

#[cfg(test)]
impl RecordSource for Vec<Record> {
    fn load_all(&self) -> Result<Vec<Record>, SubsampleError> {
        Ok(self.clone())
    }
}
