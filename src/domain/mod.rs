// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, enums, and traits describing what the
// system works with: records, labels, and error kinds.
//
// Rules for this layer:
//   - NO file I/O
//   - NO randomness
//   - Only plain Rust types and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One JSON object from an input dataset
pub mod record;

// Safe/harmful labels and per-file marker tallies
pub mod label;

// Typed error kinds shared by every layer
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
