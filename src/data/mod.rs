// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between an input file and a shuffled sample
// that is ready to write:
//
//   addata-*.json
//       │
//       ▼
//   JsonArrayLoader   → parses the file into records
//       │
//       ▼
//   Dataset           → ordered, immutable, tagged safe/harmful
//       │
//       ▼
//   sample()          → n records without replacement
//       │
//       ▼
//   combine()         → safe draw ++ harmful draw, shuffled
//
// sample() and combine() take the generator as an argument;
// nothing in this layer owns or seeds one.

/// Loads a JSON array file into records
pub mod loader;

/// Ordered collection of records from one input file
pub mod dataset;

/// Draws records without replacement
pub mod sampler;

/// Concatenates and shuffles two draws
pub mod combiner;
