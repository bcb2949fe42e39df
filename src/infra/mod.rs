// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Output persistence lives here, apart from the data layer:
//
//   writer.rs — Serialises each combined sample to
//               sampled_data_{n}.json and tallies the
//               safe/harmful markers of what it wrote.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §12 (I/O and File Handling)

/// Sample file writer and per-file statistics
pub mod writer;
