// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to produce the
// sampled files.
//
// Rules for this layer:
//   - No sampling or shuffling logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - No serialisation (that's Layer 6)
//   - Only workflow coordination and reporting
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The subsampling workflow
pub mod sample_use_case;
