// ============================================================
// Layer 4 — Combiner
// ============================================================
// Merges the safe draw and the harmful draw into one list
// and shuffles it.
//
// Why shuffle after concatenating?
//   Without it every output file would hold all safe items
//   first and all harmful items second. Anything reading the
//   file front-to-back (or truncating it) would see a skewed
//   label mix.
//
// The shuffle is Fisher-Yates via rand::seq::SliceRandom,
// driven by the caller's generator, so the result is fully
// determined by the seed and the calls made before it.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::{seq::SliceRandom, Rng};

/// Concatenate `first` then `second`, then permute the result in place.
///
/// Only the order changes; every element of both inputs is kept.
pub fn combine<T, R>(mut first: Vec<T>, second: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    first.extend(second);

    // Fisher-Yates shuffle — every permutation is equally likely
    first.shuffle(rng);

    tracing::debug!("Combined and shuffled {} items", first.len());
    first
}
