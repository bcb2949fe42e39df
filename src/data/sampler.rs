// ============================================================
// Layer 4 — Sampler
// ============================================================
// Draws `n` records from a dataset without replacement.
//
// The draw borrows records from the dataset instead of
// cloning them, so a record's identity (its address) is the
// same in the draw, in the combined sample, and in the
// dataset it came from. No record can appear twice in one
// draw because choose_multiple picks distinct positions.
//
// If the dataset is smaller than `n`, we do not fail:
// the draw takes every record, in original order, and
// carries a Shortfall so the caller can report it.
//
// The generator is passed in by the caller. Every call
// advances it, so the order in which datasets and sizes are
// sampled is part of what makes a run reproducible.
//
// Reference: rand crate documentation (SliceRandom)

use rand::{seq::SliceRandom, Rng};

use crate::data::dataset::Dataset;
use crate::domain::{error::SubsampleError, label::Label, record::Record};

/// Records drawn from one dataset for one sample size.
#[derive(Debug, Clone)]
pub struct Draw<'a> {
    /// Borrowed records, in draw order
    pub records: Vec<&'a Record>,

    /// Set when the dataset had fewer records than requested
    pub shortfall: Option<Shortfall>,
}

/// Dataset was smaller than the requested sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub label:     Label,
    pub available: usize,
    pub requested: usize,
}

impl From<Shortfall> for SubsampleError {
    fn from(s: Shortfall) -> Self {
        SubsampleError::InsufficientData {
            label:     s.label,
            available: s.available,
            requested: s.requested,
        }
    }
}

impl<'a> Draw<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Draw `n` distinct records uniformly at random from `dataset`.
///
/// When `dataset.len() < n` every record is returned in original
/// order and the shortfall is recorded and logged as a warning.
pub fn sample<'a, R>(dataset: &'a Dataset, n: usize, rng: &mut R) -> Draw<'a>
where
    R: Rng + ?Sized,
{
    if dataset.len() < n {
        let shortfall = Shortfall {
            label:     dataset.label(),
            available: dataset.len(),
            requested: n,
        };
        tracing::warn!("{}", SubsampleError::from(shortfall));

        return Draw {
            records:   dataset.records().iter().collect(),
            shortfall: Some(shortfall),
        };
    }

    let records: Vec<&Record> = dataset.records().choose_multiple(rng, n).collect();

    tracing::debug!(
        "Drew {} of {} {} records",
        records.len(),
        dataset.len(),
        dataset.label()
    );

    Draw { records, shortfall: None }
}
