// ============================================================
// Layer 3 — Label Domain Types
// ============================================================
// The two categories of the input data, and the tallies we
// report for every written file.
//
// A Label plays two roles:
//   - it names the dataset a record was loaded from
//     (the "safe" file vs the "harmful" file)
//   - it names the marker text found inside a record's
//     `output` field ("intent: safe" / "intent: harmful")
//
// The two usually agree, but nothing forces them to, which
// is why LabelCounts looks at the marker text rather than
// the file a record came from.

use std::fmt;

use crate::domain::record::Record;

/// Category of a dataset or record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Safe,
    Harmful,
}

impl Label {
    /// Literal marker searched for in a record's `output` text
    pub fn marker(self) -> &'static str {
        match self {
            Label::Safe    => "intent: safe",
            Label::Harmful => "intent: harmful",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Safe    => "safe",
            Label::Harmful => "harmful",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-file marker tallies.
///
/// `safe` and `harmful` only count records with exactly one
/// marker, so `safe + harmful` never exceeds the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    /// Records whose output contains only "intent: safe"
    pub safe: usize,

    /// Records whose output contains only "intent: harmful"
    pub harmful: usize,

    /// Records with neither marker, or no string `output`
    pub unlabeled: usize,

    /// Records with both markers
    pub ambiguous: usize,
}

impl LabelCounts {
    /// Count markers over a sequence of records
    pub fn tally<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut counts = Self::default();
        for record in records {
            counts.add(record);
        }
        counts
    }

    /// Add one record to the tallies
    pub fn add(&mut self, record: &Record) {
        match (record.has_marker(Label::Safe), record.has_marker(Label::Harmful)) {
            (true, false) => self.safe      += 1,
            (false, true) => self.harmful   += 1,
            (true, true)  => self.ambiguous += 1,
            (false, false) => self.unlabeled += 1,
        }
    }

    /// Number of records seen
    pub fn total(&self) -> usize {
        self.safe + self.harmful + self.unlabeled + self.ambiguous
    }
}
