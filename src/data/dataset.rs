use crate::domain::{label::Label, record::Record};

/// An ordered, immutable collection of records loaded from one file.
#[derive(Debug, Clone)]
pub struct Dataset {
    label:   Label,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(label: Label, records: Vec<Record>) -> Self {
        Self { label, records }
    }

    /// Which input file this dataset came from
    pub fn label(&self) -> Label { self.label }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }
}
