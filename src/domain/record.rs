// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// Represents a single item from an input dataset.
//
// A record is an opaque JSON object. We never interpret its
// fields except for `output`, whose text carries the label
// marker ("intent: safe" / "intent: harmful").
//
// Using #[serde(transparent)] means a Record serialises
// exactly like the object it wraps — no extra nesting —
// so what we write out is byte-for-byte the same shape
// we read in. Key order is kept because serde_json is
// built with the `preserve_order` feature.
//
// Reference: Rust Book §5 (Structs and Methods)
//            serde documentation (container attributes)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::label::Label;

/// Name of the field whose text decides a record's label.
pub const OUTPUT_FIELD: &str = "output";

/// One dataset item: a JSON object with arbitrary fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// The `output` field as text.
    /// Returns None when the field is absent or not a string.
    pub fn output(&self) -> Option<&str> {
        self.0.get(OUTPUT_FIELD).and_then(Value::as_str)
    }

    /// True if the `output` text contains the marker for `label`
    pub fn has_marker(&self, label: Label) -> bool {
        self.output()
            .map(|text| text.contains(label.marker()))
            .unwrap_or(false)
    }
}
