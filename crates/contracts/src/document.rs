//! MetricDocument - one flat observation ready for the sink

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single metric observation: field name to scalar/nested value.
///
/// Collectors build one per source-response element; the sink injects
/// `@timestamp` and `alias` before the write, overwriting collector-supplied
/// fields of the same names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricDocument {
    fields: Map<String, Value>,
}

impl MetricDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from a JSON object, None for any other value
    pub fn from_object(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Insert a field, returning the previous value if the key existed
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether a field is present
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for MetricDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
