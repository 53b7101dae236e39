//! Lookup over in-memory JSON records

use serde_json::Value;
use want_core::Lookup;

/// Finds the first record whose `field` equals the coerced parameter
///
/// Equality is on JSON values, so `"1"` does not match `1`; coerce first.
#[derive(Debug, Clone, Default)]
pub struct Records {
    records: Vec<Value>,
    field: String,
}

impl Records {
    /// Records keyed by `"id"`
    #[must_use]
    pub fn new(records: Vec<Value>) -> Self {
        Self {
            records,
            field: "id".to_string(),
        }
    }

    /// Key on another field
    #[must_use]
    pub fn keyed_by(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if there are no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Lookup<Value> for Records {
    fn get(&self, key: &Value) -> Option<Value> {
        self.records
            .iter()
            .find(|r| r.get(&self.field) == Some(key))
            .cloned()
    }
}
