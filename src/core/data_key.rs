use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

/// Field accessor into a data record.
///
/// A key naming an existing field is used verbatim. Otherwise it is read as a
/// dotted path where numeric segments index into arrays (`"points.1.y"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataKey(String);

impl DataKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the value this key addresses inside `record`.
    #[must_use]
    pub fn value_in<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        let found = match record {
            Value::Object(map) if map.contains_key(&self.0) => map.get(&self.0),
            _ => self.walk_path(record),
        };
        found.filter(|value| !value.is_null())
    }

    fn walk_path<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        let segments: SmallVec<[&str; 4]> = self.0.split('.').collect();
        let mut current = record;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl From<&str> for DataKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for DataKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders a record value as tooltip display text.
#[must_use]
pub fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
