//! Volume data records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Data describing a logical volume's current state.
///
/// Sensors report whatever their source yields, so the record is an opaque
/// mapping from field name to field value rather than a fixed struct. The
/// contract does not constrain the shape, units, or freshness of the data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeData {
    fields: BTreeMap<String, Value>,
}

impl VolumeData {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in sorted name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record() {
        let data = VolumeData::new();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
        assert_eq!(data.get("state"), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut data = VolumeData::new();
        data.insert("state", "optimal");
        data.insert("size_bytes", 8_000_000_000u64);
        assert_eq!(data.len(), 2);
        assert_eq!(data.get("state"), Some(&json!("optimal")));
        assert_eq!(data.get("size_bytes"), Some(&json!(8_000_000_000u64)));
    }

    #[test]
    fn test_insert_replaces() {
        let mut data = VolumeData::new();
        data.insert("state", "degraded");
        data.insert("state", "optimal");
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("state"), Some(&json!("optimal")));
    }

    #[test]
    fn test_builder_and_field_order() {
        let data = VolumeData::new()
            .with_field("vg", "vg0")
            .with_field("lv", "root");
        let names: Vec<&str> = data.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["lv", "vg"]);
    }

    #[test]
    fn test_serde_transparent() {
        let data = VolumeData::new().with_field("state", "optimal");
        let encoded = serde_json::to_string(&data).unwrap();
        assert_eq!(encoded, r#"{"state":"optimal"}"#);
        let decoded: VolumeData = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, data);
    }
}
