//! Record metadata
//!
//! The records API is inconsistent about metadata: some rows carry a JSON
//! object, some carry that same object serialized into a string, some carry
//! nothing. Everything is normalized here, once, when a record is decoded.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Normalized metadata attached to a record
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Metadata {
    /// No metadata (missing, `null`, or blank text)
    #[default]
    Absent,
    /// A key/value object, in the order the backend sent it
    Fields(Map<String, Value>),
    /// Text that could not be read as a JSON object
    Malformed { raw: String, reason: String },
}

/// One rendered key/value line of a metadata listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

impl Metadata {
    /// Normalize a raw JSON value as received from the API
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Metadata::Absent,
            Value::Object(map) => Metadata::Fields(map),
            Value::String(text) => Self::from_text(&text),
            other => Metadata::Malformed {
                raw: other.to_string(),
                reason: "expected a JSON object".to_string(),
            },
        }
    }

    /// Normalize metadata that arrived serialized as text
    pub fn from_text(text: &str) -> Self {
        if text.trim().is_empty() {
            return Metadata::Absent;
        }

        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Metadata::Fields(map),
            Ok(Value::Null) => Metadata::Absent,
            Ok(_) => Metadata::Malformed {
                raw: text.to_string(),
                reason: "expected a JSON object".to_string(),
            },
            Err(e) => Metadata::Malformed {
                raw: text.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// Whether there is anything to expand for this record
    pub fn is_present(&self) -> bool {
        !matches!(self, Metadata::Absent)
    }

    /// Short availability label shown in the record table
    pub fn availability(&self) -> &'static str {
        match self {
            Metadata::Absent => "NOT Available",
            Metadata::Fields(_) => "Available",
            Metadata::Malformed { .. } => "Unreadable",
        }
    }

    /// Key/value lines for the expanded detail row
    ///
    /// Empty for `Absent` and `Malformed`.
    pub fn entries(&self) -> Vec<MetadataEntry> {
        match self {
            Metadata::Fields(map) => map
                .iter()
                .map(|(key, value)| MetadataEntry {
                    key: key.clone(),
                    value: display_value(value),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Render a metadata value for display
///
/// Strings are shown verbatim, everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Metadata::from_value(value))
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Metadata::Absent => serializer.serialize_none(),
            Metadata::Fields(map) => map.serialize(serializer),
            Metadata::Malformed { raw, .. } => serializer.serialize_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_is_kept_in_order() {
        let meta = Metadata::from_value(json!({"year": 2000, "director": "X"}));
        let keys: Vec<_> = meta.entries().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["year", "director"]);
    }

    #[test]
    fn test_string_encoded_object() {
        let meta = Metadata::from_value(json!("{\"director\":\"X\",\"year\":2000}"));
        assert_eq!(
            meta.entries(),
            vec![
                MetadataEntry { key: "director".into(), value: "X".into() },
                MetadataEntry { key: "year".into(), value: "2000".into() },
            ]
        );
        assert_eq!(meta.availability(), "Available");
    }

    #[test]
    fn test_blank_and_null_are_absent() {
        assert_eq!(Metadata::from_value(Value::Null), Metadata::Absent);
        assert_eq!(Metadata::from_text("   "), Metadata::Absent);
        assert_eq!(Metadata::from_text("null"), Metadata::Absent);
        assert!(!Metadata::Absent.is_present());
        assert_eq!(Metadata::Absent.availability(), "NOT Available");
    }

    #[test]
    fn test_unparseable_text_is_malformed() {
        let meta = Metadata::from_text("{director: X");
        match &meta {
            Metadata::Malformed { raw, reason } => {
                assert_eq!(raw, "{director: X");
                assert!(!reason.is_empty());
            }
            other => panic!("expected malformed metadata, got {:?}", other),
        }
        assert!(meta.is_present());
        assert!(meta.entries().is_empty());
        assert_eq!(meta.availability(), "Unreadable");
    }

    #[test]
    fn test_non_object_json_is_malformed() {
        assert!(matches!(
            Metadata::from_value(json!([1, 2])),
            Metadata::Malformed { .. }
        ));
        assert!(matches!(
            Metadata::from_text("42"),
            Metadata::Malformed { .. }
        ));
    }

    #[test]
    fn test_empty_object_counts_as_available() {
        let meta = Metadata::from_value(json!({}));
        assert_eq!(meta.availability(), "Available");
        assert!(meta.entries().is_empty());
    }

    #[test]
    fn test_nested_values_are_stringified() {
        let meta = Metadata::from_value(json!({
            "cast": ["A", "B"],
            "studio": {"name": "S"},
            "rating": null,
            "color": true
        }));
        let values: Vec<_> = meta.entries().into_iter().map(|e| e.value).collect();
        assert_eq!(
            values,
            vec!["[\"A\",\"B\"]", "{\"name\":\"S\"}", "null", "true"]
        );
    }
}
