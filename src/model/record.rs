//! Record types exchanged with the records API

use serde::{Deserialize, Serialize};

use super::metadata::Metadata;

/// A film record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Server-assigned identifier
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    /// IMDb identifier, used as the row key in the UI
    pub imdb_id: String,
    /// Image URL
    #[serde(default)]
    pub images: String,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Body of a create request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRecord {
    pub title: String,
    pub release_year: i32,
    pub imdb_id: String,
    pub images: String,
}

/// Body of a partial update; unset fields are left out of the request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.release_year.is_none() && self.imdb_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_record_with_text_metadata() {
        let record: Record = serde_json::from_value(json!({
            "id": 7,
            "title": "Heat",
            "release_year": 1995,
            "imdb_id": "tt0113277",
            "images": "http://img/heat.jpg",
            "metadata": "{\"director\":\"Michael Mann\"}"
        }))
        .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.metadata.entries().len(), 1);
    }

    #[test]
    fn test_decode_record_without_optional_fields() {
        let record: Record = serde_json::from_value(json!({
            "id": 1,
            "title": "Alien",
            "release_year": 1979,
            "imdb_id": "tt0078748"
        }))
        .unwrap();

        assert_eq!(record.images, "");
        assert_eq!(record.metadata, Metadata::Absent);
    }

    #[test]
    fn test_bad_metadata_does_not_fail_the_record() {
        let record: Record = serde_json::from_value(json!({
            "id": 2,
            "title": "Ran",
            "release_year": 1985,
            "imdb_id": "tt0089881",
            "images": "",
            "metadata": "not json"
        }))
        .unwrap();

        assert!(matches!(record.metadata, Metadata::Malformed { .. }));
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = RecordPatch {
            title: Some("New Title".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"title": "New Title"})
        );
        assert!(!patch.is_empty());
        assert!(RecordPatch::default().is_empty());
    }
}
