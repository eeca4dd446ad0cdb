use serde::{Deserialize, Serialize};

/// One machine-learning dataset entry (matches the `MlDataset` collection).
///
/// Only `_id` is required. Absent or empty fields are skipped on the way out
/// so stored documents and JSON responses stay sparse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub download_link: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub long_description: Option<String>,
}

pub const SEED_ID: i64 = 1;

fn is_blank(v: &Option<String>) -> bool {
    v.as_deref().map_or(true, str::is_empty)
}

impl Dataset {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: None,
            data: None,
            download_link: None,
            short_description: None,
            long_description: None,
        }
    }

    /// The sample record written when the collection is first created.
    pub fn seed() -> Self {
        Self {
            id: SEED_ID,
            name: Some("Feature Set 1".into()),
            data: None,
            download_link: Some("linkFor Download".into()),
            short_description: Some(
                "Acronym identification training and development sets for the acronym identification task at SDU@AAAI-21."
                    .into(),
            ),
            long_description: Some("Long description".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn seed_json_shape() {
        let v = serde_json::to_value(Dataset::seed()).unwrap();
        assert_eq!(v["_id"], 1);
        assert_eq!(v["name"], "Feature Set 1");
        assert_eq!(v["download_link"], "linkFor Download");
        assert!(v.get("data").is_none(), "absent fields are omitted");
    }

    #[test]
    fn empty_strings_are_omitted() {
        let mut d = Dataset::new(3);
        d.name = Some(String::new());
        d.data = Some("x".into());

        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v, serde_json::json!({ "_id": 3, "data": "x" }));

        let stored = bson::to_document(&d).unwrap();
        assert!(!stored.contains_key("name"));
    }

    #[test]
    fn decodes_sparse_document() {
        let d: Dataset = bson::from_document(doc! { "_id": 7_i32, "name": "x" }).unwrap();
        assert_eq!(d.id, 7);
        assert_eq!(d.name.as_deref(), Some("x"));
        assert!(d.long_description.is_none());
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(bson::from_document::<Dataset>(doc! { "name": "no id" }).is_err());
        assert!(bson::from_document::<Dataset>(doc! { "_id": "one" }).is_err());
        assert!(bson::from_document::<Dataset>(doc! { "_id": 2, "name": 5 }).is_err());
    }
}
