//! Record trait - the shape every entity and relation row shares
//!
//! A record is an opaque JSON object with at least an `id` and, for
//! anything editable, an `updated_at` timestamp. Controllers only rely on
//! this surface plus a field-map view of the record used for dirty-field
//! diffing and partial in-place merges.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// JSON object keyed by field name - form state, payloads and filters
pub type FieldMap = serde_json::Map<String, Value>;

/// A typed API resource row
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Resource name the API client addresses this record type under
    const RESOURCE: &'static str;

    /// Primary id; empty string on records that have not been persisted yet
    fn id(&self) -> &str;

    /// Last server-side modification time, when the resource tracks one
    fn updated_at(&self) -> Option<DateTime<Utc>>;

    /// Field-map view of this record, used for diffing and merging
    fn to_fields(&self) -> FieldMap {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => FieldMap::new(),
        }
    }

    /// Copy of this record with `patch` fields overwritten in place.
    /// Returns `None` when the patched object no longer decodes into
    /// this record type.
    fn merged_with(&self, patch: &FieldMap) -> Option<Self> {
        let mut fields = self.to_fields();
        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }
        serde_json::from_value(Value::Object(fields)).ok()
    }
}

/// Decode a raw response value into a typed record
pub fn decode_record<T: Record>(value: Value) -> Result<T, crate::error::ClientError> {
    Ok(serde_json::from_value(value)?)
}

pub(crate) fn default_true() -> bool {
    true
}

/// Implements `Record` for a struct with `id` and `updated_at` fields
macro_rules! impl_record {
    ($ty:ty, $resource:literal) => {
        impl $crate::record::Record for $ty {
            const RESOURCE: &'static str = $resource;

            fn id(&self) -> &str {
                &self.id
            }

            fn updated_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.updated_at
            }
        }
    };
}

pub(crate) use impl_record;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(default)]
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        updated_at: Option<DateTime<Utc>>,
    }

    impl_record!(Sample, "sample");

    #[test]
    fn test_to_fields_is_object_view() {
        let sample = Sample {
            id: "1".into(),
            name: "a".into(),
            updated_at: None,
        };
        let fields = sample.to_fields();
        assert_eq!(fields.get("id"), Some(&json!("1")));
        assert_eq!(fields.get("name"), Some(&json!("a")));
    }

    #[test]
    fn test_merged_with_overwrites_only_patch_fields() {
        let sample = Sample {
            id: "1".into(),
            name: "a".into(),
            updated_at: None,
        };
        let mut patch = FieldMap::new();
        patch.insert("name".into(), json!("b"));

        let merged = sample.merged_with(&patch).unwrap();
        assert_eq!(merged.id, "1");
        assert_eq!(merged.name, "b");
    }

    #[test]
    fn test_merged_with_rejects_incompatible_patch() {
        let sample = Sample {
            id: "1".into(),
            name: "a".into(),
            updated_at: None,
        };
        let mut patch = FieldMap::new();
        patch.insert("updated_at".into(), json!("not-a-timestamp"));

        assert!(sample.merged_with(&patch).is_none());
    }
}
