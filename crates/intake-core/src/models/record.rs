use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A file record owned by the remote collection service.
///
/// Deserialization is lenient: missing fields become empty strings and unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(rename = "key")]
    pub storage_key: String,
    pub url: String,
    pub created_at: String,
}

/// Services disagree on whether ids are strings or integers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
