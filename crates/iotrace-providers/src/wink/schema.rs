use serde::{Deserialize, Serialize};

/// JSON document stored in the `json` column of an `activity` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub object: ActivityObject,
    pub action: ActivityAction,
    /// Raw epoch; the app writes it as a number or a numeric string
    /// depending on version
    #[serde(deserialize_with = "epoch_number_or_string")]
    pub created_at: i64,
}

/// Device the activity happened on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityObject {
    pub object_name: String,
    pub object_type: String,
}

/// What the device reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAction {
    pub reading: String,
}

fn epoch_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
