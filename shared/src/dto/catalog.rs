//! Read-only lookup lists: events, categories/campaigns and donor search hits.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Donation drive / collection location
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    #[serde(default, deserialize_with = "crate::de::id")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::de::string")]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl Event {
    /// Label used in pickers: `name (location)`
    pub fn label(&self) -> String {
        match self.location.as_deref().filter(|l| !l.is_empty()) {
            Some(location) => format!("{} ({})", self.name, location),
            None => self.name.clone(),
        }
    }
}

/// Sub-category under a category type, or a campaign.
///
/// Campaign rows arrive as `campaignId`/`campaignName`, every other type as
/// `id`/`categoryName`; both collapse into this shape.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCategory {
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    id: Option<String>,
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    campaign_id: Option<String>,
    #[serde(default)]
    category_name: Option<String>,
    #[serde(default)]
    campaign_name: Option<String>,
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawCategory::deserialize(deserializer)?;
        Ok(Category {
            id: raw.campaign_id.or(raw.id).unwrap_or_default(),
            name: raw
                .category_name
                .or(raw.campaign_name)
                .unwrap_or_default(),
        })
    }
}

/// Existing donor returned by `GET /api/pos/search-donatur`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DonorMatch {
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub id: Option<String>,
    #[serde(default, rename = "nama")]
    pub name: Option<String>,
    #[serde(default, rename = "noHp", alias = "phoneNumber")]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "alamat")]
    pub address: Option<String>,
}

/// Decode a list endpoint that answers with a bare array; anything else is empty.
pub fn list_from_array<T: for<'de> Deserialize<'de>>(body: Value) -> Vec<T> {
    match body {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Decode a list endpoint that answers with `{ content: [...] }` or a bare array.
pub fn list_from_content<T: for<'de> Deserialize<'de>>(body: Value) -> Vec<T> {
    match body {
        Value::Object(mut map) => map.remove("content").map(list_from_array).unwrap_or_default(),
        other => list_from_array(other),
    }
}
