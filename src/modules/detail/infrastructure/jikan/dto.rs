//! Payload shapes of the Jikan v4 relations endpoint.
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct JikanRelationsResponse {
    #[serde(default)]
    pub data: Vec<JikanRelationGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanRelationGroup {
    pub relation: String,
    #[serde(default)]
    pub entry: Vec<JikanRelationEntry>,
}

/// One related entry. `entry_type` distinguishes anime from manga and
/// the rest; only anime entries are shown.
#[derive(Debug, Clone, Deserialize)]
pub struct JikanRelationEntry {
    pub mal_id: i64,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
}
