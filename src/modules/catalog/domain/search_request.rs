use serde::{Deserialize, Serialize};

/// Sort key accepted by the search endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Score,
    Members,
    Year,
    Title,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Score => "score",
            SortBy::Members => "members",
            SortBy::Year => "year",
            SortBy::Title => "title",
        }
    }

    /// Parse a URL parameter; anything unrecognized falls back to default.
    pub fn from_param(value: &str) -> Self {
        match value {
            "members" => SortBy::Members,
            "year" => SortBy::Year,
            "title" => SortBy::Title,
            _ => SortBy::Score,
        }
    }

    /// Human label used by the active-filter tag.
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Score => "Score",
            SortBy::Members => "Popularity",
            SortBy::Year => "Year",
            SortBy::Title => "Title",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value {
            "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Query parameters of one `/search` request, serialized field-for-field.
///
/// Optional fields are omitted from the query string entirely; `sort_by`
/// and `order` are always sent, even at their defaults. Score bounds stay
/// raw strings: the request layer forwards what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<String>,
    pub sort_by: SortBy,
    pub order: SortOrder,
    pub limit: u32,
    pub offset: u32,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            q: None,
            genres: None,
            types: None,
            years: None,
            min_score: None,
            max_score: None,
            sort_by: SortBy::default(),
            order: SortOrder::default(),
            limit: 24,
            offset: 0,
        }
    }
}
