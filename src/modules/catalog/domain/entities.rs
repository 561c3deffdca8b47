use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Image shown whenever a record carries no usable `image_url`.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/225x318?text=No+Image";

/// One anime as returned by list/search/recommendation endpoints.
///
/// Every field except `id` is optional on the wire; the accessors below are
/// the single place display fallbacks live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeSummary {
    pub id: i64,
    #[serde(default)]
    pub mal_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub episodes: Option<i32>,
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AnimeSummary {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.title_english.as_deref())
            .unwrap_or("Unknown Title")
    }

    pub fn display_score(&self) -> String {
        match self.score {
            Some(score) => format!("{}", score),
            None => "N/A".to_string(),
        }
    }

    pub fn display_year(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => "Unknown".to_string(),
        }
    }

    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    /// The English title is shown as a subtitle only when it adds something.
    pub fn english_subtitle(&self) -> Option<&str> {
        match (&self.title, &self.title_english) {
            (Some(title), Some(english)) if title != english => Some(english),
            (None, Some(english)) => Some(english),
            _ => None,
        }
    }
}

/// Genre or studio reference as embedded in detail payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

/// Full record for the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeDetail {
    pub id: i64,
    #[serde(default)]
    pub mal_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub episodes: Option<i32>,
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub rank: Option<i32>,
    #[serde(default)]
    pub popularity: Option<i32>,
    #[serde(default)]
    pub members: Option<i64>,
    #[serde(default)]
    pub favorites: Option<i64>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub aired_from: Option<NaiveDateTime>,
    #[serde(default)]
    pub aired_to: Option<NaiveDateTime>,
    #[serde(default)]
    pub demographic: Option<String>,
    #[serde(default)]
    pub genres: Vec<NamedRef>,
    #[serde(default)]
    pub studios: Vec<NamedRef>,
}

impl AnimeDetail {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.title_english.as_deref())
            .unwrap_or("Unknown Title")
    }

    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    pub fn summary(&self) -> AnimeSummary {
        AnimeSummary {
            id: self.id,
            mal_id: self.mal_id,
            title: self.title.clone(),
            title_english: self.title_english.clone(),
            kind: self.kind.clone(),
            episodes: self.episodes,
            score: self.score,
            year: self.year,
            image_url: self.image_url.clone(),
        }
    }
}

/// One page of a paged anime listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimePage {
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
    pub items: Vec<AnimeSummary>,
}

/// Server-defined recommendation bucket requiring no user-supplied filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CuratedCategory {
    Popular,
    TopRated,
    HiddenGems,
    Latest,
    Trending,
}

impl CuratedCategory {
    pub fn path_segment(&self) -> &'static str {
        match self {
            CuratedCategory::Popular => "popular",
            CuratedCategory::TopRated => "top-rated",
            CuratedCategory::HiddenGems => "hidden-gems",
            CuratedCategory::Latest => "latest",
            CuratedCategory::Trending => "trending",
        }
    }
}

/// Entry of the filterable genre list used by the discover page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreOption {
    pub id: i64,
    pub name: String,
}

/// Entry of the filterable studio list used by the discover page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioOption {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub anime_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(id: i64) -> AnimeSummary {
        AnimeSummary {
            id,
            mal_id: None,
            title: None,
            title_english: None,
            kind: None,
            episodes: None,
            score: None,
            year: None,
            image_url: None,
        }
    }

    #[test]
    fn missing_fields_get_documented_fallbacks() {
        let anime = bare(1);
        assert_eq!(anime.display_title(), "Unknown Title");
        assert_eq!(anime.display_score(), "N/A");
        assert_eq!(anime.display_year(), "Unknown");
        assert_eq!(anime.image_or_placeholder(), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn english_subtitle_hidden_when_redundant() {
        let mut anime = bare(1);
        anime.title = Some("Monster".into());
        anime.title_english = Some("Monster".into());
        assert_eq!(anime.english_subtitle(), None);

        anime.title_english = Some("The Monster".into());
        assert_eq!(anime.english_subtitle(), Some("The Monster"));
    }

    #[test]
    fn summary_deserializes_with_sparse_payload() {
        let anime: AnimeSummary = serde_json::from_str(r#"{"id": 42, "title": "K-On!"}"#).unwrap();
        assert_eq!(anime.id, 42);
        assert_eq!(anime.display_title(), "K-On!");
        assert_eq!(anime.score, None);
    }

    #[test]
    fn curated_path_segments_match_backend_routes() {
        assert_eq!(CuratedCategory::TopRated.path_segment(), "top-rated");
        assert_eq!(CuratedCategory::HiddenGems.path_segment(), "hidden-gems");
    }
}
