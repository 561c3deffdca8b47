use serde::{Deserialize, Serialize};

use crate::modules::catalog::{AnimeSummary, NamedRef};

/// Per-dimension similarity breakdown computed by the backend.
/// Values are 0.0..=1.0 and are displayed as percentages, never recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    #[serde(default)]
    pub genre: f64,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub demographic: f64,
    #[serde(default)]
    pub studio: f64,
    #[serde(default)]
    pub year: f64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub members: f64,
    #[serde(default)]
    pub favorites: f64,
}

impl MatchDetails {
    pub fn percent(value: f64) -> u32 {
        (value * 100.0).round() as u32
    }
}

/// One recommended title with its precomputed similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub anime: AnimeSummary,
    #[serde(default)]
    pub genres: Vec<NamedRef>,
    pub similarity_score: f64,
    #[serde(default)]
    pub match_details: MatchDetails,
}

impl Recommendation {
    /// Headline match percentage, rounded the way the page shows it.
    pub fn match_percent(&self) -> u32 {
        MatchDetails::percent(self.similarity_score)
    }
}

/// Response of `/anime/{id}/recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    #[serde(default)]
    pub target_anime: Option<AnimeSummary>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}
