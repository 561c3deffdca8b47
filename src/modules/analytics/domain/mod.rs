use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::catalog::AnimeSummary;

/// Time ranges offered by the studios dashboard.
pub const YEAR_CHOICES: [u32; 5] = [1, 3, 5, 10, 20];

/// Sort key for the studio analytics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudioSort {
    Workload,
    Count,
    Score,
    Members,
}

impl StudioSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudioSort::Workload => "workload",
            StudioSort::Count => "count",
            StudioSort::Score => "score",
            StudioSort::Members => "members",
        }
    }
}

/// Full payload of `/analytics/studios`, rendered verbatim; the workload
/// scoring itself is backend business logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioAnalyticsReport {
    #[serde(default)]
    pub studios: Vec<StudioStats>,
    #[serde(default)]
    pub summary: Option<AnalyticsSummary>,
    #[serde(default)]
    pub time_range: Option<TimeRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioStats {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub anime_count_recent: u32,
    #[serde(default)]
    pub anime_count_total: u32,
    #[serde(default)]
    pub avg_anime_per_year: f64,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub workload_score: f64,
    #[serde(default)]
    pub type_distribution: BTreeMap<String, u32>,
    #[serde(default)]
    pub yearly_output: Vec<YearlyOutput>,
    #[serde(default)]
    pub popularity_metrics: PopularityMetrics,
    #[serde(default)]
    pub anime_list: Vec<AnimeSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyOutput {
    pub year: i32,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularityMetrics {
    #[serde(default)]
    pub total_members: u64,
    #[serde(default)]
    pub total_favorites: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub avg_anime_per_studio: f64,
    #[serde(default)]
    pub top_studio_by_workload: String,
    #[serde(default)]
    pub top_studio_by_count: String,
    #[serde(default)]
    pub top_studio_by_score: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_year: i32,
    pub end_year: i32,
}

/// One row of `/analytics/genres`. Only the name is contractual; the
/// metric columns vary with the requested sort and are displayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreTrendRow {
    pub name: String,
    #[serde(flatten)]
    pub metrics: BTreeMap<String, Value>,
}

/// `/analytics/overview` payload. The dashboard renders whatever the
/// backend computed, so unknown columns ride along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketOverview {
    #[serde(default)]
    pub total_anime: u64,
    #[serde(default)]
    pub total_studios: u64,
    #[serde(default)]
    pub total_genres: u64,
    #[serde(default)]
    pub average_score: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// `/analytics/trending` payload for one year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingReport {
    #[serde(default)]
    pub year: i32,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn studio_stats_tolerates_missing_metrics() {
        let stats: StudioStats =
            serde_json::from_str(r#"{"id": 1, "name": "Kyoto Animation"}"#).unwrap();
        assert_eq!(stats.name, "Kyoto Animation");
        assert_eq!(stats.workload_score, 0.0);
        assert!(stats.yearly_output.is_empty());
    }

    #[test]
    fn overview_keeps_unknown_columns() {
        let overview: MarketOverview =
            serde_json::from_str(r#"{"total_anime": 12000, "busiest_season": "fall"}"#).unwrap();
        assert_eq!(overview.total_anime, 12000);
        assert_eq!(
            overview.extra.get("busiest_season").and_then(Value::as_str),
            Some("fall")
        );
    }
}
