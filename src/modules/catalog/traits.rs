use async_trait::async_trait;

use crate::modules::analytics::domain::{
    GenreTrendRow, MarketOverview, StudioAnalyticsReport, StudioSort, TrendingReport,
};
use crate::modules::recommendations::domain::RecommendationSet;
use crate::shared::errors::AppResult;

use super::domain::entities::{
    AnimeDetail, AnimePage, AnimeSummary, CuratedCategory, GenreOption, NamedRef, StudioOption,
};
use super::domain::search_request::{SearchRequest, SortOrder};

/// Everything the backend exposes to this front end, one method per
/// capability. All calls are GET, stateless, uncached and unretried;
/// failures surface as `Err` for the call site to fold into view state.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_anime(&self, limit: u32, offset: u32) -> AppResult<AnimePage>;

    async fn search_anime(&self, request: &SearchRequest) -> AppResult<AnimePage>;

    async fn get_anime(&self, id: i64) -> AppResult<AnimeDetail>;

    /// Lookup by the external MAL id. A miss is a normal outcome here:
    /// related works fall back to an external stub card.
    async fn get_anime_by_mal_id(&self, mal_id: i64) -> AppResult<Option<AnimeDetail>>;

    async fn latest_anime(&self, limit: u32) -> AppResult<Vec<AnimeSummary>>;

    async fn random_anime(&self) -> AppResult<AnimeSummary>;

    async fn list_genres(&self) -> AppResult<Vec<NamedRef>>;

    async fn recommendations_for(&self, id: i64, limit: u32) -> AppResult<RecommendationSet>;

    async fn curated(
        &self,
        category: CuratedCategory,
        limit: u32,
        offset: u32,
    ) -> AppResult<AnimePage>;

    async fn by_genre(&self, name: &str, limit: u32, offset: u32) -> AppResult<AnimePage>;

    async fn by_studio(&self, name: &str, limit: u32, offset: u32) -> AppResult<AnimePage>;

    async fn genre_options(&self, limit: Option<u32>) -> AppResult<Vec<GenreOption>>;

    async fn studio_options(&self, limit: Option<u32>) -> AppResult<Vec<StudioOption>>;

    async fn studio_analytics(
        &self,
        years: u32,
        sort_by: StudioSort,
        limit: u32,
    ) -> AppResult<StudioAnalyticsReport>;

    async fn genre_analytics(&self, sort_by: &str, order: SortOrder)
        -> AppResult<Vec<GenreTrendRow>>;

    async fn analytics_overview(&self) -> AppResult<MarketOverview>;

    async fn trending_analysis(&self, year: i32) -> AppResult<TrendingReport>;
}
