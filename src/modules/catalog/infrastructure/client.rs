use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::modules::analytics::domain::{
    GenreTrendRow, MarketOverview, StudioAnalyticsReport, StudioSort, TrendingReport,
};
use crate::modules::recommendations::domain::RecommendationSet;
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

use super::dto::{BucketEnvelope, DataEnvelope, ListEnvelope, RecommendationEnvelope};
use crate::modules::catalog::domain::entities::{
    AnimeDetail, AnimePage, AnimeSummary, CuratedCategory, GenreOption, NamedRef, StudioOption,
};
use crate::modules::catalog::domain::search_request::{SearchRequest, SortOrder};
use crate::modules::catalog::traits::CatalogApi;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("aniscope/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the catalog backend. Cheap to clone; holds no state
/// beyond the connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ApiError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let request = self.client.get(format!("{}{}", self.base_url, path));
        Self::execute(path, request).await
    }

    async fn get_json_with<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized + Sync,
    {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query);
        Self::execute(path, request).await
    }

    async fn execute<T: DeserializeOwned>(
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> AppResult<T> {
        debug!(path, "catalog request");
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Resource not found: {}", path)));
        }
        if !status.is_success() {
            return Err(AppError::ApiError(format!(
                "Backend returned HTTP {} for {}",
                status.as_u16(),
                path
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response from {}: {}", path, e)))
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list_anime(&self, limit: u32, offset: u32) -> AppResult<AnimePage> {
        let envelope: ListEnvelope = self
            .get_json_with("/anime", &[("limit", limit), ("offset", offset)])
            .await?;
        Ok(envelope.into_page())
    }

    async fn search_anime(&self, request: &SearchRequest) -> AppResult<AnimePage> {
        let envelope: ListEnvelope = self.get_json_with("/search", request).await?;
        Ok(envelope.into_page())
    }

    async fn get_anime(&self, id: i64) -> AppResult<AnimeDetail> {
        self.get_json(&format!("/anime/{}", id)).await
    }

    async fn get_anime_by_mal_id(&self, mal_id: i64) -> AppResult<Option<AnimeDetail>> {
        match self.get_json(&format!("/anime/mal/{}", mal_id)).await {
            Ok(detail) => Ok(Some(detail)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn latest_anime(&self, limit: u32) -> AppResult<Vec<AnimeSummary>> {
        let envelope: DataEnvelope<Vec<AnimeSummary>> = self
            .get_json_with("/anime/latest", &[("limit", limit)])
            .await?;
        envelope.into_data()
    }

    async fn random_anime(&self) -> AppResult<AnimeSummary> {
        let envelope: DataEnvelope<AnimeSummary> = self.get_json("/anime/random").await?;
        envelope.into_data()
    }

    async fn list_genres(&self) -> AppResult<Vec<NamedRef>> {
        let envelope: DataEnvelope<Vec<NamedRef>> = self.get_json("/genres").await?;
        envelope.into_data()
    }

    async fn recommendations_for(&self, id: i64, limit: u32) -> AppResult<RecommendationSet> {
        let envelope: RecommendationEnvelope = self
            .get_json_with(&format!("/anime/{}/recommendations", id), &[("limit", limit)])
            .await?;
        envelope.into_set()
    }

    async fn curated(
        &self,
        category: CuratedCategory,
        limit: u32,
        offset: u32,
    ) -> AppResult<AnimePage> {
        let envelope: BucketEnvelope = self
            .get_json_with(
                &format!("/recommendations/{}", category.path_segment()),
                &[("limit", limit), ("offset", offset)],
            )
            .await?;
        envelope.into_page(limit, offset)
    }

    async fn by_genre(&self, name: &str, limit: u32, offset: u32) -> AppResult<AnimePage> {
        let envelope: BucketEnvelope = self
            .get_json_with(
                &format!("/recommendations/genre/{}", urlencoding::encode(name)),
                &[("limit", limit), ("offset", offset)],
            )
            .await?;
        envelope.into_page(limit, offset)
    }

    async fn by_studio(&self, name: &str, limit: u32, offset: u32) -> AppResult<AnimePage> {
        let envelope: BucketEnvelope = self
            .get_json_with(
                &format!("/recommendations/studio/{}", urlencoding::encode(name)),
                &[("limit", limit), ("offset", offset)],
            )
            .await?;
        envelope.into_page(limit, offset)
    }

    async fn genre_options(&self, limit: Option<u32>) -> AppResult<Vec<GenreOption>> {
        let envelope: DataEnvelope<Vec<GenreOption>> = match limit {
            Some(limit) => {
                self.get_json_with("/recommendations/genres/list", &[("limit", limit)])
                    .await?
            }
            None => self.get_json("/recommendations/genres/list").await?,
        };
        envelope.into_data()
    }

    async fn studio_options(&self, limit: Option<u32>) -> AppResult<Vec<StudioOption>> {
        let envelope: DataEnvelope<Vec<StudioOption>> = match limit {
            Some(limit) => {
                self.get_json_with("/recommendations/studios/list", &[("limit", limit)])
                    .await?
            }
            None => self.get_json("/recommendations/studios/list").await?,
        };
        envelope.into_data()
    }

    async fn studio_analytics(
        &self,
        years: u32,
        sort_by: StudioSort,
        limit: u32,
    ) -> AppResult<StudioAnalyticsReport> {
        let envelope: DataEnvelope<StudioAnalyticsReport> = self
            .get_json_with(
                "/analytics/studios",
                &[
                    ("years", years.to_string()),
                    ("sort_by", sort_by.as_str().to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        envelope.into_data()
    }

    async fn genre_analytics(
        &self,
        sort_by: &str,
        order: SortOrder,
    ) -> AppResult<Vec<GenreTrendRow>> {
        let envelope: DataEnvelope<Vec<GenreTrendRow>> = self
            .get_json_with(
                "/analytics/genres",
                &[("sort_by", sort_by), ("order", order.as_str())],
            )
            .await?;
        envelope.into_data()
    }

    async fn analytics_overview(&self) -> AppResult<MarketOverview> {
        let envelope: DataEnvelope<MarketOverview> = self.get_json("/analytics/overview").await?;
        envelope.into_data()
    }

    async fn trending_analysis(&self, year: i32) -> AppResult<TrendingReport> {
        let envelope: DataEnvelope<TrendingReport> = self
            .get_json_with("/analytics/trending", &[("year", year)])
            .await?;
        envelope.into_data()
    }
}
