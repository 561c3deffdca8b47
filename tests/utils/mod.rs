#![allow(dead_code)]

use aniscope::modules::analytics::domain::{
    GenreTrendRow, MarketOverview, StudioAnalyticsReport, StudioSort, TrendingReport,
};
use aniscope::modules::catalog::domain::entities::{
    AnimeDetail, AnimePage, AnimeSummary, CuratedCategory, GenreOption, NamedRef, StudioOption,
};
use aniscope::modules::catalog::domain::search_request::{SearchRequest, SortOrder};
use aniscope::modules::catalog::traits::CatalogApi;
use aniscope::modules::detail::infrastructure::jikan::{JikanRelationGroup, RelationsApi};
use aniscope::modules::recommendations::domain::RecommendationSet;
use aniscope::shared::errors::AppResult;

mockall::mock! {
    pub Catalog {}

    #[async_trait::async_trait]
    impl CatalogApi for Catalog {
        async fn list_anime(&self, limit: u32, offset: u32) -> AppResult<AnimePage>;
        async fn search_anime(&self, request: &SearchRequest) -> AppResult<AnimePage>;
        async fn get_anime(&self, id: i64) -> AppResult<AnimeDetail>;
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
        async fn genre_analytics(
            &self,
            sort_by: &str,
            order: SortOrder,
        ) -> AppResult<Vec<GenreTrendRow>>;
        async fn analytics_overview(&self) -> AppResult<MarketOverview>;
        async fn trending_analysis(&self, year: i32) -> AppResult<TrendingReport>;
    }
}

mockall::mock! {
    pub Relations {}

    #[async_trait::async_trait]
    impl RelationsApi for Relations {
        async fn anime_relations(&self, mal_id: i64) -> AppResult<Vec<JikanRelationGroup>>;
    }
}

pub fn summary(id: i64, title: &str) -> AnimeSummary {
    AnimeSummary {
        id,
        mal_id: Some(id * 100),
        title: Some(title.to_string()),
        title_english: None,
        kind: Some("TV".to_string()),
        episodes: Some(12),
        score: Some(8.1),
        year: Some(2020),
        image_url: None,
    }
}

pub fn page(total: u32, limit: u32, offset: u32, count: usize) -> AnimePage {
    let items = (0..count)
        .map(|i| summary(offset as i64 + i as i64 + 1, &format!("Anime {}", i + 1)))
        .collect();
    AnimePage {
        total,
        limit,
        offset,
        items,
    }
}

pub fn detail(id: i64, mal_id: Option<i64>, title: &str) -> AnimeDetail {
    AnimeDetail {
        id,
        mal_id,
        title: Some(title.to_string()),
        title_english: None,
        kind: Some("TV".to_string()),
        episodes: Some(24),
        score: Some(8.5),
        rank: Some(120),
        popularity: Some(300),
        members: Some(500_000),
        favorites: Some(12_000),
        year: Some(2019),
        season: Some("spring".to_string()),
        image_url: None,
        synopsis: Some("A story.".to_string()),
        aired_from: None,
        aired_to: None,
        demographic: Some("Shounen".to_string()),
        genres: vec![NamedRef {
            id: 1,
            name: "Action".to_string(),
        }],
        studios: vec![NamedRef {
            id: 1,
            name: "Bones".to_string(),
        }],
    }
}
