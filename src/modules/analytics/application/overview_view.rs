use std::sync::Arc;

use chrono::Datelike;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::modules::analytics::domain::{GenreTrendRow, MarketOverview, TrendingReport};
use crate::modules::catalog::domain::search_request::SortOrder;
use crate::modules::catalog::traits::CatalogApi;
use crate::shared::application::remote::RemoteData;

const OVERVIEW_ERROR: &str = "Failed to load analytics overview.";
const TRENDING_ERROR: &str = "Failed to load trending analysis.";
const GENRE_TRENDS_ERROR: &str = "Failed to load genre analysis.";

const GENRE_TRENDS_SORT: &str = "potential";

/// Market overview dashboard: catalog-wide totals next to the trending
/// breakdown of one year and the ranked genre trends table. The panels
/// load together but fail independently.
pub struct OverviewView {
    api: Arc<dyn CatalogApi>,
    cancel: CancellationToken,
    year: i32,
    overview: RemoteData<MarketOverview>,
    trending: RemoteData<TrendingReport>,
    genre_trends: RemoteData<Vec<GenreTrendRow>>,
}

impl OverviewView {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            cancel: CancellationToken::new(),
            year: chrono::Utc::now().year(),
            overview: RemoteData::Idle,
            trending: RemoteData::Idle,
            genre_trends: RemoteData::Idle,
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    pub async fn set_year(&mut self, year: i32) {
        if year == self.year {
            return;
        }
        self.year = year;
        self.load_trending().await;
    }

    pub async fn retry(&mut self) {
        self.refresh().await;
    }

    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn overview(&self) -> &RemoteData<MarketOverview> {
        &self.overview
    }

    pub fn trending(&self) -> &RemoteData<TrendingReport> {
        &self.trending
    }

    pub fn genre_trends(&self) -> &RemoteData<Vec<GenreTrendRow>> {
        &self.genre_trends
    }

    async fn refresh(&mut self) {
        self.overview = RemoteData::Loading;
        self.trending = RemoteData::Loading;
        self.genre_trends = RemoteData::Loading;

        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();
        let year = self.year;
        let (overview, trending, genre_trends) = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = async {
                tokio::join!(
                    api.analytics_overview(),
                    api.trending_analysis(year),
                    api.genre_analytics(GENRE_TRENDS_SORT, SortOrder::Desc),
                )
            } => outcome,
        };

        if let Err(e) = &overview {
            warn!(error = %e, "overview fetch failed");
        }
        if let Err(e) = &trending {
            warn!(error = %e, year, "trending fetch failed");
        }
        if let Err(e) = &genre_trends {
            warn!(error = %e, "genre trends fetch failed");
        }
        self.overview.resolve(overview, OVERVIEW_ERROR);
        self.trending.resolve(trending, TRENDING_ERROR);
        self.genre_trends.resolve(genre_trends, GENRE_TRENDS_ERROR);
    }

    async fn load_trending(&mut self) {
        self.trending = RemoteData::Loading;

        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();
        let year = self.year;
        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = api.trending_analysis(year) => outcome,
        };
        self.trending.resolve(outcome, TRENDING_ERROR);
    }
}
