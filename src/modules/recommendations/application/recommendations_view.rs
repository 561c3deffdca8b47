use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::modules::catalog::domain::entities::AnimeSummary;
use crate::modules::catalog::domain::search_request::SearchRequest;
use crate::modules::catalog::traits::CatalogApi;
use crate::modules::recommendations::domain::RecommendationSet;
use crate::shared::application::remote::{FetchSequence, RemoteData};

const SEARCH_LIMIT: u32 = 10;
const RECOMMENDATION_LIMIT: u32 = 10;

const SEARCH_ERROR: &str = "Failed to search anime. Please try again.";
const EMPTY_ERROR: &str = "No recommendations found. Please try another anime.";
const GENERATE_ERROR: &str = "Failed to get recommendations. Please try again.";

/// Two-step recommendations flow: search for a title, pick one, then
/// generate similar titles for it.
pub struct RecommendationsView {
    api: Arc<dyn CatalogApi>,
    cancel: CancellationToken,
    sequence: FetchSequence,
    pub query: String,
    search_results: RemoteData<Vec<AnimeSummary>>,
    selected: Option<AnimeSummary>,
    recommendations: RemoteData<RecommendationSet>,
}

impl RecommendationsView {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            cancel: CancellationToken::new(),
            sequence: FetchSequence::default(),
            query: String::new(),
            search_results: RemoteData::Idle,
            selected: None,
            recommendations: RemoteData::Idle,
        }
    }

    /// Run the title search. A blank query is a no-op.
    pub async fn search(&mut self) {
        if self.query.trim().is_empty() {
            return;
        }
        self.search_results = RemoteData::Loading;
        let ticket = self.sequence.issue();

        let request = SearchRequest {
            q: Some(self.query.trim().to_string()),
            limit: SEARCH_LIMIT,
            ..Default::default()
        };
        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();
        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = api.search_anime(&request) => outcome,
        };
        if !self.sequence.is_current(ticket) {
            return;
        }

        match outcome {
            Ok(page) => self.search_results = RemoteData::Success(page.items),
            Err(e) => {
                warn!(error = %e, "recommendation search failed");
                self.search_results = RemoteData::Error(SEARCH_ERROR.to_string());
            }
        }
    }

    /// Pick a title from the search results. Clears the query and the
    /// result list and generates recommendations for the pick.
    pub async fn select(&mut self, anime: AnimeSummary) {
        self.selected = Some(anime);
        self.query.clear();
        self.search_results = RemoteData::Idle;
        self.generate().await;
    }

    /// Generate recommendations for the selected title. An empty result
    /// set is surfaced as an error so the page can prompt for another
    /// pick.
    pub async fn generate(&mut self) {
        let id = match &self.selected {
            Some(anime) => anime.id,
            None => return,
        };
        self.recommendations = RemoteData::Loading;
        let ticket = self.sequence.issue();

        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();
        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = api.recommendations_for(id, RECOMMENDATION_LIMIT) => outcome,
        };
        if !self.sequence.is_current(ticket) {
            return;
        }

        match outcome {
            Ok(set) if set.recommendations.is_empty() => {
                self.recommendations = RemoteData::Error(EMPTY_ERROR.to_string());
            }
            Ok(set) => self.recommendations = RemoteData::Success(set),
            Err(e) => {
                warn!(error = %e, id, "recommendation generation failed");
                self.recommendations = RemoteData::Error(GENERATE_ERROR.to_string());
            }
        }
    }

    /// Back to step one.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.recommendations = RemoteData::Idle;
        self.search_results = RemoteData::Idle;
        self.query.clear();
    }

    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn search_results(&self) -> &RemoteData<Vec<AnimeSummary>> {
        &self.search_results
    }

    pub fn selected(&self) -> Option<&AnimeSummary> {
        self.selected.as_ref()
    }

    pub fn recommendations(&self) -> &RemoteData<RecommendationSet> {
        &self.recommendations
    }
}
