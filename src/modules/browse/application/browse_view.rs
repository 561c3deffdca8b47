use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::modules::browse::domain::filter_state::{
    FilterField, FilterState, FilterTag, ValidationPolicy,
};
use crate::modules::catalog::domain::entities::{AnimePage, AnimeSummary};
use crate::modules::catalog::domain::search_request::SearchRequest;
use crate::modules::catalog::traits::CatalogApi;
use crate::shared::application::pagination::{PageSelector, PageWindow};
use crate::shared::application::remote::{FetchSequence, FetchTicket, RemoteData};
use crate::shared::errors::AppResult;

pub const BROWSE_PAGE_SIZE: u32 = 24;

const LOAD_ERROR: &str = "Failed to load anime. Please try again.";

/// What the next fetch will ask the backend for. An unfiltered view walks
/// the plain listing; any active filter switches to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    ListAll { limit: u32, offset: u32 },
    Search(SearchRequest),
}

/// State machine behind the browse page.
///
/// `filters` is the staged form the user edits; `applied` is the copy the
/// current results reflect. They only converge on submit, so typing in
/// the form never disturbs the result grid. Every result-changing action
/// issues a fetch ticket, and responses carrying a superseded ticket are
/// dropped on the floor.
pub struct BrowseView {
    api: Arc<dyn CatalogApi>,
    cancel: CancellationToken,
    sequence: FetchSequence,
    policy: ValidationPolicy,
    pub filters: FilterState,
    applied: FilterState,
    page: PageWindow,
    results: RemoteData<Vec<AnimeSummary>>,
}

impl BrowseView {
    pub fn new(api: Arc<dyn CatalogApi>, policy: ValidationPolicy) -> Self {
        Self {
            api,
            cancel: CancellationToken::new(),
            sequence: FetchSequence::default(),
            policy,
            filters: FilterState::default(),
            applied: FilterState::default(),
            page: PageWindow::new(BROWSE_PAGE_SIZE),
            results: RemoteData::Idle,
        }
    }

    /// Hydrate from the URL query string and load the first page.
    pub async fn mount(&mut self, query: &str) {
        let (state, page) = FilterState::hydrate(query);
        self.filters = state.clone();
        self.applied = state;
        self.page.set_page_unchecked(page);
        self.refresh().await;
    }

    /// Apply the staged form. Resets to the first page and returns the
    /// query string the URL bar should show.
    pub async fn submit(&mut self) -> AppResult<String> {
        self.filters.validate(self.policy)?;
        self.applied = self.filters.clone();
        self.page.reset();
        self.refresh().await;
        Ok(self.query_string())
    }

    /// Remove one filter tag. Takes effect immediately, in both the form
    /// and the applied copy, and rewinds to the first page.
    pub async fn remove_filter(&mut self, field: FilterField) -> String {
        self.filters.clear_field(field);
        self.applied.clear_field(field);
        self.page.reset();
        self.refresh().await;
        self.query_string()
    }

    pub async fn clear_all(&mut self) -> String {
        self.filters.clear_all();
        self.applied.clear_all();
        self.page.reset();
        self.refresh().await;
        self.query_string()
    }

    /// Jump to a 1-based page. Returns true when the page actually
    /// changed, which is the caller's cue to scroll back to the top.
    pub async fn go_to_page(&mut self, page: u32) -> bool {
        if !self.page.go_to_page(page) {
            return false;
        }
        self.refresh().await;
        true
    }

    pub async fn next_page(&mut self) -> bool {
        if !self.page.next_page() {
            return false;
        }
        self.refresh().await;
        true
    }

    pub async fn prev_page(&mut self) -> bool {
        if !self.page.prev_page() {
            return false;
        }
        self.refresh().await;
        true
    }

    /// Re-run the last fetch after an error.
    pub async fn retry(&mut self) {
        self.refresh().await;
    }

    /// Cancel whatever is in flight. Called when the page is left.
    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn results(&self) -> &RemoteData<Vec<AnimeSummary>> {
        &self.results
    }

    pub fn page(&self) -> &PageWindow {
        &self.page
    }

    pub fn page_selector(&self) -> PageSelector {
        self.page.selector()
    }

    pub fn applied_filters(&self) -> &FilterState {
        &self.applied
    }

    pub fn active_tags(&self) -> Vec<FilterTag> {
        self.applied.active_tags()
    }

    /// The query string for the current applied state, with a `page`
    /// parameter once past the first page.
    pub fn query_string(&self) -> String {
        let mut query = self.applied.serialize();
        let page = self.page.current_page();
        if page > 1 {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&format!("page={}", page));
        }
        query
    }

    /// Start a fetch: flips to `Loading`, issues a fresh ticket and
    /// decides which endpoint serves the applied state.
    pub fn begin_fetch(&mut self) -> (FetchTicket, FetchPlan) {
        self.results = RemoteData::Loading;
        let ticket = self.sequence.issue();
        let plan = if self.applied.has_active_filters() {
            FetchPlan::Search(
                self.applied
                    .to_search_request(self.page.limit(), self.page.offset()),
            )
        } else {
            FetchPlan::ListAll {
                limit: self.page.limit(),
                offset: self.page.offset(),
            }
        };
        (ticket, plan)
    }

    /// Fold a fetch outcome into view state. Outcomes from a superseded
    /// ticket are discarded so a slow response never overwrites a newer
    /// one.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, outcome: AppResult<AnimePage>) {
        if !self.sequence.is_current(ticket) {
            return;
        }
        match outcome {
            Ok(page) => {
                self.page.set_total(page.total);
                self.results = RemoteData::Success(page.items);
            }
            Err(e) => {
                warn!(error = %e, "browse fetch failed");
                self.results = RemoteData::Error(LOAD_ERROR.to_string());
            }
        }
    }

    async fn refresh(&mut self) {
        let (ticket, plan) = self.begin_fetch();
        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();

        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = Self::run_plan(api, plan) => outcome,
        };
        self.apply_fetch(ticket, outcome);
    }

    async fn run_plan(api: Arc<dyn CatalogApi>, plan: FetchPlan) -> AppResult<AnimePage> {
        match plan {
            FetchPlan::ListAll { limit, offset } => api.list_anime(limit, offset).await,
            FetchPlan::Search(request) => api.search_anime(&request).await,
        }
    }
}
