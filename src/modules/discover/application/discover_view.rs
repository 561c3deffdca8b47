use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::modules::catalog::domain::entities::{
    AnimePage, AnimeSummary, CuratedCategory, GenreOption, StudioOption,
};
use crate::modules::catalog::traits::CatalogApi;
use crate::modules::discover::domain::{
    DiscoverSelection, MainCategory, SubCategory, DISCOVER_PAGE_SIZE,
};
use crate::shared::application::pagination::{PageSelector, PageWindow};
use crate::shared::application::remote::{FetchSequence, FetchTicket, RemoteData};
use crate::shared::errors::AppResult;

const LOAD_ERROR: &str = "Failed to load recommendations.";

/// State machine behind the discover page.
///
/// Category switches reset to the first page. The dropdown tabs load
/// their option lists lazily and auto-select the first option; until an
/// option is selected nothing is fetched and the grid sits idle.
pub struct DiscoverView {
    api: Arc<dyn CatalogApi>,
    cancel: CancellationToken,
    sequence: FetchSequence,
    main: MainCategory,
    sub: Option<SubCategory>,
    selected_genre: Option<String>,
    selected_studio: Option<String>,
    genre_options: RemoteData<Vec<GenreOption>>,
    studio_options: RemoteData<Vec<StudioOption>>,
    page: PageWindow,
    results: RemoteData<Vec<AnimeSummary>>,
}

impl DiscoverView {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            cancel: CancellationToken::new(),
            sequence: FetchSequence::default(),
            main: MainCategory::Popular,
            sub: None,
            selected_genre: None,
            selected_studio: None,
            genre_options: RemoteData::Idle,
            studio_options: RemoteData::Idle,
            page: PageWindow::new(DISCOVER_PAGE_SIZE),
            results: RemoteData::Idle,
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Switch the top-level tab. Multi tabs auto-select their first
    /// subcategory; dropdown tabs load their option list on first visit.
    pub async fn set_main(&mut self, category: MainCategory) {
        self.main = category;
        self.sub = category.subcategories().first().copied();
        self.page.reset();

        match category {
            MainCategory::Genre => self.load_genre_options().await,
            MainCategory::Studio => self.load_studio_options().await,
            _ => {}
        }
        self.refresh().await;
    }

    /// Pick a subcategory of the active tab. Ignored when it does not
    /// belong to the current tab.
    pub async fn set_sub(&mut self, sub: SubCategory) {
        if !self.main.subcategories().contains(&sub) {
            return;
        }
        self.sub = Some(sub);
        self.page.reset();
        self.refresh().await;
    }

    pub async fn set_genre(&mut self, name: impl Into<String>) {
        self.selected_genre = Some(name.into());
        self.page.reset();
        self.refresh().await;
    }

    pub async fn set_studio(&mut self, name: impl Into<String>) {
        self.selected_studio = Some(name.into());
        self.page.reset();
        self.refresh().await;
    }

    /// Jump to a 1-based page; true means the caller should scroll up.
    pub async fn go_to_page(&mut self, page: u32) -> bool {
        if !self.page.go_to_page(page) {
            return false;
        }
        self.refresh().await;
        true
    }

    pub async fn retry(&mut self) {
        self.refresh().await;
    }

    pub fn close(&self) {
        self.cancel.cancel();
    }

    /// What the grid resolves to right now, if anything.
    pub fn selection(&self) -> Option<DiscoverSelection> {
        match self.main {
            MainCategory::Popular => Some(DiscoverSelection::Curated(CuratedCategory::Popular)),
            MainCategory::Quality | MainCategory::Recency => self
                .sub
                .map(|sub| DiscoverSelection::Curated(sub.curated())),
            MainCategory::Genre => self.selected_genre.clone().map(DiscoverSelection::ByGenre),
            MainCategory::Studio => self.selected_studio.clone().map(DiscoverSelection::ByStudio),
        }
    }

    /// Header shown above the grid.
    pub fn heading(&self) -> String {
        match (self.main, self.sub, &self.selected_genre, &self.selected_studio) {
            (MainCategory::Quality | MainCategory::Recency, Some(sub), _, _) => {
                format!("{} - {}", self.main.label(), sub.label())
            }
            (MainCategory::Genre, _, Some(genre), _) => format!("{} Anime", genre),
            (MainCategory::Studio, _, _, Some(studio)) => studio.clone(),
            _ => self.main.label().to_string(),
        }
    }

    pub fn main_category(&self) -> MainCategory {
        self.main
    }

    pub fn sub_category(&self) -> Option<SubCategory> {
        self.sub
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

    pub fn genre_options(&self) -> &RemoteData<Vec<GenreOption>> {
        &self.genre_options
    }

    pub fn studio_options(&self) -> &RemoteData<Vec<StudioOption>> {
        &self.studio_options
    }

    /// Start a fetch for the current selection. With nothing selected the
    /// grid is parked at `Idle` and no ticket is issued.
    pub fn begin_fetch(&mut self) -> Option<(FetchTicket, DiscoverSelection)> {
        let selection = match self.selection() {
            Some(selection) => selection,
            None => {
                self.results = RemoteData::Idle;
                return None;
            }
        };
        self.results = RemoteData::Loading;
        Some((self.sequence.issue(), selection))
    }

    /// Fold a fetch outcome into view state, dropping superseded tickets.
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
                warn!(error = %e, "discover fetch failed");
                self.results = RemoteData::Error(LOAD_ERROR.to_string());
            }
        }
    }

    async fn refresh(&mut self) {
        let (ticket, selection) = match self.begin_fetch() {
            Some(started) => started,
            None => return,
        };
        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();
        let limit = self.page.limit();
        let offset = self.page.offset();

        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = Self::run_selection(api, selection, limit, offset) => outcome,
        };
        self.apply_fetch(ticket, outcome);
    }

    async fn run_selection(
        api: Arc<dyn CatalogApi>,
        selection: DiscoverSelection,
        limit: u32,
        offset: u32,
    ) -> AppResult<AnimePage> {
        match selection {
            DiscoverSelection::Curated(category) => api.curated(category, limit, offset).await,
            DiscoverSelection::ByGenre(name) => api.by_genre(&name, limit, offset).await,
            DiscoverSelection::ByStudio(name) => api.by_studio(&name, limit, offset).await,
        }
    }

    async fn load_genre_options(&mut self) {
        if self.genre_options.as_success().is_some() {
            return;
        }
        self.genre_options = RemoteData::Loading;
        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();

        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = api.genre_options(None) => outcome,
        };
        if let Ok(options) = &outcome {
            if self.selected_genre.is_none() {
                self.selected_genre = options.first().map(|o| o.name.clone());
            }
        }
        self.genre_options.resolve(outcome, LOAD_ERROR);
    }

    async fn load_studio_options(&mut self) {
        if self.studio_options.as_success().is_some() {
            return;
        }
        self.studio_options = RemoteData::Loading;
        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();

        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = api.studio_options(None) => outcome,
        };
        if let Ok(options) = &outcome {
            if self.selected_studio.is_none() {
                self.selected_studio = options.first().map(|o| o.name.clone());
            }
        }
        self.studio_options.resolve(outcome, LOAD_ERROR);
    }
}
