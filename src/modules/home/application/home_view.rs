use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use chrono::Datelike;

use crate::modules::browse::domain::filter_state::{FilterField, FilterState};
use crate::modules::catalog::domain::entities::{AnimeSummary, NamedRef};
use crate::modules::catalog::traits::CatalogApi;
use crate::shared::application::remote::RemoteData;
use crate::shared::application::selection::MultiSelect;
use crate::shared::errors::AppResult;

use super::super::domain::{year_options, FEATURED_COUNT, TYPE_OPTIONS};

const FEATURED_ERROR: &str = "Failed to load the latest anime. Please try again.";
const GENRES_ERROR: &str = "Failed to load genres.";

/// State behind the landing page: the latest-anime carousel plus the
/// search bar with its collapsible advanced panel.
///
/// The dropdowns of the advanced panel are `MultiSelect` controls; their
/// selections are folded into `search` when the form is submitted.
pub struct HomeView {
    api: Arc<dyn CatalogApi>,
    cancel: CancellationToken,
    featured: RemoteData<Vec<AnimeSummary>>,
    genre_options: RemoteData<Vec<NamedRef>>,
    advanced_open: bool,
    picking_random: bool,
    pub search: FilterState,
    pub genre_picker: MultiSelect,
    pub type_picker: MultiSelect,
    pub year_picker: MultiSelect,
}

impl HomeView {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        let current_year = chrono::Utc::now().year();
        Self {
            api,
            cancel: CancellationToken::new(),
            featured: RemoteData::Idle,
            genre_options: RemoteData::Idle,
            advanced_open: false,
            picking_random: false,
            search: FilterState::default(),
            genre_picker: MultiSelect::default(),
            type_picker: MultiSelect::new(TYPE_OPTIONS),
            year_picker: MultiSelect::new(
                year_options(current_year).iter().map(i32::to_string),
            ),
        }
    }

    pub async fn mount(&mut self) {
        self.load_featured().await;
    }

    pub async fn retry_featured(&mut self) {
        self.load_featured().await;
    }

    /// Open or close the advanced panel. Genre options are fetched the
    /// first time the panel opens and kept afterwards.
    pub async fn toggle_advanced(&mut self) {
        self.advanced_open = !self.advanced_open;
        if self.advanced_open && self.genre_options.is_idle() {
            self.load_genres().await;
        }
    }

    /// Fetch one random title and hand back its id for navigation.
    /// Re-entrant calls while a pick is in flight are ignored.
    pub async fn random_pick(&mut self) -> AppResult<Option<i64>> {
        if self.picking_random {
            return Ok(None);
        }
        self.picking_random = true;

        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();
        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                self.picking_random = false;
                return Ok(None);
            }
            outcome = api.random_anime() => outcome,
        };

        self.picking_random = false;
        Ok(Some(outcome?.id))
    }

    /// Commit the search bar. Folds the dropdown selections into the
    /// filter form and returns the browse query string to navigate to,
    /// or `None` when neither a query nor a dropdown filter is set.
    /// Score bounds alone do not trigger a search.
    pub fn submit(&mut self) -> Option<String> {
        self.search.genres = self.genre_picker.selected().to_vec();
        self.search.types = self.type_picker.selected().to_vec();
        self.search.years = self.year_picker.selected().to_vec();

        let has_subject = !self.search.search_query.trim().is_empty()
            || !self.search.genres.is_empty()
            || !self.search.years.is_empty()
            || !self.search.types.is_empty();
        has_subject.then(|| self.search.serialize())
    }

    pub fn remove_filter(&mut self, field: FilterField) {
        self.search.clear_field(field);
        match field {
            FilterField::Genres => self.genre_picker.clear(),
            FilterField::Types => self.type_picker.clear(),
            FilterField::Years => self.year_picker.clear(),
            _ => {}
        }
    }

    pub fn clear_search(&mut self) {
        self.search.clear_all();
        self.genre_picker.clear();
        self.type_picker.clear();
        self.year_picker.clear();
    }

    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn featured(&self) -> &RemoteData<Vec<AnimeSummary>> {
        &self.featured
    }

    pub fn genre_options(&self) -> &RemoteData<Vec<NamedRef>> {
        &self.genre_options
    }

    pub fn advanced_open(&self) -> bool {
        self.advanced_open
    }

    pub fn picking_random(&self) -> bool {
        self.picking_random
    }

    async fn load_featured(&mut self) {
        self.featured = RemoteData::Loading;
        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();

        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = api.latest_anime(FEATURED_COUNT) => outcome,
        };
        if let Err(e) = &outcome {
            warn!(error = %e, "featured fetch failed");
        }
        self.featured.resolve(outcome, FEATURED_ERROR);
    }

    async fn load_genres(&mut self) {
        self.genre_options = RemoteData::Loading;
        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();

        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = api.list_genres() => outcome,
        };
        if let Ok(genres) = &outcome {
            self.genre_picker
                .set_options(genres.iter().map(|g| g.name.clone()));
        }
        self.genre_options.resolve(outcome, GENRES_ERROR);
    }
}
