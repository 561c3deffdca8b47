//! Client core of an anime catalog front end.
//!
//! Talks to the catalog backend (and the public Jikan API for related
//! works) and models each page of the UI as an explicit state machine:
//! every remote slot is `Idle -> Loading -> Success | Error`, stale
//! responses are discarded via fetch tickets, and in-flight work is
//! cancelled when a view is closed.
pub mod modules;
pub mod shared;

use std::sync::Arc;

use modules::analytics::application::{OverviewView, StudiosView};
use modules::browse::application::BrowseView;
use modules::browse::domain::ValidationPolicy;
use modules::catalog::infrastructure::CatalogClient;
use modules::catalog::traits::CatalogApi;
use modules::detail::application::DetailView;
use modules::detail::infrastructure::jikan::{JikanClient, RelationsApi};
use modules::discover::application::DiscoverView;
use modules::home::application::HomeView;
use modules::recommendations::application::RecommendationsView;

pub use shared::config::AppConfig;
pub use shared::errors::{AppError, AppResult};

/// Install the global tracing subscriber. Filter via `RUST_LOG`,
/// defaulting to `info`. Safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();
}

/// Application root: owns the HTTP clients and hands out per-page views
/// that share them.
pub struct Aniscope {
    config: AppConfig,
    catalog: Arc<CatalogClient>,
    jikan: Arc<JikanClient>,
    validation_policy: ValidationPolicy,
}

impl Aniscope {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let catalog = Arc::new(CatalogClient::new(&config)?);
        let jikan = Arc::new(JikanClient::new(&config)?);
        Ok(Self {
            config,
            catalog,
            jikan,
            validation_policy: ValidationPolicy::default(),
        })
    }

    /// Build from `ANISCOPE_*` environment variables, falling back to
    /// local defaults.
    pub fn from_env() -> AppResult<Self> {
        Self::new(AppConfig::from_env())
    }

    pub fn with_validation_policy(mut self, policy: ValidationPolicy) -> Self {
        self.validation_policy = policy;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn catalog_api(&self) -> Arc<dyn CatalogApi> {
        self.catalog.clone()
    }

    pub fn home(&self) -> HomeView {
        HomeView::new(self.catalog_api())
    }

    pub fn browse(&self) -> BrowseView {
        BrowseView::new(self.catalog_api(), self.validation_policy)
    }

    pub fn discover(&self) -> DiscoverView {
        DiscoverView::new(self.catalog_api())
    }

    pub fn detail(&self) -> DetailView {
        let relations: Arc<dyn RelationsApi> = self.jikan.clone();
        DetailView::new(self.catalog_api(), relations)
    }

    pub fn recommendations(&self) -> RecommendationsView {
        RecommendationsView::new(self.catalog_api())
    }

    pub fn studios(&self) -> StudiosView {
        StudiosView::new(self.catalog_api())
    }

    pub fn analytics_overview(&self) -> OverviewView {
        OverviewView::new(self.catalog_api())
    }
}
