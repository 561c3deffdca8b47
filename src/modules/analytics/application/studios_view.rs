use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::modules::analytics::domain::{StudioAnalyticsReport, StudioSort, YEAR_CHOICES};
use crate::modules::catalog::traits::CatalogApi;
use crate::shared::application::remote::{FetchSequence, RemoteData};

const STUDIO_LIMIT: u32 = 10;
const DEFAULT_YEARS: u32 = 5;

const LOAD_ERROR: &str = "Failed to load studios data. Please make sure the backend is running.";

/// State behind the studio analytics dashboard. Changing the time range
/// or the sort refetches the whole report.
pub struct StudiosView {
    api: Arc<dyn CatalogApi>,
    cancel: CancellationToken,
    sequence: FetchSequence,
    years: u32,
    sort_by: StudioSort,
    report: RemoteData<StudioAnalyticsReport>,
}

impl StudiosView {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            cancel: CancellationToken::new(),
            sequence: FetchSequence::default(),
            years: DEFAULT_YEARS,
            sort_by: StudioSort::Workload,
            report: RemoteData::Idle,
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Switch the time range. Values outside the offered choices are
    /// ignored.
    pub async fn set_years(&mut self, years: u32) {
        if !YEAR_CHOICES.contains(&years) || years == self.years {
            return;
        }
        self.years = years;
        self.refresh().await;
    }

    pub async fn set_sort(&mut self, sort_by: StudioSort) {
        if sort_by == self.sort_by {
            return;
        }
        self.sort_by = sort_by;
        self.refresh().await;
    }

    pub async fn retry(&mut self) {
        self.refresh().await;
    }

    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn sort_by(&self) -> StudioSort {
        self.sort_by
    }

    pub fn report(&self) -> &RemoteData<StudioAnalyticsReport> {
        &self.report
    }

    async fn refresh(&mut self) {
        self.report = RemoteData::Loading;
        let ticket = self.sequence.issue();

        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();
        let years = self.years;
        let sort_by = self.sort_by;
        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = api.studio_analytics(years, sort_by, STUDIO_LIMIT) => outcome,
        };
        if !self.sequence.is_current(ticket) {
            return;
        }

        if let Err(e) = &outcome {
            warn!(error = %e, years, "studio analytics fetch failed");
        }
        self.report.resolve(outcome, LOAD_ERROR);
    }
}
