use std::sync::Arc;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::modules::catalog::domain::entities::AnimeDetail;
use crate::modules::catalog::traits::CatalogApi;
use crate::modules::detail::domain::{RelatedEntry, RelatedGroup};
use crate::modules::detail::infrastructure::jikan::{JikanRelationEntry, RelationsApi};
use crate::shared::application::remote::{FetchSequence, RemoteData};
use crate::shared::errors::{AppError, AppResult};

const NOT_FOUND_ERROR: &str = "Anime not found";
const DETAIL_ERROR: &str = "Failed to load anime details";
const RELATED_ERROR: &str = "Failed to load related works. Please try again later.";

/// State behind one anime detail page.
///
/// The detail record loads first; related works follow only when the
/// title carries a MAL id. A failure in the related-works lookup leaves
/// the detail intact and only marks that panel as failed.
pub struct DetailView {
    api: Arc<dyn CatalogApi>,
    relations_api: Arc<dyn RelationsApi>,
    cancel: CancellationToken,
    sequence: FetchSequence,
    anime_id: Option<i64>,
    detail: RemoteData<AnimeDetail>,
    related: RemoteData<Vec<RelatedGroup>>,
}

impl DetailView {
    pub fn new(api: Arc<dyn CatalogApi>, relations_api: Arc<dyn RelationsApi>) -> Self {
        Self {
            api,
            relations_api,
            cancel: CancellationToken::new(),
            sequence: FetchSequence::default(),
            anime_id: None,
            detail: RemoteData::Idle,
            related: RemoteData::Idle,
        }
    }

    /// Load the page for one title. Navigating to another id reuses the
    /// view; a response from the earlier id is discarded.
    pub async fn load(&mut self, id: i64) {
        self.anime_id = Some(id);
        self.detail = RemoteData::Loading;
        self.related = RemoteData::Idle;
        let ticket = self.sequence.issue();

        let api = Arc::clone(&self.api);
        let cancel = self.cancel.clone();
        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = api.get_anime(id) => outcome,
        };
        if !self.sequence.is_current(ticket) {
            return;
        }

        let detail = match outcome {
            Ok(detail) => detail,
            Err(AppError::NotFound(_)) => {
                self.detail = RemoteData::Error(NOT_FOUND_ERROR.to_string());
                return;
            }
            Err(e) => {
                warn!(error = %e, id, "detail fetch failed");
                self.detail = RemoteData::Error(DETAIL_ERROR.to_string());
                return;
            }
        };

        let mal_id = detail.mal_id;
        self.detail = RemoteData::Success(detail);
        if let Some(mal_id) = mal_id {
            self.load_related(mal_id).await;
        }
    }

    pub async fn retry(&mut self) {
        if let Some(id) = self.anime_id {
            self.load(id).await;
        }
    }

    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn detail(&self) -> &RemoteData<AnimeDetail> {
        &self.detail
    }

    pub fn related(&self) -> &RemoteData<Vec<RelatedGroup>> {
        &self.related
    }

    async fn load_related(&mut self, mal_id: i64) {
        self.related = RemoteData::Loading;
        let ticket = self.sequence.issue();

        let api = Arc::clone(&self.api);
        let relations_api = Arc::clone(&self.relations_api);
        let cancel = self.cancel.clone();
        let outcome = tokio::select! {
            biased;

            _ = cancel.cancelled() => return,
            outcome = Self::fetch_related(api, relations_api, mal_id) => outcome,
        };
        if !self.sequence.is_current(ticket) {
            return;
        }

        match outcome {
            Ok(groups) => self.related = RemoteData::Success(groups),
            Err(e) => {
                warn!(error = %e, mal_id, "related works fetch failed");
                self.related = RemoteData::Error(RELATED_ERROR.to_string());
            }
        }
    }

    /// Resolve relation groups against our own catalog. Entries we hold
    /// become full cards; lookups that miss or fail become external
    /// stubs. Non-anime entries and empty groups are dropped.
    async fn fetch_related(
        api: Arc<dyn CatalogApi>,
        relations_api: Arc<dyn RelationsApi>,
        mal_id: i64,
    ) -> AppResult<Vec<RelatedGroup>> {
        let groups = relations_api.anime_relations(mal_id).await?;

        let mut related = Vec::new();
        for group in groups {
            let anime_entries: Vec<JikanRelationEntry> = group
                .entry
                .into_iter()
                .filter(|entry| entry.entry_type == "anime")
                .collect();
            if anime_entries.is_empty() {
                continue;
            }

            let lookups = anime_entries
                .iter()
                .map(|entry| api.get_anime_by_mal_id(entry.mal_id));
            let results = join_all(lookups).await;

            let entries = anime_entries
                .into_iter()
                .zip(results)
                .map(|(entry, result)| match result {
                    Ok(Some(detail)) => RelatedEntry::InDatabase(detail.summary()),
                    Ok(None) | Err(_) => RelatedEntry::External {
                        mal_id: entry.mal_id,
                        title: entry.name,
                        mal_url: entry.url,
                    },
                })
                .collect();

            related.push(RelatedGroup {
                relation: group.relation,
                entries,
            });
        }

        Ok(related)
    }
}
