use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::RateLimiter;

use super::dto::{JikanRelationGroup, JikanRelationsResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("aniscope/", env!("CARGO_PKG_VERSION"));

// Jikan allows 3 requests per second; going over gets us 429s.
const JIKAN_REQUESTS_PER_SECOND: f64 = 3.0;

/// External relations lookups, kept behind a trait so the detail view
/// can be driven without hitting the network.
#[async_trait]
pub trait RelationsApi: Send + Sync {
    async fn anime_relations(&self, mal_id: i64) -> AppResult<Vec<JikanRelationGroup>>;
}

/// Client for the public Jikan API, rate limited to stay under their
/// request ceiling.
#[derive(Debug, Clone)]
pub struct JikanClient {
    client: Client,
    base_url: String,
    limiter: RateLimiter,
}

impl JikanClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::ApiError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.jikan_base_url.trim_end_matches('/').to_string(),
            limiter: RateLimiter::new(JIKAN_REQUESTS_PER_SECOND),
        })
    }
}

#[async_trait]
impl RelationsApi for JikanClient {
    async fn anime_relations(&self, mal_id: i64) -> AppResult<Vec<JikanRelationGroup>> {
        self.limiter.wait().await;

        let path = format!("/anime/{}/relations", mal_id);
        debug!(path, "jikan request");
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "No relations found for MAL id {}",
                mal_id
            )));
        }
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Jikan returned HTTP {} for {}",
                status.as_u16(),
                path
            )));
        }

        let payload: JikanRelationsResponse = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to parse Jikan response: {}", e))
        })?;
        Ok(payload.data)
    }
}
