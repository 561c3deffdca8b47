//! Wire envelopes for backend responses.
//!
//! This is the schema/validation boundary: unknown fields are ignored,
//! missing optional fields land on defaults, and a `success: false` flag
//! is turned into an error before anything reaches view state.
use serde::Deserialize;

use crate::modules::catalog::domain::entities::{AnimePage, AnimeSummary};
use crate::modules::recommendations::domain::{Recommendation, RecommendationSet};
use crate::shared::errors::{AppError, AppResult};

/// `{ total, limit, offset, data }` envelope of `/anime` and `/search`.
/// `/search` also echoes `query`; it is intentionally dropped here.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub data: Vec<AnimeSummary>,
}

impl ListEnvelope {
    pub fn into_page(self) -> AnimePage {
        AnimePage {
            total: self.total,
            limit: self.limit,
            offset: self.offset,
            items: self.data,
        }
    }
}

/// `{ success?, data }` envelope used by latest/random/options endpoints.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn into_data(self) -> AppResult<T> {
        match self.success {
            Some(false) => Err(AppError::ApiError(
                "Backend reported an unsuccessful response".to_string(),
            )),
            _ => Ok(self.data),
        }
    }
}

/// `{ success?, total, data }` envelope of the recommendation buckets.
#[derive(Debug, Deserialize)]
pub struct BucketEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub data: Vec<AnimeSummary>,
}

impl BucketEnvelope {
    pub fn into_page(self, limit: u32, offset: u32) -> AppResult<AnimePage> {
        if self.success == Some(false) {
            return Err(AppError::ApiError(
                "Backend reported an unsuccessful response".to_string(),
            ));
        }
        Ok(AnimePage {
            total: self.total,
            limit,
            offset,
            items: self.data,
        })
    }
}

/// Envelope of `/anime/{id}/recommendations`.
#[derive(Debug, Deserialize)]
pub struct RecommendationEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub target_anime: Option<AnimeSummary>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationEnvelope {
    pub fn into_set(self) -> AppResult<RecommendationSet> {
        if self.success == Some(false) {
            return Err(AppError::ApiError(
                "Backend reported an unsuccessful response".to_string(),
            ));
        }
        Ok(RecommendationSet {
            target_anime: self.target_anime,
            recommendations: self.recommendations,
        })
    }
}
