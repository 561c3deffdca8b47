pub mod application;
pub mod domain;

pub use application::RecommendationsView;
pub use domain::{MatchDetails, Recommendation, RecommendationSet};
