pub mod application;
pub mod domain;

pub use application::{OverviewView, StudiosView};
pub use domain::{
    AnalyticsSummary, GenreTrendRow, MarketOverview, StudioAnalyticsReport, StudioSort,
    StudioStats, TimeRange, TrendingReport, YEAR_CHOICES,
};
