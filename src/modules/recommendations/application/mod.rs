pub mod recommendations_view;

pub use recommendations_view::RecommendationsView;
