pub mod application;
pub mod domain;

pub use application::HomeView;
pub use domain::{year_options, FEATURED_COUNT, TYPE_OPTIONS};
