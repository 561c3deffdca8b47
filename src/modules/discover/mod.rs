pub mod application;
pub mod domain;

pub use application::DiscoverView;
pub use domain::{
    DiscoverSelection, MainCategory, SubCategory, DISCOVER_PAGE_SIZE,
};
