pub mod application;
pub mod domain;

pub use application::{BrowseView, FetchPlan, BROWSE_PAGE_SIZE};
pub use domain::{FilterField, FilterState, FilterTag, ValidationPolicy};
