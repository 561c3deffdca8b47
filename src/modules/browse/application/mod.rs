pub mod browse_view;

pub use browse_view::{BrowseView, FetchPlan, BROWSE_PAGE_SIZE};
