pub mod discover_view;

pub use discover_view::DiscoverView;
