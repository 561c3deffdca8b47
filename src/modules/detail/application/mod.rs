pub mod detail_view;

pub use detail_view::DetailView;
