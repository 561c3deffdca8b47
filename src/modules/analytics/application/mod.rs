pub mod overview_view;
pub mod studios_view;

pub use overview_view::OverviewView;
pub use studios_view::StudiosView;
