pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::DetailView;
pub use domain::{RelatedEntry, RelatedGroup};
pub use infrastructure::{JikanClient, RelationsApi};
