pub mod domain;
pub mod infrastructure;
pub mod traits;

pub use domain::{
    AnimeDetail, AnimePage, AnimeSummary, CuratedCategory, GenreOption, NamedRef, SearchRequest,
    SortBy, SortOrder, StudioOption,
};
pub use infrastructure::CatalogClient;
pub use traits::CatalogApi;
