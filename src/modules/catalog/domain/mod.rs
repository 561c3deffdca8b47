pub mod entities;
pub mod search_request;

pub use entities::{
    AnimeDetail, AnimePage, AnimeSummary, CuratedCategory, GenreOption, NamedRef, StudioOption,
    PLACEHOLDER_IMAGE_URL,
};
pub use search_request::{SearchRequest, SortBy, SortOrder};
