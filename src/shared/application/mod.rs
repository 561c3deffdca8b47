/// Shared application layer patterns
///
/// Application-level abstractions used across multiple pages.
pub mod pagination;
pub mod remote;
pub mod selection;

pub use pagination::*;
pub use remote::{FetchSequence, FetchTicket, RemoteData};
pub use selection::MultiSelect;
