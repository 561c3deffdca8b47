pub mod client;
pub mod dto;

pub use client::{JikanClient, RelationsApi};
pub use dto::{JikanRelationEntry, JikanRelationGroup, JikanRelationsResponse};
