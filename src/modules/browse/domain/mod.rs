pub mod filter_state;

pub use filter_state::{FilterField, FilterState, FilterTag, ValidationPolicy};
