// Shared kernel: cross-page primitives and the ambient stack.

pub mod application; // Fetch lifecycle, pagination, selection models
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod utils; // Shared utilities

pub use config::AppConfig;
pub use errors::{AppError, AppResult};
