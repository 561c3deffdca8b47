use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Runtime configuration. The backend origin is the only cross-cutting
/// shared resource in the system; it is read once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the catalog backend, including the `/api` prefix.
    pub api_base_url: String,
    /// Base URL of the third-party Jikan API used for related works.
    pub jikan_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            jikan_base_url: DEFAULT_JIKAN_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from the environment, falling back to the defaults above.
    /// A `.env` file is honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("ANISCOPE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            jikan_base_url: env::var("ANISCOPE_JIKAN_URL")
                .unwrap_or_else(|_| DEFAULT_JIKAN_BASE_URL.to_string()),
        }
    }
}
