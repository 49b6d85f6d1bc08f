use thiserror::Error;

use crate::content::ReviewBackend;

/// Used when no API URL was provided at build time, i.e. local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3002";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown review backend `{0}` (expected `acf` or `star-rating`)")]
    UnknownReviewBackend(String),
}

/// Where the content API lives and which review payload shape it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    api_base_url: String,
    review_backend: ReviewBackend,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, ReviewBackend::default())
    }
}

impl ContentConfig {
    pub fn new(api_base_url: &str, review_backend: ReviewBackend) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
            review_backend,
        }
    }

    /// Reads `BRIGHTPATH_API_URL` and `BRIGHTPATH_REVIEW_BACKEND` as they were
    /// at compile time. The wasm bundle has no process environment, so the
    /// server and the browser must agree on values baked into the build.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("BRIGHTPATH_API_URL"),
            option_env!("BRIGHTPATH_REVIEW_BACKEND"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        review_backend: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        let review_backend = match review_backend.filter(|s| !s.trim().is_empty()) {
            Some(s) => s.parse().map_err(ConfigError::UnknownReviewBackend)?,
            None => ReviewBackend::default(),
        };
        Ok(Self::new(api_base_url, review_backend))
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn review_backend(&self) -> ReviewBackend {
        self.review_backend
    }
}
