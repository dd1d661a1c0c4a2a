//! Module with client [`Config`].

use url::Url;

/// Default number of motions in the default collection.
pub const DEFAULT_RECENT_LIMIT: u32 = 20;

/// Client configuration shared by all front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Url the backend endpoints live under, e.g. `https://example.org/api`.
    pub api_base_url: Url,
    /// Number of motions requested when no faction is selected.
    pub recent_limit: u32,
}

impl Config {
    /// Construct new [`Config`] with [`DEFAULT_RECENT_LIMIT`].
    #[must_use]
    pub fn new(api_base_url: Url) -> Self {
        Self {
            api_base_url,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    /// Override number of motions requested when no faction is selected.
    #[must_use]
    pub fn with_recent_limit(mut self, recent_limit: u32) -> Self {
        self.recent_limit = recent_limit;
        self
    }

    /// Construct [`Config`] for a page served from `origin` with the backend under `/api`.
    ///
    /// # Errors
    ///
    /// Fails if `origin` is not a valid url.
    pub fn for_origin(origin: &str) -> Result<Self, url::ParseError> {
        Url::parse(origin)?.join("/api").map(Self::new)
    }
}
