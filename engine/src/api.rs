//! Module with [`MotionApi`] abstraction over the backend and its HTTP implementation.

use std::future::Future;

use moties_data_model::{
    Faction, FactionsResponse, Motion, MotionVotes, MotionsResponse, VoteFilter,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;

/// Error while talking to the backend.
///
/// Transport failures, non-success statuses and malformed bodies all end up in
/// [`Error::Request`].
#[derive(Debug, thiserror::Error, displaydoc::Display)]
pub enum Error {
    /// Base url `{0}` can't have path segments
    InvalidBaseUrl(Url),
    /// Request failed: {0}
    Request(#[from] reqwest::Error),
}

/// Result of backend requests.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Backend API with motions and factions.
///
/// Futures are not required to be [`Send`], because in the browser they run on a single thread.
pub trait MotionApi {
    /// Get all active factions.
    fn factions(&self) -> impl Future<Output = Result<Vec<Faction>>>;

    /// Get `limit` most recent motions.
    fn recent_motions(&self, limit: u32) -> impl Future<Output = Result<Vec<Motion>>>;

    /// Get motions satisfying `filter`, evaluated by the backend.
    fn filter_motions(&self, filter: &VoteFilter) -> impl Future<Output = Result<Vec<Motion>>>;

    /// Get per-faction votes of a single motion.
    fn motion_votes(&self, motion_id: &str) -> impl Future<Output = Result<MotionVotes>>;
}

/// Remote request producing the base motion collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotionQuery {
    /// Default collection of the newest motions.
    Recent {
        /// Maximum number of motions.
        limit: u32,
    },
    /// Motions filtered by faction votes on the backend.
    ByVotes(VoteFilter),
}

impl MotionQuery {
    /// Execute query using `api`.
    ///
    /// # Errors
    ///
    /// Any error from `api`.
    pub async fn run<A: MotionApi>(&self, api: &A) -> Result<Vec<Motion>> {
        match self {
            Self::Recent { limit } => api.recent_motions(*limit).await,
            Self::ByVotes(filter) => api.filter_motions(filter).await,
        }
    }
}

/// [`MotionApi`] implementation over HTTP.
///
/// Works both natively and in the browser.
#[derive(Debug, Clone)]
pub struct HttpMotionApi {
    /// HTTP client.
    client: Client,
    /// Url all endpoint paths are appended to, e.g. `https://example.org/api`.
    base_url: Url,
}

impl HttpMotionApi {
    /// Construct new [`HttpMotionApi`] with endpoints under `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Construct new [`HttpMotionApi`] from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Get base url.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build endpoint url by appending `segments` to the base url.
    ///
    /// Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send `GET` request to `url` and parse JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "Sending GET request");
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.json().await.map_err(Into::into)
    }
}

impl MotionApi for HttpMotionApi {
    #[instrument(skip(self))]
    async fn factions(&self) -> Result<Vec<Faction>> {
        let url = self.endpoint(&["fracties"])?;
        let response: FactionsResponse = self.get_json(url).await?;
        Ok(response.factions)
    }

    #[instrument(skip(self))]
    async fn recent_motions(&self, limit: u32) -> Result<Vec<Motion>> {
        let mut url = self.endpoint(&["moties"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        let response: MotionsResponse = self.get_json(url).await?;
        Ok(response.motions)
    }

    #[instrument(skip(self))]
    async fn filter_motions(&self, filter: &VoteFilter) -> Result<Vec<Motion>> {
        let url = self.endpoint(&["moties", "filter"])?;
        debug!(%url, "Sending POST request");
        let response: MotionsResponse = self
            .client
            .post(url)
            .json(filter)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.motions)
    }

    #[instrument(skip(self))]
    async fn motion_votes(&self, motion_id: &str) -> Result<MotionVotes> {
        let url = self.endpoint(&["moties", motion_id, "stemmingen"])?;
        self.get_json(url).await
    }
}
