//! Module with [`MotionView`]: the state container behind the motion list.
//!
//! Fetching is split into [`MotionView::begin_fetch()`] and [`MotionView::complete_fetch()`],
//! so that the view never has to be borrowed across an `await`. This is what reactive
//! front-ends need: they start a fetch, spawn the request and apply the result later.
//!
//! Every fetch gets a sequence number. Only the response to the most recently *issued*
//! fetch is applied, older responses are dropped as stale even if they arrive last.

use moties_data_model::{Faction, Motion, MotionVotes};
use tracing::{debug, error, info, instrument};

use crate::{
    api::{self, MotionApi, MotionQuery},
    search::filter_motions,
    selection::{FilterState, VoteKind},
};

/// What the motion list currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A fetch is in flight.
    Loading,
    /// There are motions to display.
    Idle,
    /// Nothing to display with the current filters.
    Empty,
}

/// Result of [`MotionView::complete_fetch()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Held motions were replaced.
    Applied,
    /// Request failed, previous motions are kept.
    Failed,
    /// A newer fetch was started meanwhile, response was ignored.
    Stale,
}

/// Proof of a started fetch.
///
/// Must be handed back to [`MotionView::complete_fetch()`] together with the response.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "fetch must be completed to clear the loading flag"]
pub struct FetchTicket {
    /// Sequence number of the fetch.
    seq: u64,
    /// Query to execute.
    query: MotionQuery,
}

impl FetchTicket {
    /// Get query to execute.
    pub const fn query(&self) -> &MotionQuery {
        &self.query
    }
}

/// State container with fetched data, user filters and the derived display list.
#[derive(Debug, Clone)]
pub struct MotionView {
    /// Active factions.
    factions: Vec<Faction>,
    /// Base motion collection as returned by the latest applied fetch.
    motions: Vec<Motion>,
    /// Vote selections and search term.
    filters: FilterState,
    /// Size of the default collection.
    recent_limit: u32,
    /// Sequence number of the latest started fetch.
    last_issued: u64,
    /// Whether the latest started fetch is still in flight.
    loading: bool,
}

impl MotionView {
    /// Construct new empty [`MotionView`] with `recent_limit` as the size of the default collection.
    #[must_use]
    pub fn new(recent_limit: u32) -> Self {
        Self {
            factions: Vec::new(),
            motions: Vec::new(),
            filters: FilterState::default(),
            recent_limit,
            last_issued: 0,
            loading: false,
        }
    }

    /// Get active factions.
    #[must_use]
    pub fn factions(&self) -> &[Faction] {
        &self.factions
    }

    /// Get the whole held motion collection, without the search filter.
    #[must_use]
    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    /// Get current filters.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Get size of the default collection.
    #[must_use]
    pub const fn recent_limit(&self) -> u32 {
        self.recent_limit
    }

    /// Toggle `faction` selection for `kind`.
    ///
    /// Doesn't fetch anything, call [`begin_fetch()`](Self::begin_fetch) to apply.
    pub fn toggle(&mut self, faction: &str, kind: VoteKind) {
        self.filters.toggle(faction, kind);
    }

    /// Replace search term. Takes effect on [`displayed()`](Self::displayed) immediately.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filters.set_search_term(term);
    }

    /// Check if a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Get motions to display: held motions narrowed by the search term.
    pub fn displayed(&self) -> impl Iterator<Item = &Motion> {
        filter_motions(&self.motions, self.filters.search_term())
    }

    /// Get current [`Status`].
    #[must_use]
    pub fn status(&self) -> Status {
        if self.loading {
            Status::Loading
        } else if self.displayed().next().is_none() {
            Status::Empty
        } else {
            Status::Idle
        }
    }

    /// Start a fetch for the current vote selections.
    ///
    /// Without selections the default collection is requested.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        let query = self.filters.to_query(self.recent_limit);
        self.last_issued = self.last_issued.wrapping_add(1);
        self.loading = true;
        debug!(seq = self.last_issued, ?query, "Fetch started");
        FetchTicket {
            seq: self.last_issued,
            query,
        }
    }

    /// Drop search term and selections and start a fetch for the default collection.
    pub fn clear_filters(&mut self) -> FetchTicket {
        self.filters.clear();
        self.begin_fetch()
    }

    /// Complete a fetch started with [`begin_fetch()`](Self::begin_fetch).
    ///
    /// On success the held collection is replaced wholesale. On failure it is kept and the error is logged.
    /// Either way the loading flag is cleared, unless `ticket` is stale.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: api::Result<Vec<Motion>>,
    ) -> FetchOutcome {
        if ticket.seq != self.last_issued {
            debug!(
                seq = ticket.seq,
                latest = self.last_issued,
                "Ignoring response of a stale fetch"
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(motions) => {
                info!(count = motions.len(), query = ?ticket.query, "Motions fetched");
                self.motions = motions;
                FetchOutcome::Applied
            }
            Err(error) => {
                error!(%error, query = ?ticket.query, "Failed to fetch motions");
                FetchOutcome::Failed
            }
        }
    }

    /// Replace factions with `result` or log the error, keeping the previous ones.
    pub fn load_factions(&mut self, result: api::Result<Vec<Faction>>) {
        match result {
            Ok(factions) => {
                info!(count = factions.len(), "Factions fetched");
                self.factions = factions;
            }
            Err(error) => error!(%error, "Failed to fetch factions"),
        }
    }

    /// Store fetched per-faction votes in the held motion with `motion_id`.
    ///
    /// Returns `true` if the motion was found and updated.
    pub fn attach_votes(&mut self, motion_id: &str, result: api::Result<MotionVotes>) -> bool {
        let votes = match result {
            Ok(votes) => votes,
            Err(error) => {
                error!(%error, motion_id, "Failed to fetch motion votes");
                return false;
            }
        };

        let Some(motion) = self.motions.iter_mut().find(|motion| motion.id == motion_id) else {
            debug!(motion_id, "Votes fetched for a motion which is no longer held");
            return false;
        };
        motion.votes = Some(votes.into_outcomes());
        true
    }

    /// Fetch for the current selections using `api` and apply the result.
    ///
    /// Convenience for callers which can hold the view across an `await`.
    #[instrument(skip_all)]
    pub async fn refresh<A: MotionApi>(&mut self, api: &A) -> FetchOutcome {
        let ticket = self.begin_fetch();
        let result = ticket.query().run(api).await;
        self.complete_fetch(ticket, result)
    }

    /// Fetch factions and the default collection using `api`.
    #[instrument(skip_all)]
    pub async fn initialize<A: MotionApi>(&mut self, api: &A) -> FetchOutcome {
        let factions = api.factions().await;
        self.load_factions(factions);
        self.refresh(api).await
    }

    /// Fetch votes of the motion with `motion_id` using `api` and attach them.
    #[instrument(skip(self, api))]
    pub async fn fetch_votes<A: MotionApi>(&mut self, api: &A, motion_id: &str) -> bool {
        let result = api.motion_votes(motion_id).await;
        self.attach_votes(motion_id, result)
    }
}

impl Default for MotionView {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RECENT_LIMIT)
    }
}
