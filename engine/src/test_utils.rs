//! Test utilities.

#![allow(clippy::unwrap_used)]

use std::{
    cell::RefCell,
    collections::VecDeque,
};

use moties_data_model::{Faction, Motion, MotionVotes, Submitter, VoteFilter, VoteOutcome};

use crate::api::{self, MotionApi};

/// Create a motion with `id` and `title`.
pub fn motion(id: &str, title: &str) -> Motion {
    Motion {
        id: id.to_owned(),
        title: Some(title.to_owned()),
        ..Motion::default()
    }
}

/// Create a submitter.
pub fn submitter(name: &str, faction: &str) -> Submitter {
    Submitter {
        name: Some(name.to_owned()),
        faction: Some(faction.to_owned()),
    }
}

/// Attach `votes` to `motion`.
pub fn with_votes(mut motion: Motion, votes: &[(&str, VoteOutcome)]) -> Motion {
    motion.votes = Some(
        votes
            .iter()
            .map(|(faction, outcome)| ((*faction).to_owned(), outcome.clone()))
            .collect(),
    );
    motion
}

/// Create a faction with full `name` and `abbreviation`.
pub fn faction(name: &str, abbreviation: &str) -> Faction {
    Faction {
        id: abbreviation.to_lowercase(),
        name: name.to_owned(),
        abbreviation: abbreviation.to_owned(),
        seats: 1,
    }
}

/// Error which [`ScriptedApi`] returns for failing calls.
///
/// Produced by a real request to an unroutable url, because [`reqwest::Error`] can't be constructed directly.
pub async fn request_error() -> api::Error {
    reqwest::Client::new()
        .get("http://127.0.0.1:0/")
        .send()
        .await
        .unwrap_err()
        .into()
}

/// Call recorded by [`ScriptedApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Factions,
    Recent(u32),
    Filter(VoteFilter),
    Votes(String),
}

/// [`MotionApi`] replaying scripted responses in order and recording every call.
///
/// `None` in a script means the call fails.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    /// Responses for motion requests, regardless of query kind.
    pub motions: RefCell<VecDeque<Option<Vec<Motion>>>>,
    /// Responses for faction requests.
    pub factions: RefCell<VecDeque<Option<Vec<Faction>>>>,
    /// Responses for vote requests.
    pub votes: RefCell<VecDeque<Option<MotionVotes>>>,
    /// Recorded calls.
    pub calls: RefCell<Vec<Call>>,
}

impl ScriptedApi {
    /// Script next motion response.
    pub fn then_motions(self, motions: Vec<Motion>) -> Self {
        self.motions.borrow_mut().push_back(Some(motions));
        self
    }

    /// Script next motion request to fail.
    pub fn then_motions_fail(self) -> Self {
        self.motions.borrow_mut().push_back(None);
        self
    }

    /// Script next faction response.
    pub fn then_factions(self, factions: Option<Vec<Faction>>) -> Self {
        self.factions.borrow_mut().push_back(factions);
        self
    }

    /// Script next votes response.
    pub fn then_votes(self, votes: Option<MotionVotes>) -> Self {
        self.votes.borrow_mut().push_back(votes);
        self
    }

    /// Get recorded calls.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Pop next scripted response or fail.
    async fn next<T>(script: &RefCell<VecDeque<Option<T>>>) -> api::Result<T> {
        let next = script
            .borrow_mut()
            .pop_front()
            .expect("Unexpected call to scripted api");
        match next {
            Some(value) => Ok(value),
            None => Err(request_error().await),
        }
    }
}

impl MotionApi for ScriptedApi {
    async fn factions(&self) -> api::Result<Vec<Faction>> {
        self.calls.borrow_mut().push(Call::Factions);
        Self::next(&self.factions).await
    }

    async fn recent_motions(&self, limit: u32) -> api::Result<Vec<Motion>> {
        self.calls.borrow_mut().push(Call::Recent(limit));
        Self::next(&self.motions).await
    }

    async fn filter_motions(&self, filter: &VoteFilter) -> api::Result<Vec<Motion>> {
        self.calls.borrow_mut().push(Call::Filter(filter.clone()));
        Self::next(&self.motions).await
    }

    async fn motion_votes(&self, motion_id: &str) -> api::Result<MotionVotes> {
        self.calls.borrow_mut().push(Call::Votes(motion_id.to_owned()));
        Self::next(&self.votes).await
    }
}
