//! Module with [`FilterState`]: faction vote selections together with the search term.

use moties_data_model::{FactionName, VoteFilter};

use crate::api::MotionQuery;

/// Which vote a selected faction must have cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteKind {
    /// Faction must have voted for the motion ("voor").
    For,
    /// Faction must have voted against the motion ("tegen").
    Against,
}

/// User selected filters.
///
/// Both selections keep insertion order and never contain duplicates.
/// The same faction may be selected for both kinds at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Factions which must have voted for.
    voted_for: Vec<FactionName>,
    /// Factions which must have voted against.
    voted_against: Vec<FactionName>,
    /// Free-text search term. Empty means no text filter.
    search_term: String,
}

impl FilterState {
    /// Add `faction` to the `kind` selection or remove it if it is already there.
    ///
    /// The other selection is never touched.
    pub fn toggle(&mut self, faction: &str, kind: VoteKind) {
        let selection = self.selection_mut(kind);
        if let Some(position) = selection.iter().position(|selected| selected == faction) {
            selection.remove(position);
        } else {
            selection.push(faction.to_owned());
        }
    }

    /// Check if `faction` is selected for `kind`.
    #[must_use]
    pub fn is_selected(&self, faction: &str, kind: VoteKind) -> bool {
        self.selected(kind).iter().any(|selected| selected == faction)
    }

    /// Get factions selected for `kind` in selection order.
    #[must_use]
    pub fn selected(&self, kind: VoteKind) -> &[FactionName] {
        match kind {
            VoteKind::For => &self.voted_for,
            VoteKind::Against => &self.voted_against,
        }
    }

    /// Check if any faction is selected for any kind.
    #[must_use]
    pub fn has_vote_selection(&self) -> bool {
        !self.voted_for.is_empty() || !self.voted_against.is_empty()
    }

    /// Get current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replace search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Empty both selections and the search term.
    pub fn clear(&mut self) {
        self.voted_for.clear();
        self.voted_against.clear();
        self.search_term.clear();
    }

    /// Build the remote query for the current selections.
    ///
    /// Without any selected faction this is the default query for the `recent_limit` newest motions.
    #[must_use]
    pub fn to_query(&self, recent_limit: u32) -> MotionQuery {
        if self.has_vote_selection() {
            MotionQuery::ByVotes(VoteFilter {
                voted_for: self.voted_for.clone(),
                voted_against: self.voted_against.clone(),
            })
        } else {
            MotionQuery::Recent {
                limit: recent_limit,
            }
        }
    }

    /// Get mutable selection for `kind`.
    const fn selection_mut(&mut self, kind: VoteKind) -> &mut Vec<FactionName> {
        match kind {
            VoteKind::For => &mut self.voted_for,
            VoteKind::Against => &mut self.voted_against,
        }
    }
}
