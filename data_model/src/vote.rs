//! Module with vote related structures: outcomes, cabinet appreciation and vote filters.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{FactionName, Motion};

/// Vote outcome of a faction on a motion ("stemming").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VoteOutcome {
    /// `Voor`.
    For,
    /// `Tegen`.
    Against,
    /// Any other label, e.g. `Niet deelgenomen`. Raw label is kept for display.
    Other(String),
}

impl From<String> for VoteOutcome {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Voor" => Self::For,
            "Tegen" => Self::Against,
            _ => Self::Other(label),
        }
    }
}

impl From<VoteOutcome> for String {
    fn from(outcome: VoteOutcome) -> Self {
        match outcome {
            VoteOutcome::For => "Voor".to_owned(),
            VoteOutcome::Against => "Tegen".to_owned(),
            VoteOutcome::Other(label) => label,
        }
    }
}

impl fmt::Display for VoteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::For => f.write_str("Voor"),
            Self::Against => f.write_str("Tegen"),
            Self::Other(label) => f.write_str(label),
        }
    }
}

/// Official stance of the cabinet on a motion ("kabinetsappreciatie").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CabinetAppreciation {
    /// `Overgenomen`.
    Adopted,
    /// `Ontraden`.
    Discouraged,
    /// `Nog niet bekend`.
    NotYetKnown,
    /// Any other label, e.g. `Oordeel Kamer`.
    Other(String),
}

impl From<String> for CabinetAppreciation {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Overgenomen" => Self::Adopted,
            "Ontraden" => Self::Discouraged,
            "Nog niet bekend" => Self::NotYetKnown,
            _ => Self::Other(label),
        }
    }
}

impl From<CabinetAppreciation> for String {
    fn from(appreciation: CabinetAppreciation) -> Self {
        appreciation.to_string()
    }
}

impl fmt::Display for CabinetAppreciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adopted => f.write_str("Overgenomen"),
            Self::Discouraged => f.write_str("Ontraden"),
            Self::NotYetKnown => f.write_str("Nog niet bekend"),
            Self::Other(label) => f.write_str(label),
        }
    }
}

/// Body of `POST /moties/filter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoteFilter {
    /// Factions which must have voted for the motion.
    #[serde(rename = "voor_partijen", default)]
    pub voted_for: Vec<FactionName>,
    /// Factions which must have voted against the motion.
    #[serde(rename = "tegen_partijen", default)]
    pub voted_against: Vec<FactionName>,
}

impl VoteFilter {
    /// Check if filter has no constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voted_for.is_empty() && self.voted_against.is_empty()
    }

    /// Check if `motion` satisfies the filter the same way the backend does.
    ///
    /// Every faction in [`voted_for`](Self::voted_for) must have voted [`VoteOutcome::For`] and
    /// every faction in [`voted_against`](Self::voted_against) must have voted [`VoteOutcome::Against`].
    /// A faction without a recorded vote never satisfies a constraint.
    #[must_use]
    pub fn matches(&self, motion: &Motion) -> bool {
        let voted = |faction: &FactionName, expected: &VoteOutcome| {
            motion.vote_of(faction).is_some_and(|outcome| outcome == expected)
        };

        self.voted_for
            .iter()
            .all(|faction| voted(faction, &VoteOutcome::For))
            && self
                .voted_against
                .iter()
                .all(|faction| voted(faction, &VoteOutcome::Against))
    }
}

/// Vote of a single faction as returned by `GET /moties/{id}/stemmingen`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionVote {
    /// Faction name.
    #[serde(rename = "fractie", default)]
    pub faction: Option<FactionName>,
    /// Vote outcome.
    #[serde(rename = "stemming", default)]
    pub outcome: Option<VoteOutcome>,
    /// Size of the faction at the moment of voting.
    #[serde(rename = "grootte", default)]
    pub size: Option<u32>,
}

/// Response of `GET /moties/{id}/stemmingen`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionVotes {
    /// Identifier of the motion.
    #[serde(rename = "motie_id", default)]
    pub motion_id: String,
    /// Title of the motion.
    #[serde(rename = "motie_titel", default)]
    pub motion_title: Option<String>,
    /// One entry per faction.
    #[serde(rename = "stemmingen", default)]
    pub votes: Vec<FactionVote>,
}

impl MotionVotes {
    /// Convert into the faction to outcome mapping stored in [`Motion::votes`].
    ///
    /// Entries without a faction or an outcome are skipped.
    #[must_use]
    pub fn into_outcomes(self) -> BTreeMap<FactionName, VoteOutcome> {
        self.votes
            .into_iter()
            .filter_map(|vote| Some((vote.faction?, vote.outcome?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;

    fn motion_with_votes(votes: &[(&str, VoteOutcome)]) -> Motion {
        Motion {
            votes: Some(
                votes
                    .iter()
                    .map(|(faction, outcome)| ((*faction).to_owned(), outcome.clone()))
                    .collect(),
            ),
            ..Motion::default()
        }
    }

    fn filter(voted_for: &[&str], voted_against: &[&str]) -> VoteFilter {
        VoteFilter {
            voted_for: voted_for.iter().map(|&name| name.to_owned()).collect(),
            voted_against: voted_against.iter().map(|&name| name.to_owned()).collect(),
        }
    }

    #[test]
    fn unknown_vote_label_is_kept() {
        let outcome: VoteOutcome =
            serde_json::from_str(r#""Niet deelgenomen""#).expect("Failed to parse outcome");

        assert_eq!(outcome, VoteOutcome::Other("Niet deelgenomen".to_owned()));
        assert_eq!(outcome.to_string(), "Niet deelgenomen");
    }

    #[test]
    fn cabinet_appreciation_labels() {
        let parsed: Vec<CabinetAppreciation> = serde_json::from_str(
            r#"["Overgenomen", "Ontraden", "Nog niet bekend", "Oordeel Kamer"]"#,
        )
        .expect("Failed to parse appreciations");

        assert_eq!(
            parsed,
            vec![
                CabinetAppreciation::Adopted,
                CabinetAppreciation::Discouraged,
                CabinetAppreciation::NotYetKnown,
                CabinetAppreciation::Other("Oordeel Kamer".to_owned()),
            ]
        );
    }

    #[test]
    fn vote_filter_serializes_with_backend_keys() {
        let value = serde_json::to_value(filter(&["VVD"], &["SP", "PVV"]))
            .expect("Failed to serialize filter");

        assert_eq!(
            value,
            serde_json::json!({"voor_partijen": ["VVD"], "tegen_partijen": ["SP", "PVV"]})
        );
    }

    #[test]
    fn empty_filter_matches_everything() {
        let empty = VoteFilter::default();

        assert!(empty.is_empty());
        assert!(empty.matches(&Motion::default()));
        assert!(empty.matches(&motion_with_votes(&[("VVD", VoteOutcome::Against)])));
    }

    #[test]
    fn filter_requires_every_constraint() {
        let motion = motion_with_votes(&[
            ("VVD", VoteOutcome::For),
            ("SP", VoteOutcome::Against),
            ("D66", VoteOutcome::Other("Niet deelgenomen".to_owned())),
        ]);

        assert!(filter(&["VVD"], &[]).matches(&motion));
        assert!(filter(&["VVD"], &["SP"]).matches(&motion));
        assert!(!filter(&["VVD", "SP"], &[]).matches(&motion));
        assert!(!filter(&[], &["D66"]).matches(&motion));
    }

    #[test]
    fn faction_without_vote_does_not_match() {
        assert!(!filter(&["PVV"], &[]).matches(&motion_with_votes(&[("VVD", VoteOutcome::For)])));
        assert!(!filter(&["PVV"], &[]).matches(&Motion::default()));
    }

    #[test]
    fn motion_votes_into_outcomes_skips_incomplete_entries() {
        let votes: MotionVotes = serde_json::from_str(
            r#"{
                "motie_id": "m1",
                "motie_titel": "Klimaatwet",
                "stemmingen": [
                    {"fractie": "VVD", "stemming": "Voor", "grootte": 24},
                    {"fractie": null, "stemming": "Tegen", "grootte": 3},
                    {"fractie": "SP", "stemming": null, "grootte": 5},
                    {"fractie": "PVV", "stemming": "Tegen", "grootte": 37}
                ]
            }"#,
        )
        .expect("Failed to parse votes");

        let outcomes = votes.into_outcomes();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes.get("VVD"), Some(&VoteOutcome::For));
        assert_eq!(outcomes.get("PVV"), Some(&VoteOutcome::Against));
    }
}
