//! Crate with Moties common data structures which are exchanged with the backend API.
//!
//! Field names follow the Dutch JSON keys of the backend (`titel`, `indieners`, ...),
//! while Rust names are English. Every field the backend may omit or send as `null`
//! degrades to [`None`] or an empty collection instead of failing deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

pub mod vote;

pub use vote::{CabinetAppreciation, FactionVote, MotionVotes, VoteFilter, VoteOutcome};

/// Name of a faction as used in selections and vote mappings.
pub type FactionName = String;

/// Parliamentary faction ("fractie").
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Faction {
    /// Backend identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Full name. Used as the key in vote selections.
    #[serde(rename = "naam", default, deserialize_with = "null_as_default")]
    pub name: FactionName,
    /// Short name shown in the UI.
    #[serde(rename = "afkorting", default, deserialize_with = "null_as_default")]
    pub abbreviation: String,
    /// Number of seats.
    #[serde(rename = "zetels", default, deserialize_with = "null_as_default")]
    pub seats: u32,
}

/// Submitter ("indiener") of a motion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Submitter {
    /// Name of the member of parliament.
    #[serde(rename = "naam", default)]
    pub name: Option<String>,
    /// Faction label of the member.
    #[serde(rename = "fractie", default)]
    pub faction: Option<String>,
}

/// Parliamentary motion ("motie").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motion {
    /// Backend identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Display code, e.g. `2024Z01234`.
    #[serde(rename = "nummer", default)]
    pub number: Option<String>,
    /// Title.
    #[serde(rename = "titel", default)]
    pub title: Option<String>,
    /// Subject text.
    #[serde(rename = "onderwerp", default)]
    pub subject: Option<String>,
    /// Submission timestamp as sent by the backend.
    #[serde(rename = "gestartOp", default)]
    pub submitted_at: Option<String>,
    /// Procedural status.
    #[serde(default)]
    pub status: Option<String>,
    /// Submitters. Empty when the backend omits them.
    #[serde(rename = "indieners", default, deserialize_with = "null_as_default")]
    pub submitters: Vec<Submitter>,
    /// Official stance of the cabinet.
    #[serde(
        rename = "kabinetsappreciatie",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cabinet_appreciation: Option<CabinetAppreciation>,
    /// Vote outcome per faction name. Only present in vote-filtered results
    /// or after votes were fetched separately.
    #[serde(rename = "stemmingen", default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<BTreeMap<FactionName, VoteOutcome>>,
}

impl Motion {
    /// Get the recorded vote of `faction`, if any.
    #[must_use]
    pub fn vote_of(&self, faction: &str) -> Option<&VoteOutcome> {
        self.votes.as_ref().and_then(|votes| votes.get(faction))
    }
}

/// Response of `GET /fracties`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionsResponse {
    /// Active factions.
    #[serde(rename = "fracties", default, deserialize_with = "null_as_default")]
    pub factions: Vec<Faction>,
}

/// Response of `GET /moties` and `POST /moties/filter`.
///
/// Pagination and echo fields the backend adds (`page`, `total`, `filter`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionsResponse {
    /// Motions, newest first.
    #[serde(rename = "moties", default, deserialize_with = "null_as_default")]
    pub motions: Vec<Motion>,
}

/// Deserialize `null` as [`Default::default()`].
///
/// Combined with `#[serde(default)]` it covers both missing and `null` fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::indexing_slicing, reason = "it's ok in tests")]

    use super::*;

    #[test]
    fn motion_from_backend_payload() {
        let json = r#"{
            "id": "a1b2",
            "nummer": "2024Z01234",
            "titel": "Motie van het lid Jansen over de Klimaatwet",
            "onderwerp": "Klimaat",
            "gestartOp": "2024-03-12T10:15:00+01:00",
            "status": "Aangenomen",
            "kabinetsappreciatie": "Ontraden",
            "indieners": [{"naam": "Jansen", "fractie": "GroenLinks-PvdA"}],
            "stemmingen": {"VVD": "Tegen", "GroenLinks-PvdA": "Voor"}
        }"#;

        let motion: Motion = serde_json::from_str(json).expect("Failed to parse motion");

        assert_eq!(motion.id, "a1b2");
        assert_eq!(motion.number.as_deref(), Some("2024Z01234"));
        assert_eq!(motion.submitters.len(), 1);
        assert_eq!(motion.submitters[0].name.as_deref(), Some("Jansen"));
        assert_eq!(
            motion.cabinet_appreciation,
            Some(CabinetAppreciation::Discouraged)
        );
        assert_eq!(motion.vote_of("VVD"), Some(&VoteOutcome::Against));
        assert_eq!(motion.vote_of("GroenLinks-PvdA"), Some(&VoteOutcome::For));
        assert_eq!(motion.vote_of("SP"), None);
    }

    #[test]
    fn motion_with_missing_and_null_fields_degrades_gracefully() {
        let json = r#"{"id": null, "titel": null, "indieners": null, "kabinetsappreciatie": null}"#;

        let motion: Motion = serde_json::from_str(json).expect("Failed to parse motion");

        assert_eq!(motion, Motion::default());
    }

    #[test]
    fn submitter_without_faction() {
        let json = r#"{"naam": "Jansen"}"#;

        let submitter: Submitter = serde_json::from_str(json).expect("Failed to parse submitter");

        assert_eq!(submitter.name.as_deref(), Some("Jansen"));
        assert_eq!(submitter.faction, None);
    }

    #[test]
    fn faction_seats_default_to_zero() {
        let json = r#"{"id": "f1", "naam": "Volkspartij voor Vrijheid en Democratie", "afkorting": "VVD", "zetels": null}"#;

        let faction: Faction = serde_json::from_str(json).expect("Failed to parse faction");

        assert_eq!(faction.abbreviation, "VVD");
        assert_eq!(faction.seats, 0);
    }

    #[test]
    fn responses_ignore_extra_fields_and_default_missing_lists() {
        let motions: MotionsResponse =
            serde_json::from_str(r#"{"moties": [{"id": "m1"}], "page": 1, "limit": 20, "total": 1}"#)
                .expect("Failed to parse motions response");
        assert_eq!(motions.motions.len(), 1);

        let motions: MotionsResponse =
            serde_json::from_str(r#"{"error": "oops"}"#).expect("Failed to parse empty response");
        assert!(motions.motions.is_empty());

        let factions: FactionsResponse =
            serde_json::from_str(r#"{"fracties": null}"#).expect("Failed to parse factions response");
        assert!(factions.factions.is_empty());
    }
}
