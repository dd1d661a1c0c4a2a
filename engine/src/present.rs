//! Presentation helpers shared by the front-ends.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use moties_data_model::{CabinetAppreciation, Faction, Motion, Submitter, VoteOutcome};

/// Placeholder for a motion without title.
pub const MISSING_TITLE: &str = "Geen titel";
/// Placeholder for an absent date or name.
pub const UNKNOWN: &str = "Onbekend";

/// Get title of `motion` or [`MISSING_TITLE`].
#[must_use]
pub fn title(motion: &Motion) -> &str {
    motion
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .unwrap_or(MISSING_TITLE)
}

/// Format submission date of `motion` as a Dutch short date (`d-m-yyyy`).
///
/// Absent date gives [`UNKNOWN`], unparsable one is shown as is.
#[must_use]
pub fn submission_date(motion: &Motion) -> Cow<'_, str> {
    let Some(raw) = motion.submitted_at.as_deref().filter(|raw| !raw.is_empty()) else {
        return Cow::Borrowed(UNKNOWN);
    };

    parse_date(raw).map_or(Cow::Borrowed(raw), |date| {
        Cow::Owned(date.format("%-d-%-m-%Y").to_string())
    })
}

/// Parse date from the timestamp formats the backend sends.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|date_time| date_time.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// Get label of `faction` for selection lists, e.g. `VVD (24)`.
#[must_use]
pub fn faction_label(faction: &Faction) -> String {
    format!("{} ({})", faction.abbreviation, faction.seats)
}

/// Get label of `submitter`, e.g. `Jansen (VVD)`.
#[must_use]
pub fn submitter_label(submitter: &Submitter) -> String {
    let name = submitter.name.as_deref().unwrap_or(UNKNOWN);
    match &submitter.faction {
        Some(faction) => format!("{name} ({faction})"),
        None => name.to_owned(),
    }
}

/// Visual tone of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Green.
    Positive,
    /// Red.
    Negative,
    /// Yellow.
    Pending,
    /// Grey.
    Neutral,
}

impl Tone {
    /// Get CSS class suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Pending => "pending",
            Self::Neutral => "neutral",
        }
    }
}

/// Get [`Tone`] for a cabinet appreciation.
#[must_use]
pub const fn appreciation_tone(appreciation: &CabinetAppreciation) -> Tone {
    match appreciation {
        CabinetAppreciation::Adopted => Tone::Positive,
        CabinetAppreciation::Discouraged => Tone::Negative,
        CabinetAppreciation::NotYetKnown => Tone::Pending,
        CabinetAppreciation::Other(_) => Tone::Neutral,
    }
}

/// Get [`Tone`] for a vote outcome.
#[must_use]
pub const fn vote_tone(outcome: &VoteOutcome) -> Tone {
    match outcome {
        VoteOutcome::For => Tone::Positive,
        VoteOutcome::Against => Tone::Negative,
        VoteOutcome::Other(_) => Tone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(raw: Option<&str>) -> Motion {
        Motion {
            submitted_at: raw.map(ToOwned::to_owned),
            ..Motion::default()
        }
    }

    #[test]
    fn missing_title_gets_placeholder() {
        assert_eq!(title(&Motion::default()), MISSING_TITLE);

        let motion = Motion {
            title: Some("Klimaatwet".to_owned()),
            ..Motion::default()
        };
        assert_eq!(title(&motion), "Klimaatwet");
    }

    #[test]
    fn dates_are_formatted_in_dutch_short_form() {
        assert_eq!(submission_date(&dated(Some("2024-03-05T10:15:00+01:00"))), "5-3-2024");
        assert_eq!(submission_date(&dated(Some("2024-11-21T00:00:00"))), "21-11-2024");
        assert_eq!(submission_date(&dated(Some("2024-11-21T00:00:00.123"))), "21-11-2024");
        assert_eq!(submission_date(&dated(Some("2023-01-09"))), "9-1-2023");
    }

    #[test]
    fn missing_or_broken_dates() {
        assert_eq!(submission_date(&dated(None)), UNKNOWN);
        assert_eq!(submission_date(&dated(Some(""))), UNKNOWN);
        assert_eq!(submission_date(&dated(Some("gisteren"))), "gisteren");
    }

    #[test]
    fn labels() {
        let faction = Faction {
            abbreviation: "VVD".to_owned(),
            seats: 24,
            ..Faction::default()
        };
        assert_eq!(faction_label(&faction), "VVD (24)");

        let mut submitter = Submitter {
            name: Some("Jansen".to_owned()),
            faction: Some("VVD".to_owned()),
        };
        assert_eq!(submitter_label(&submitter), "Jansen (VVD)");
        submitter.faction = None;
        assert_eq!(submitter_label(&submitter), "Jansen");
        assert_eq!(submitter_label(&Submitter::default()), UNKNOWN);
    }

    #[test]
    fn tones() {
        assert_eq!(appreciation_tone(&CabinetAppreciation::Adopted), Tone::Positive);
        assert_eq!(appreciation_tone(&CabinetAppreciation::Discouraged), Tone::Negative);
        assert_eq!(appreciation_tone(&CabinetAppreciation::NotYetKnown), Tone::Pending);
        assert_eq!(
            appreciation_tone(&CabinetAppreciation::Other("Oordeel Kamer".to_owned())),
            Tone::Neutral
        );
        assert_eq!(vote_tone(&VoteOutcome::For).as_str(), "positive");
        assert_eq!(vote_tone(&VoteOutcome::Against).as_str(), "negative");
    }
}
