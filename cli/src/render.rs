//! Module with plain text rendering of motions and factions.

use std::io::{self, Write};

use moties_engine::{
    FilterState, MotionView, Status, VoteKind,
    data_model::{Faction, Motion, MotionVotes},
    present,
};

/// Indentation of motion details.
const INDENT: &str = "  ";

/// Write displayed motions of `view` with a header line.
///
/// # Errors
///
/// Any error from `out`.
pub fn motions(out: &mut impl Write, view: &MotionView) -> io::Result<()> {
    let displayed: Vec<_> = view.displayed().collect();
    writeln!(out, "Moties ({})", displayed.len())?;

    if view.status() == Status::Empty {
        writeln!(out)?;
        return writeln!(out, "Geen moties gevonden met de huidige filters.");
    }

    for motion in displayed {
        writeln!(out)?;
        self::motion(out, motion)?;
    }
    Ok(())
}

/// Write a single motion.
///
/// # Errors
///
/// Any error from `out`.
pub fn motion(out: &mut impl Write, motion: &Motion) -> io::Result<()> {
    write!(out, "{}", present::title(motion))?;
    if let Some(number) = &motion.number {
        write!(out, " [{number}]")?;
    }
    writeln!(out)?;

    if let Some(subject) = &motion.subject {
        writeln!(out, "{INDENT}{subject}")?;
    }
    writeln!(
        out,
        "{INDENT}Ingediend: {} | Status: {}",
        present::submission_date(motion),
        motion.status.as_deref().unwrap_or(present::UNKNOWN)
    )?;

    if !motion.submitters.is_empty() {
        let submitters: Vec<_> = motion.submitters.iter().map(present::submitter_label).collect();
        writeln!(out, "{INDENT}Indieners: {}", submitters.join(", "))?;
    }
    if let Some(appreciation) = &motion.cabinet_appreciation {
        writeln!(out, "{INDENT}Kabinetsappreciatie: {appreciation}")?;
    }
    if let Some(votes) = motion.votes.as_ref().filter(|votes| !votes.is_empty()) {
        let votes: Vec<_> = votes
            .iter()
            .map(|(faction, outcome)| format!("{faction}: {outcome}"))
            .collect();
        writeln!(out, "{INDENT}Stemgedrag: {}", votes.join(", "))?;
    }
    Ok(())
}

/// Write active vote filters, if any.
///
/// # Errors
///
/// Any error from `out`.
pub fn active_filters(out: &mut impl Write, filters: &FilterState) -> io::Result<()> {
    if !filters.has_vote_selection() {
        return Ok(());
    }

    let labels: Vec<_> = filters
        .selected(VoteKind::For)
        .iter()
        .map(|faction| format!("Voor: {faction}"))
        .chain(
            filters
                .selected(VoteKind::Against)
                .iter()
                .map(|faction| format!("Tegen: {faction}")),
        )
        .collect();
    writeln!(out, "Actieve filters: {}", labels.join(", "))
}

/// Write factions, one per line.
///
/// # Errors
///
/// Any error from `out`.
pub fn factions(out: &mut impl Write, factions: &[Faction]) -> io::Result<()> {
    for faction in factions {
        writeln!(out, "{:<16} {}", present::faction_label(faction), faction.name)?;
    }
    Ok(())
}

/// Write per-faction votes of a motion.
///
/// # Errors
///
/// Any error from `out`.
pub fn votes(out: &mut impl Write, votes: &MotionVotes) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        votes.motion_title.as_deref().unwrap_or(present::MISSING_TITLE)
    )?;
    for vote in &votes.votes {
        let faction = vote.faction.as_deref().unwrap_or(present::UNKNOWN);
        let outcome = vote
            .outcome
            .as_ref()
            .map_or_else(|| present::UNKNOWN.to_owned(), ToString::to_string);
        match vote.size {
            Some(size) => writeln!(out, "{INDENT}{faction} ({size}): {outcome}")?,
            None => writeln!(out, "{INDENT}{faction}: {outcome}")?,
        }
    }
    Ok(())
}
