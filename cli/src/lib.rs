//! Terminal front-end for Moties.
//!
//! Runs a single [`Command`](args::Command) against a [`MotionApi`] and writes
//! plain text to the given output.

use std::io::Write;

use color_eyre::{
    Result,
    eyre::{WrapErr as _, bail},
};
use moties_engine::{FetchOutcome, MotionApi, MotionView, VoteKind};
use tracing::instrument;

pub mod args;
pub mod config;
pub mod render;

use args::Command;

/// Execute `command` using `api` and write its result to `out`.
///
/// # Errors
///
/// Fails if the backend request fails or `out` can't be written.
#[instrument(skip(view, api, out))]
pub async fn run<A: MotionApi, W: Write>(
    command: Command,
    view: &mut MotionView,
    api: &A,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List { search } => {
            view.set_search_term(search);
            refresh(view, api).await?;
            render::motions(out, view)?;
        }
        Command::Filter {
            voted_for,
            voted_against,
            search,
        } => {
            select(view, &voted_for, VoteKind::For);
            select(view, &voted_against, VoteKind::Against);
            view.set_search_term(search);
            refresh(view, api).await?;
            render::active_filters(out, view.filters())?;
            render::motions(out, view)?;
        }
        Command::Fracties => {
            let factions = api.factions().await.wrap_err("Failed to fetch factions")?;
            render::factions(out, &factions)?;
        }
        Command::Stemmingen { motion_id } => {
            let votes = api
                .motion_votes(&motion_id)
                .await
                .wrap_err_with(|| format!("Failed to fetch votes of motion `{motion_id}`"))?;
            render::votes(out, &votes)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Select each of `factions` for `kind`.
///
/// Factions repeated on the command line stay selected.
fn select(view: &mut MotionView, factions: &[String], kind: VoteKind) {
    for faction in factions {
        if !view.filters().is_selected(faction, kind) {
            view.toggle(faction, kind);
        }
    }
}

/// Refresh motions of `view`, turning a failed fetch into an error.
async fn refresh<A: MotionApi>(view: &mut MotionView, api: &A) -> Result<()> {
    match view.refresh(api).await {
        FetchOutcome::Applied | FetchOutcome::Stale => Ok(()),
        FetchOutcome::Failed => bail!("Failed to fetch motions"),
    }
}
