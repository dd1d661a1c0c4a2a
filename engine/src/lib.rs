//! Engine behind Moties front-ends.
//!
//! Holds fetched motions and factions, tracks faction vote selections and the search term,
//! and derives the collection of motions to display. Network access is abstracted by
//! [`MotionApi`](api::MotionApi) so that the same engine drives both the browser app and the CLI.

pub mod api;
pub mod config;
pub mod present;
pub mod search;
pub mod selection;
pub mod view;

pub use api::{HttpMotionApi, MotionApi, MotionQuery};
pub use config::Config;
pub use moties_data_model as data_model;
pub use selection::{FilterState, VoteKind};
pub use view::{FetchOutcome, FetchTicket, MotionView, Status};

#[cfg(test)]
mod test_utils;
