//! Module with command line arguments.

use clap::{Parser, Subcommand};
use url::Url;

/// Browse Tweede Kamer motions and filter them by faction votes.
#[derive(Debug, Parser)]
#[command(name = "moties", version)]
pub struct Cli {
    /// Base url of the backend API. Overrides `MOTIES_API_BASE_URL`.
    #[arg(long)]
    pub api_base_url: Option<Url>,
    /// Number of motions fetched without faction filters. Overrides `MOTIES_RECENT_LIMIT`.
    #[arg(long)]
    pub limit: Option<u32>,
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the most recent motions.
    List {
        /// Only show motions containing this text in title, subject or submitters.
        #[arg(short, long, default_value_t)]
        search: String,
    },
    /// Show motions filtered by how factions voted.
    Filter {
        /// Faction which must have voted for. Can be repeated.
        #[arg(long = "voor", value_name = "FACTION")]
        voted_for: Vec<String>,
        /// Faction which must have voted against. Can be repeated.
        #[arg(long = "tegen", value_name = "FACTION")]
        voted_against: Vec<String>,
        /// Only show motions containing this text in title, subject or submitters.
        #[arg(short, long, default_value_t)]
        search: String,
    },
    /// List active factions.
    Fracties,
    /// Show per-faction votes of a single motion.
    Stemmingen {
        /// Motion identifier.
        motion_id: String,
    },
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "it's ok in tests")]

    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filter_collects_repeated_factions() {
        let cli = Cli::try_parse_from([
            "moties", "filter", "--voor", "VVD", "--voor", "D66", "--tegen", "SP", "-s", "klimaat",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Filter {
                voted_for: vec!["VVD".to_owned(), "D66".to_owned()],
                voted_against: vec!["SP".to_owned()],
                search: "klimaat".to_owned(),
            }
        );
    }

    #[test]
    fn global_options() {
        let cli = Cli::try_parse_from([
            "moties",
            "--api-base-url",
            "https://moties.example.org/api",
            "--limit",
            "50",
            "list",
        ])
        .unwrap();

        assert_eq!(
            cli.api_base_url.map(String::from).as_deref(),
            Some("https://moties.example.org/api")
        );
        assert_eq!(cli.limit, Some(50));
        assert_eq!(cli.command, Command::List { search: String::new() });
    }

    #[test]
    fn invalid_url_is_rejected() {
        Cli::try_parse_from(["moties", "--api-base-url", "not a url", "list"]).unwrap_err();
    }
}
