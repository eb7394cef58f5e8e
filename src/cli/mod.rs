//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{LeagueKey, Week};

/// Data-source arguments shared between commands
#[derive(Debug, Clone, Default, Args)]
pub struct LeagueArgs {
    /// League key, e.g. `nfl.l.12345` (or set `FFL_LEAGUE_KEY` env var).
    #[clap(long, short)]
    pub league_key: Option<LeagueKey>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Use the bundled sample league instead of the upstream API.
    #[clap(long)]
    pub sample: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "ffl-insights", about = "Fantasy football league insights")]
pub struct Ffl {
    /// Log request and parsing details to stderr.
    #[clap(long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Team of the week, blowout, closest game and upsets for one week.
    Insights {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Week to summarize (defaults to the league's current week).
        #[clap(long, short)]
        week: Option<Week>,
    },

    /// Show one week's scoreboard.
    Matchups {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Week to show (defaults to the league's current week).
        #[clap(long, short)]
        week: Option<Week>,
    },

    /// Show the league standings table.
    Standings {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Rank teams by win percentage, then points scored.
    PowerRankings {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Average opponent win percentage for every team.
    ///
    /// Fetches every week from 1 through `--through-week` (inclusive) and
    /// grades each team's schedule against the current standings.
    ScheduleStrength {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Include weeks 1 through this week (inclusive).
        #[clap(long)]
        through_week: Week,
    },

    /// Save an access token from the platform's OAuth sign-in as the session.
    Login {
        /// OAuth access token.
        #[clap(long)]
        token: String,
    },

    /// Remove the saved session token.
    Logout,
}
