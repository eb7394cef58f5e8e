//! Fantasy Football League Insights Library
//!
//! Reads a fantasy league's weekly scoreboard and standings and turns them
//! into narrative insights: team of the week, biggest blowout, closest game,
//! upsets, power rankings and strength of schedule.
//!
//! ## Features
//!
//! - **Weekly Insights**: A pure, deterministic calculation over one week of matchups
//! - **Power Rankings**: Win percentage first, points scored second
//! - **Strength of Schedule**: Average opponent win percentage across weeks
//! - **Upstream Access**: Thin read-only wrappers over the league scoreboard and standings
//! - **Sample League**: A bundled league for trying things out without a session
//!
//! ## Quick Start
//!
//! ```rust
//! use ffl_insights::{insights::weekly_insights, league::{Matchup, Side}, Week};
//!
//! let week = vec![
//!     Matchup::new(Week::new(1), Side::new("t.1", "Gurus", 120.0), Side::new("t.2", "Owls", 90.0)),
//!     Matchup::new(Week::new(1), Side::new("t.3", "Hawks", 101.5), Side::new("t.4", "Bears", 100.0)),
//! ];
//!
//! let insights = weekly_insights(&week, &[]);
//! assert_eq!(insights.team_of_week.unwrap().team_name, "Gurus");
//! assert_eq!(insights.closest.unwrap().margin, 1.5);
//! assert!(insights.upsets.is_empty());
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FFL_LEAGUE_KEY=nfl.l.123456
//! export FFL_ACCESS_TOKEN=...          # or `ffl-insights login --token ...`
//! export FFL_API_BASE_URL=http://...   # optional upstream override
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fixtures;
pub mod insights;
pub mod league;
pub mod yahoo;

// Re-export commonly used types
pub use cli::types::{LeagueKey, TeamKey, Week};
pub use crate::core::session::ACCESS_TOKEN_ENV_VAR;
pub use error::{FflError, Result};
pub use insights::weekly_insights;
pub use league::{Matchup, Side, TeamStanding, WeeklyInsights};

pub const LEAGUE_KEY_ENV_VAR: &str = "FFL_LEAGUE_KEY";
pub const API_BASE_URL_ENV_VAR: &str = "FFL_API_BASE_URL";
