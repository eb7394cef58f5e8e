//! Bundled sample league, used when no upstream session is available.

use serde::{Deserialize, Serialize};

use crate::{
    league::{Matchup, TeamStanding},
    LeagueKey, Result, Week,
};

const SAMPLE_LEAGUE_JSON: &str = include_str!("../fixtures/sample_league.json");

/// A ten-team league with a few completed weeks and current standings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleLeague {
    pub league_key: LeagueKey,
    pub name: String,
    pub matchups: Vec<Matchup>,
    pub standings: Vec<TeamStanding>,
}

impl SampleLeague {
    pub fn load() -> Result<Self> {
        Ok(serde_json::from_str(SAMPLE_LEAGUE_JSON)?)
    }

    /// Matchups of one week, in scoreboard order.
    pub fn week(&self, week: Week) -> Vec<Matchup> {
        self.matchups
            .iter()
            .filter(|m| m.week == week)
            .cloned()
            .collect()
    }

    /// The most recent week with matchups, if any.
    pub fn latest_week(&self) -> Option<Week> {
        self.matchups.iter().map(|m| m.week).max()
    }

    /// Matchups from week 1 through `week`, inclusive.
    pub fn matchups_through(&self, week: Week) -> Vec<Matchup> {
        self.matchups
            .iter()
            .filter(|m| m.week <= week)
            .cloned()
            .collect()
    }
}
