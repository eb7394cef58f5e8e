//! League data model: matchups and standings consumed by the insights, and
//! the derived weekly insight values handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::{TeamKey, Week};

/// One team's result in a single matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Side {
    pub team_key: TeamKey,
    pub team_name: String,
    pub score: f64,
}

impl Side {
    pub fn new(team_key: impl Into<String>, team_name: impl Into<String>, score: f64) -> Self {
        Self {
            team_key: TeamKey::new(team_key),
            team_name: team_name.into(),
            score,
        }
    }
}

/// A paired home/away result for one league week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub week: Week,
    pub home: Side,
    pub away: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_playoffs: Option<bool>,
}

impl Matchup {
    pub fn new(week: Week, home: Side, away: Side) -> Self {
        Self {
            week,
            home,
            away,
            is_playoffs: None,
        }
    }

    /// Absolute score difference between the two sides.
    pub fn margin(&self) -> f64 {
        (self.home.score - self.away.score).abs()
    }

    /// `(winner, loser)`, or `None` for an exact tie.
    pub fn result(&self) -> Option<(&Side, &Side)> {
        if self.home.score > self.away.score {
            Some((&self.home, &self.away))
        } else if self.away.score > self.home.score {
            Some((&self.away, &self.home))
        } else {
            None
        }
    }

    pub fn sides(&self) -> [&Side; 2] {
        [&self.home, &self.away]
    }
}

/// A team's aggregate record and seed at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_key: TeamKey,
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_for: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_against: Option<f64>,
    /// Seed number, 1 being the best regular-season position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl TeamStanding {
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// `(wins + ties / 2) / games`; 0 before any games are played.
    pub fn win_pct(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => (f64::from(self.wins) + f64::from(self.ties) * 0.5) / f64::from(games),
        }
    }

    /// `W-L-T`
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamOfWeek {
    pub team_name: String,
    pub score: f64,
}

/// A matchup summarized by its margin (used for blowout and closest game).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginReport {
    pub home: String,
    pub away: String,
    pub margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upset {
    pub winner: String,
    pub loser: String,
    pub seed_diff: u32,
    pub margin: f64,
}

/// Narrative facts derived from one week of matchups.
///
/// Serialized field names (`teamOfWeek`, `blowout`, `closest`, `upsets`) are
/// the full contract for renderers; absent facts serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyInsights {
    pub team_of_week: Option<TeamOfWeek>,
    pub blowout: Option<MarginReport>,
    pub closest: Option<MarginReport>,
    pub upsets: Vec<Upset>,
}
