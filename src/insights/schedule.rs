//! Strength of schedule: how good were the opponents each team has faced.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    league::{Matchup, TeamStanding},
    TeamKey,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStrength {
    pub team_key: TeamKey,
    pub team_name: String,
    /// Games counted in the average (opponents with a standing).
    pub games: u32,
    /// Mean win percentage of the opponents faced.
    pub opponent_win_pct: f64,
}

#[derive(Default)]
struct Tally<'a> {
    team_name: &'a str,
    games: u32,
    total: f64,
}

/// Average opponent win percentage per team, hardest schedule first.
///
/// Opponents missing from `standings` are left out of the average; a team
/// with no graded opponents is omitted. Equal averages keep the order in
/// which teams first appear in `matchups`.
pub fn strength_of_schedule(
    matchups: &[Matchup],
    standings: &[TeamStanding],
) -> Vec<ScheduleStrength> {
    let mut win_pcts: HashMap<&TeamKey, f64> = HashMap::new();
    for s in standings {
        win_pcts.entry(&s.team_key).or_insert_with(|| s.win_pct());
    }

    let mut order: Vec<&TeamKey> = Vec::new();
    let mut tallies: HashMap<&TeamKey, Tally> = HashMap::new();

    for m in matchups {
        for (team, opponent) in [(&m.home, &m.away), (&m.away, &m.home)] {
            let tally = tallies.entry(&team.team_key).or_insert_with(|| {
                order.push(&team.team_key);
                Tally {
                    team_name: &team.team_name,
                    ..Tally::default()
                }
            });
            if let Some(pct) = win_pcts.get(&opponent.team_key) {
                tally.games += 1;
                tally.total += pct;
            }
        }
    }

    let mut result: Vec<ScheduleStrength> = order
        .into_iter()
        .filter_map(|key| {
            let tally = tallies.get(key)?;
            (tally.games > 0).then(|| ScheduleStrength {
                team_key: key.clone(),
                team_name: tally.team_name.to_string(),
                games: tally.games,
                opponent_win_pct: tally.total / f64::from(tally.games),
            })
        })
        .collect();

    result.sort_by(|a, b| b.opponent_win_pct.total_cmp(&a.opponent_win_pct));
    result
}
