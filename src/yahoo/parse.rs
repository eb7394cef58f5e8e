//! Map upstream league payloads onto the league data model.
//!
//! The upstream JSON wraps collections in indexed objects
//! (`{"0": {..}, "1": {..}, "count": 2}`) and spreads a team's fields over a
//! metadata array of single-key objects followed by stat objects:
//!
//! ```text
//! "team": [
//!   [ {"team_key": "nfl.l.1.t.3"}, {"team_id": "3"}, {"name": "Gurus"}, [] ],
//!   {"team_points": {"coverage_type": "week", "week": "3", "total": "120.50"}},
//!   {"team_standings": {"rank": "2", "outcome_totals": {"wins": "2", ...}}}
//! ]
//! ```
//!
//! Numbers arrive either as JSON numbers or as numeric strings.

use serde_json::Value;
use tracing::warn;

use crate::{
    league::{Matchup, Side, TeamStanding},
    FflError, Result, TeamKey, Week,
};


/// Matchups from a scoreboard payload. A scoreboard with no matchups (bye
/// weeks, preseason) is an empty list, not an error.
pub fn parse_scoreboard(payload: &Value) -> Result<Vec<Matchup>> {
    let scoreboard = league_resource(payload, "scoreboard")?;
    let default_week = scoreboard.get("week").and_then(lenient_u16);

    let Some(matchups) = nested(scoreboard, "matchups") else {
        return Ok(Vec::new());
    };

    let mut parsed = Vec::new();
    for (i, item) in indexed(matchups).into_iter().enumerate() {
        let Some(matchup) = item.get("matchup") else {
            warn!(index = i, "scoreboard entry without a matchup, skipping");
            continue;
        };
        match parse_matchup(matchup, default_week) {
            Some(m) => parsed.push(m),
            None => warn!(index = i, "incomplete matchup in scoreboard, skipping"),
        }
    }
    Ok(parsed)
}

/// Standings rows in upstream order.
pub fn parse_standings(payload: &Value) -> Result<Vec<TeamStanding>> {
    let standings = league_resource(payload, "standings")?;
    let teams = nested(standings, "teams")
        .ok_or_else(|| FflError::payload("standings without a teams collection"))?;

    let mut parsed = Vec::new();
    for (i, item) in indexed(teams).into_iter().enumerate() {
        match item.get("team").and_then(parse_standing) {
            Some(s) => parsed.push(s),
            None => warn!(index = i, "standings entry without a team key, skipping"),
        }
    }
    Ok(parsed)
}

fn parse_matchup(matchup: &Value, default_week: Option<u16>) -> Option<Matchup> {
    let week = matchup
        .get("week")
        .and_then(lenient_u16)
        .or(default_week)
        .filter(|w| *w >= 1)?;

    let teams = nested(matchup, "teams")?;
    let sides: Vec<Side> = indexed(teams)
        .into_iter()
        .filter_map(|item| item.get("team").and_then(parse_side))
        .collect();
    let [home, away]: [Side; 2] = sides.try_into().ok()?;

    Some(Matchup {
        week: Week::new(week),
        home,
        away,
        is_playoffs: matchup.get("is_playoffs").and_then(lenient_bool),
    })
}

fn parse_side(team: &Value) -> Option<Side> {
    let (team_key, team_name) = team_identity(team)?;
    let score = team_field(team, "team_points")
        .and_then(|p| p.get("total"))
        .and_then(lenient_f64)
        .unwrap_or(0.0);

    Some(Side {
        team_key,
        team_name,
        score,
    })
}

fn parse_standing(team: &Value) -> Option<TeamStanding> {
    let (team_key, team_name) = team_identity(team)?;
    let standings = team_field(team, "team_standings");
    let totals = standings.and_then(|s| s.get("outcome_totals"));
    let count = |field: &str| {
        totals
            .and_then(|t| t.get(field))
            .and_then(lenient_u32)
            .unwrap_or(0)
    };
    let seed = |field: &str| {
        standings
            .and_then(|s| s.get(field))
            .and_then(lenient_u32)
            .filter(|r| *r >= 1)
    };

    Some(TeamStanding {
        wins: count("wins"),
        losses: count("losses"),
        ties: count("ties"),
        points_for: standings
            .and_then(|s| s.get("points_for"))
            .and_then(lenient_f64)
            .or_else(|| {
                team_field(team, "team_points")
                    .and_then(|p| p.get("total"))
                    .and_then(lenient_f64)
            }),
        points_against: standings
            .and_then(|s| s.get("points_against"))
            .and_then(lenient_f64),
        rank: seed("rank").or_else(|| seed("playoff_seed")),
        team_key,
        team_name,
    })
}

fn team_identity(team: &Value) -> Option<(TeamKey, String)> {
    let key = team_field(team, "team_key")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|k| !k.is_empty())?;
    let name = team_field(team, "name")
        .and_then(Value::as_str)
        .unwrap_or(key);
    Some((TeamKey::new(key), name.to_string()))
}

/// `fantasy_content.league` is `[metadata, {"<resource>": ...}]`.
fn league_resource<'a>(payload: &'a Value, resource: &str) -> Result<&'a Value> {
    payload
        .pointer("/fantasy_content/league")
        .and_then(Value::as_array)
        .and_then(|parts| parts.iter().find_map(|p| p.get(resource)))
        .ok_or_else(|| FflError::payload(format!("league payload without {resource}")))
}

/// Items of an indexed collection, or of a plain array.
fn indexed(collection: &Value) -> Vec<&Value> {
    if let Some(items) = collection.as_array() {
        return items.iter().collect();
    }
    (0..)
        .map_while(|i: usize| collection.get(i.to_string()))
        .collect()
}

/// `value[key]`, or the first indexed item that has `key`.
fn nested<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value
        .get(key)
        .or_else(|| indexed(value).into_iter().find_map(|item| item.get(key)))
}

/// Look a field up across a team's metadata array and stat objects.
fn team_field<'a>(team: &'a Value, key: &str) -> Option<&'a Value> {
    team.as_array()?.iter().find_map(|part| match part {
        Value::Array(meta) => meta.iter().find_map(|m| m.get(key)),
        other => other.get(key),
    })
}

fn lenient_f64(v: &Value) -> Option<f64> {
    v.as_f64()
        .or_else(|| v.as_str()?.trim().parse().ok())
        .filter(|f: &f64| f.is_finite())
}

fn lenient_u32(v: &Value) -> Option<u32> {
    v.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .or_else(|| v.as_str()?.trim().parse().ok())
}

fn lenient_u16(v: &Value) -> Option<u16> {
    lenient_u32(v).and_then(|n| u16::try_from(n).ok())
}

fn lenient_bool(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_u64().map(|n| n != 0),
        Value::String(s) => match s.trim() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
