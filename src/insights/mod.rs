//! Narrative insights derived from a week of matchups and the standings.
//!
//! - [`weekly_insights`]: team of the week, blowout, closest game, upsets
//! - [`rankings`]: standings-based power rankings
//! - [`schedule`]: strength of schedule across several weeks
//! - [`narrative`]: text rendering of all of the above
//!
//! Everything here is a pure function of its inputs.

pub mod narrative;
pub mod rankings;
pub mod schedule;

use std::collections::HashMap;

use crate::league::{Matchup, MarginReport, TeamOfWeek, TeamStanding, Upset, WeeklyInsights};


/// Derive the weekly narrative facts.
///
/// Ties for team of the week, blowout and closest game all go to the first
/// candidate in input order (home before away within a matchup). Upsets need
/// a rank for both sides; matchups without one are skipped.
pub fn weekly_insights(matchups: &[Matchup], standings: &[TeamStanding]) -> WeeklyInsights {
    let ranks = rank_index(standings);

    WeeklyInsights {
        team_of_week: team_of_week(matchups),
        blowout: extreme_margin(matchups, |candidate, best| candidate > best),
        closest: extreme_margin(matchups, |candidate, best| candidate < best),
        upsets: matchups
            .iter()
            .filter_map(|m| upset(m, &ranks))
            .collect(),
    }
}

/// Team key -> seed. The first listing of a key wins.
fn rank_index(standings: &[TeamStanding]) -> HashMap<&str, u32> {
    let mut ranks = HashMap::new();
    for s in standings {
        if let Some(rank) = s.rank {
            ranks.entry(s.team_key.as_str()).or_insert(rank);
        }
    }
    ranks
}

fn team_of_week(matchups: &[Matchup]) -> Option<TeamOfWeek> {
    let mut best = None;
    for side in matchups.iter().flat_map(Matchup::sides) {
        match best {
            Some((_, score)) if side.score > score => best = Some((side, side.score)),
            None => best = Some((side, side.score)),
            _ => {}
        }
    }

    best.map(|(side, score)| TeamOfWeek {
        team_name: side.team_name.clone(),
        score,
    })
}

/// Scan for the matchup whose margin beats every earlier one under `beats`.
/// A strict comparison keeps the first of several equal margins.
fn extreme_margin(matchups: &[Matchup], beats: impl Fn(f64, f64) -> bool) -> Option<MarginReport> {
    let mut best: Option<(&Matchup, f64)> = None;
    for m in matchups {
        let margin = m.margin();
        match best {
            Some((_, best_margin)) if beats(margin, best_margin) => best = Some((m, margin)),
            None => best = Some((m, margin)),
            _ => {}
        }
    }

    best.map(|(m, margin)| MarginReport {
        home: m.home.team_name.clone(),
        away: m.away.team_name.clone(),
        margin,
    })
}

fn upset(m: &Matchup, ranks: &HashMap<&str, u32>) -> Option<Upset> {
    let (winner, loser) = m.result()?;
    let winner_rank = *ranks.get(winner.team_key.as_str())?;
    let loser_rank = *ranks.get(loser.team_key.as_str())?;

    (loser_rank < winner_rank).then(|| Upset {
        winner: winner.team_name.clone(),
        loser: loser.team_name.clone(),
        seed_diff: winner_rank - loser_rank,
        margin: m.margin(),
    })
}
