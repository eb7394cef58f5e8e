//! Text rendering for insights, standings and scoreboards.

use super::{rankings::PowerRanking, schedule::ScheduleStrength};
use crate::league::{Matchup, TeamStanding, WeeklyInsights};

/// One line per weekly fact.
pub fn weekly_lines(insights: &WeeklyInsights) -> Vec<String> {
    let mut lines = Vec::new();

    let Some(top) = &insights.team_of_week else {
        lines.push("No games played this week.".to_string());
        return lines;
    };
    lines.push(format!("🏆 Team of the week: {} ({:.2})", top.team_name, top.score));

    if let Some(b) = &insights.blowout {
        lines.push(format!(
            "💥 Biggest blowout: {} vs {} by {:.2}",
            b.home, b.away, b.margin
        ));
    }
    if let Some(c) = &insights.closest {
        lines.push(format!(
            "😬 Closest game: {} vs {} by {:.2}",
            c.home, c.away, c.margin
        ));
    }

    if insights.upsets.is_empty() {
        lines.push("No upsets this week.".to_string());
    }
    for u in &insights.upsets {
        let seeds = if u.seed_diff == 1 { "seed" } else { "seeds" };
        lines.push(format!(
            "⚡ Upset: {} beat {} ({} {} apart) by {:.2}",
            u.winner, u.loser, u.seed_diff, seeds, u.margin
        ));
    }

    lines
}

pub fn matchup_lines(matchups: &[Matchup]) -> Vec<String> {
    if matchups.is_empty() {
        return vec!["No matchups scheduled.".to_string()];
    }

    matchups
        .iter()
        .map(|m| {
            let playoffs = if m.is_playoffs == Some(true) { " [playoffs]" } else { "" };
            format!(
                "Week {}: {} {:.2} - {:.2} {}{}",
                m.week, m.home.team_name, m.home.score, m.away.score, m.away.team_name, playoffs
            )
        })
        .collect()
}

pub fn standings_lines(standings: &[TeamStanding]) -> Vec<String> {
    standings
        .iter()
        .map(|s| {
            let rank = s.rank.map_or_else(|| "-".to_string(), |r| r.to_string());
            let pf = s.points_for.map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
            let pa = s
                .points_against
                .map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
            format!(
                "{:>2}. {} ({}) PF {} PA {}",
                rank,
                s.team_name,
                s.record(),
                pf,
                pa
            )
        })
        .collect()
}

pub fn power_ranking_lines(rankings: &[PowerRanking]) -> Vec<String> {
    rankings
        .iter()
        .map(|r| {
            format!(
                "{:>2}. {} ({}, {:.3}) PF {:.2}",
                r.position, r.team_name, r.record, r.win_pct, r.points_for
            )
        })
        .collect()
}

/// Per-team lines plus hardest/easiest commentary.
pub fn schedule_lines(strengths: &[ScheduleStrength]) -> Vec<String> {
    let mut lines: Vec<String> = strengths
        .iter()
        .map(|s| {
            format!(
                "{}: opponents {:.3} over {} games",
                s.team_name, s.opponent_win_pct, s.games
            )
        })
        .collect();

    match (strengths.first(), strengths.last()) {
        (Some(hardest), Some(easiest)) if strengths.len() > 1 => {
            lines.push(format!(
                "Toughest road: {} ({:.3}). Softest path: {} ({:.3}).",
                hardest.team_name,
                hardest.opponent_win_pct,
                easiest.team_name,
                easiest.opponent_win_pct
            ));
        }
        (Some(only), _) => {
            lines.push(format!(
                "Only {} has graded opponents so far.",
                only.team_name
            ));
        }
        _ => lines.push("No schedule data yet.".to_string()),
    }

    lines
}
