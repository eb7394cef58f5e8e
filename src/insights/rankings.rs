//! Power rankings derived from the standings table.

use serde::{Deserialize, Serialize};

use crate::{league::TeamStanding, TeamKey};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerRanking {
    /// 1-based position in the rankings.
    pub position: u32,
    pub team_key: TeamKey,
    pub team_name: String,
    pub record: String,
    pub win_pct: f64,
    pub points_for: f64,
}

/// Order teams by win percentage, then points scored, both descending.
/// Teams still level keep their standings order.
pub fn power_rankings(standings: &[TeamStanding]) -> Vec<PowerRanking> {
    let mut ordered: Vec<&TeamStanding> = standings.iter().collect();
    ordered.sort_by(|a, b| {
        b.win_pct()
            .total_cmp(&a.win_pct())
            .then_with(|| points_for(b).total_cmp(&points_for(a)))
    });

    ordered
        .into_iter()
        .zip(1..)
        .map(|(s, position)| PowerRanking {
            position,
            team_key: s.team_key.clone(),
            team_name: s.team_name.clone(),
            record: s.record(),
            win_pct: s.win_pct(),
            points_for: points_for(s),
        })
        .collect()
}

fn points_for(s: &TeamStanding) -> f64 {
    s.points_for.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(key: &str, wins: u32, losses: u32, ties: u32, pf: Option<f64>) -> TeamStanding {
        TeamStanding {
            team_key: TeamKey::new(key),
            team_name: key.to_uppercase(),
            wins,
            losses,
            ties,
            points_for: pf,
            points_against: None,
            rank: None,
        }
    }

    #[test]
    fn test_orders_by_win_pct_then_points() {
        let standings = vec![
            standing("a", 2, 2, 0, Some(400.0)),
            standing("b", 3, 1, 0, Some(380.0)),
            standing("c", 2, 2, 0, Some(455.5)),
            standing("d", 3, 1, 0, Some(390.0)),
        ];

        let rankings = power_rankings(&standings);
        let keys: Vec<&str> = rankings.iter().map(|r| r.team_key.as_str()).collect();
        assert_eq!(keys, vec!["d", "b", "c", "a"]);
        assert_eq!(
            rankings.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(rankings[0].record, "3-1-0");
        assert_eq!(rankings[0].win_pct, 0.75);
        assert_eq!(rankings[0].team_name, "D");
    }

    #[test]
    fn test_ties_count_half_and_missing_points_sort_last() {
        let standings = vec![
            standing("a", 1, 1, 0, None),
            standing("b", 1, 1, 0, Some(200.0)),
            standing("c", 0, 1, 2, Some(999.0)),
        ];

        let rankings = power_rankings(&standings);
        let keys: Vec<&str> = rankings.iter().map(|r| r.team_key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(rankings[1].points_for, 0.0);
        assert!((rankings[2].win_pct - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let standings = vec![
            standing("x", 0, 0, 0, None),
            standing("y", 0, 0, 0, None),
            standing("z", 0, 0, 0, None),
        ];

        let keys: Vec<String> = power_rankings(&standings)
            .into_iter()
            .map(|r| r.team_key.into())
            .collect();
        assert_eq!(keys, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_standings() {
        assert!(power_rankings(&[]).is_empty());
    }
}
