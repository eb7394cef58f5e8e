//! Caller-side checks on a week of matchups before insights are derived.
//!
//! The insight computations accept anything and stay deterministic; these
//! checks catch upstream data that would make their output meaningless.

use std::collections::HashSet;

use super::types::{Matchup, Side};
use crate::error::{FflError, Result};

/// Reject malformed matchups: self-pairings, blank team keys, a team
/// appearing twice in the same week, and negative or non-finite scores.
pub fn validate_week(matchups: &[Matchup]) -> Result<()> {
    let mut seen: HashSet<(u16, &str)> = HashSet::new();

    for m in matchups {
        let week = m.week.as_u16();
        let invalid = |reason: String| FflError::InvalidMatchup { week, reason };

        if week == 0 {
            return Err(invalid("weeks start at 1".to_string()));
        }
        if m.home.team_key == m.away.team_key {
            return Err(invalid(format!(
                "{} is listed as both home and away",
                m.home.team_key
            )));
        }

        for side in m.sides() {
            check_side(side).map_err(invalid)?;
            if !seen.insert((week, side.team_key.as_str())) {
                return Err(invalid(format!(
                    "{} appears in more than one matchup",
                    side.team_key
                )));
            }
        }
    }

    Ok(())
}

fn check_side(side: &Side) -> std::result::Result<(), String> {
    if side.team_key.is_empty() {
        return Err(format!("team {:?} has an empty team key", side.team_name));
    }
    if !side.score.is_finite() || side.score < 0.0 {
        return Err(format!("{} has invalid score {}", side.team_key, side.score));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{league::Side, Week};

    fn matchup(week: u16, home: (&str, f64), away: (&str, f64)) -> Matchup {
        Matchup::new(
            Week::new(week),
            Side::new(home.0, home.0.to_uppercase(), home.1),
            Side::new(away.0, away.0.to_uppercase(), away.1),
        )
    }

    fn reason(result: Result<()>) -> String {
        match result {
            Err(FflError::InvalidMatchup { reason, .. }) => reason,
            other => panic!("expected InvalidMatchup, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_week_passes() {
        let week = vec![
            matchup(3, ("a", 100.0), ("b", 95.0)),
            matchup(3, ("c", 0.0), ("d", 140.0)),
        ];
        assert!(validate_week(&week).is_ok());
        assert!(validate_week(&[]).is_ok());
    }

    #[test]
    fn test_same_team_both_sides() {
        let r = reason(validate_week(&[matchup(1, ("a", 1.0), ("a", 2.0))]));
        assert!(r.contains("both home and away"));
    }

    #[test]
    fn test_team_in_two_matchups() {
        let week = vec![
            matchup(2, ("a", 1.0), ("b", 2.0)),
            matchup(2, ("c", 1.0), ("a", 2.0)),
        ];
        assert!(reason(validate_week(&week)).contains("more than one matchup"));
    }

    #[test]
    fn test_same_team_in_different_weeks_is_fine() {
        let weeks = vec![
            matchup(1, ("a", 1.0), ("b", 2.0)),
            matchup(2, ("a", 1.0), ("b", 2.0)),
        ];
        assert!(validate_week(&weeks).is_ok());
    }

    #[test]
    fn test_blank_key_and_bad_scores() {
        assert!(reason(validate_week(&[matchup(1, (" ", 1.0), ("b", 2.0))])).contains("empty team key"));
        assert!(reason(validate_week(&[matchup(1, ("a", -0.5), ("b", 2.0))])).contains("invalid score"));
        assert!(reason(validate_week(&[matchup(1, ("a", f64::NAN), ("b", 2.0))])).contains("invalid score"));
    }

    #[test]
    fn test_week_zero_rejected() {
        match validate_week(&[matchup(0, ("a", 1.0), ("b", 2.0))]) {
            Err(FflError::InvalidMatchup { week: 0, .. }) => (),
            other => panic!("expected week 0 rejection, got {other:?}"),
        }
    }
}
