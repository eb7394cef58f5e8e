//! Key types for fantasy leagues and teams.

use crate::error::{FflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for upstream league keys.
///
/// A league key is `<game>.l.<league id>`, where the game part is either a
/// game code (`nfl`) or a numeric game id for a specific season (`449`).
///
/// # Examples
///
/// ```rust
/// use ffl_insights::LeagueKey;
///
/// let key: LeagueKey = "nfl.l.12345".parse().unwrap();
/// assert_eq!(key.as_str(), "nfl.l.12345");
/// assert_eq!(key.league_id(), "12345");
/// assert!("12345".parse::<LeagueKey>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LeagueKey(String);

impl LeagueKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The game segment (`nfl`, `449`, ...).
    pub fn game(&self) -> &str {
        self.0.split(".l.").next().unwrap_or_default()
    }

    /// The numeric league segment.
    pub fn league_id(&self) -> &str {
        self.0.rsplit(".l.").next().unwrap_or_default()
    }
}

impl fmt::Display for LeagueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueKey {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || FflError::InvalidLeagueKey { key: s.to_string() };

        let (game, id) = s.split_once(".l.").ok_or_else(invalid)?;
        let game_ok = !game.is_empty() && game.chars().all(|c| c.is_ascii_alphanumeric());
        let id_ok = !id.is_empty() && id.chars().all(|c| c.is_ascii_digit());
        if game_ok && id_ok {
            Ok(Self(s.to_string()))
        } else {
            Err(invalid())
        }
    }
}

impl TryFrom<String> for LeagueKey {
    type Error = FflError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LeagueKey> for String {
    fn from(key: LeagueKey) -> String {
        key.0
    }
}

/// Type-safe wrapper for team keys (`nfl.l.12345.t.3`).
///
/// Team keys are opaque identifiers. Construction accepts any string;
/// blank keys and duplicates within a week are rejected by
/// [`crate::league::validate_week`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamKey(String);

impl TeamKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TeamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TeamKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<TeamKey> for String {
    fn from(key: TeamKey) -> String {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_key_parse_game_code() {
        let key: LeagueKey = "nfl.l.12345".parse().unwrap();
        assert_eq!(key.game(), "nfl");
        assert_eq!(key.league_id(), "12345");
        assert_eq!(key.to_string(), "nfl.l.12345");
    }

    #[test]
    fn test_league_key_parse_numeric_game_and_whitespace() {
        let key: LeagueKey = "  449.l.7 ".parse().unwrap();
        assert_eq!(key.as_str(), "449.l.7");
        assert_eq!(key.game(), "449");
    }

    #[test]
    fn test_league_key_rejects_malformed() {
        for bad in ["", "12345", "nfl.l.", ".l.12", "nfl.l.12a", "nfl.t.12", "n-f.l.1"] {
            match bad.parse::<LeagueKey>() {
                Err(FflError::InvalidLeagueKey { .. }) => (),
                other => panic!("expected InvalidLeagueKey for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_league_key_serde() {
        let key: LeagueKey = serde_json::from_str("\"nfl.l.99\"").unwrap();
        assert_eq!(key.league_id(), "99");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"nfl.l.99\"");
        assert!(serde_json::from_str::<LeagueKey>("\"bogus\"").is_err());
    }

    #[test]
    fn test_team_key_basics() {
        let key = TeamKey::new("nfl.l.1.t.3");
        assert_eq!(key.as_str(), "nfl.l.1.t.3");
        assert!(!key.is_empty());
        assert!(TeamKey::from("  ").is_empty());
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"nfl.l.1.t.3\"");
        assert_eq!(String::from(key), "nfl.l.1.t.3");
    }

    #[test]
    fn test_blank_team_key_deserializes_but_reports_empty() {
        let key: TeamKey = serde_json::from_str("\"   \"").unwrap();
        assert!(key.is_empty());
        assert!(TeamKey::new("").is_empty());
    }
}
