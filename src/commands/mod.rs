//! Command implementations for the fantasy football insights CLI

pub mod common;
pub mod insights;
pub mod matchups;
pub mod power_rankings;
pub mod schedule_strength;
pub mod session;
pub mod standings;

use crate::{FflError, LeagueKey, Result, LEAGUE_KEY_ENV_VAR};

/// Resolve the league key from the flag or the environment variable.
pub fn resolve_league_key(league_key: Option<LeagueKey>) -> Result<LeagueKey> {
    resolve_league_key_from(league_key, std::env::var(LEAGUE_KEY_ENV_VAR).ok())
}

/// The explicit key wins; a set but malformed environment value is an error
/// rather than silently ignored.
pub fn resolve_league_key_from(
    league_key: Option<LeagueKey>,
    env_value: Option<String>,
) -> Result<LeagueKey> {
    if let Some(key) = league_key {
        return Ok(key);
    }

    match env_value.filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.parse(),
        None => Err(FflError::MissingLeagueKey {
            env_var: LEAGUE_KEY_ENV_VAR.to_string(),
        }),
    }
}
