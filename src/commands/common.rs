//! Common utilities and helper functions shared across commands.
//!
//! [`CommandContext`] hides where league data comes from (the bundled sample
//! or the upstream API) so the handlers only deal with matchups and standings.

use reqwest::{header::HeaderMap, Client};
use serde::Serialize;
use tracing::info;

use crate::{
    cli::LeagueArgs,
    core::{
        bearer_header_map, load_access_token, resolve_base_url, AccessToken,
        ACCESS_TOKEN_ENV_VAR,
    },
    fixtures::SampleLeague,
    league::{validate_week, Matchup, TeamStanding},
    yahoo::{get_scoreboard, get_standings, parse_scoreboard, parse_standings},
    FflError, LeagueKey, Result, Week, API_BASE_URL_ENV_VAR,
};

use super::resolve_league_key;

/// Where league data is read from
pub enum DataSource {
    Sample(SampleLeague),
    Upstream {
        client: Client,
        base_url: String,
        headers: HeaderMap,
        league_key: LeagueKey,
    },
}

/// Context containing the data source every command reads from
pub struct CommandContext {
    pub source: DataSource,
}

impl CommandContext {
    /// Resolve league key, session token and base URL from flags and environment.
    pub fn new(args: &LeagueArgs) -> Result<Self> {
        if args.sample {
            return Self::sample();
        }

        let league_key = resolve_league_key(args.league_key.clone())?;
        let token = load_access_token().ok_or_else(|| FflError::MissingAccessToken {
            env_var: ACCESS_TOKEN_ENV_VAR.to_string(),
        })?;
        let base_url = resolve_base_url(std::env::var(API_BASE_URL_ENV_VAR).ok());
        Self::upstream(league_key, &token, base_url)
    }

    pub fn sample() -> Result<Self> {
        info!("using bundled sample league");
        Ok(Self {
            source: DataSource::Sample(SampleLeague::load()?),
        })
    }

    pub fn upstream(league_key: LeagueKey, token: &AccessToken, base_url: String) -> Result<Self> {
        info!(%league_key, %base_url, "using upstream league");
        Ok(Self {
            source: DataSource::Upstream {
                client: Client::builder().user_agent("ffl-insights/0.1").build()?,
                base_url,
                headers: bearer_header_map(token)?,
                league_key,
            },
        })
    }

    /// One validated week of matchups; `None` means the current week.
    pub async fn fetch_week(&self, week: Option<Week>) -> Result<Vec<Matchup>> {
        let matchups = match &self.source {
            DataSource::Sample(league) => match week.or_else(|| league.latest_week()) {
                Some(w) => league.week(w),
                None => Vec::new(),
            },
            DataSource::Upstream {
                client,
                base_url,
                headers,
                league_key,
            } => {
                info!(week = ?week, "fetching scoreboard");
                let payload =
                    get_scoreboard(client, base_url, headers.clone(), league_key, week).await?;
                parse_scoreboard(&payload)?
            }
        };

        validate_week(&matchups)?;
        Ok(matchups)
    }

    pub async fn fetch_standings(&self) -> Result<Vec<TeamStanding>> {
        match &self.source {
            DataSource::Sample(league) => Ok(league.standings.clone()),
            DataSource::Upstream {
                client,
                base_url,
                headers,
                league_key,
            } => {
                info!("fetching standings");
                let payload = get_standings(client, base_url, headers.clone(), league_key).await?;
                parse_standings(&payload)
            }
        }
    }

    /// Validated matchups for weeks 1 through `through`, inclusive. The
    /// upstream is asked one week at a time.
    pub async fn fetch_matchups_through(&self, through: Week) -> Result<Vec<Matchup>> {
        match &self.source {
            DataSource::Sample(league) => {
                // duplicate checks are keyed by week, so one pass covers every week
                let matchups = league.matchups_through(through);
                validate_week(&matchups)?;
                Ok(matchups)
            }
            DataSource::Upstream { .. } => {
                let mut all = Vec::new();
                for week in through.through() {
                    all.extend(self.fetch_week(Some(week)).await?);
                }
                Ok(all)
            }
        }
    }
}

/// Print either pretty JSON of `value` or the narrative `lines`.
pub fn emit<T: Serialize>(as_json: bool, value: &T, lines: &[String]) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}

/// The week a set of matchups belongs to, falling back to the request.
pub fn week_label(requested: Option<Week>, matchups: &[Matchup]) -> String {
    requested
        .or_else(|| matchups.first().map(|m| m.week))
        .map_or_else(|| "current week".to_string(), |w| format!("Week {w}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::Side;

    #[tokio::test]
    async fn test_sample_context_defaults_to_latest_week() {
        let ctx = CommandContext::sample().unwrap();

        let latest = ctx.fetch_week(None).await.unwrap();
        assert_eq!(latest.len(), 5);
        assert!(latest.iter().all(|m| m.week == Week::new(3)));

        let first = ctx.fetch_week(Some(Week::new(1))).await.unwrap();
        assert!(first.iter().all(|m| m.week == Week::new(1)));

        assert!(ctx.fetch_week(Some(Week::new(12))).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sample_context_standings_and_history() {
        let ctx = CommandContext::sample().unwrap();

        assert_eq!(ctx.fetch_standings().await.unwrap().len(), 10);
        assert_eq!(ctx.fetch_matchups_through(Week::new(2)).await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_sample_history_matches_bundled_league() {
        let ctx = CommandContext::sample().unwrap();
        let league = SampleLeague::load().unwrap();

        let history = ctx.fetch_matchups_through(Week::new(3)).await.unwrap();
        assert_eq!(history, league.matchups_through(Week::new(3)));
        assert!(history.windows(2).all(|w| w[0].week <= w[1].week));

        // past the last played week there is nothing more to add
        let beyond = ctx.fetch_matchups_through(Week::new(17)).await.unwrap();
        assert_eq!(beyond, history);
    }

    #[test]
    fn test_new_with_sample_flag_needs_no_token() {
        let args = LeagueArgs {
            sample: true,
            ..LeagueArgs::default()
        };
        let ctx = CommandContext::new(&args).unwrap();
        assert!(matches!(ctx.source, DataSource::Sample(_)));
    }

    #[test]
    fn test_week_label() {
        let m = Matchup::new(Week::new(6), Side::new("a", "A", 1.0), Side::new("b", "B", 2.0));

        assert_eq!(week_label(Some(Week::new(2)), &[m.clone()]), "Week 2");
        assert_eq!(week_label(None, &[m]), "Week 6");
        assert_eq!(week_label(None, &[]), "current week");
    }

    #[test]
    fn test_emit_json_and_lines() {
        assert!(emit(true, &vec![1, 2], &[]).is_ok());
        assert!(emit(false, &(), &["line".to_string()]).is_ok());
    }
}
