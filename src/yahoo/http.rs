//! Read-only wrappers around the two league resources the insights need.

use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::debug;

use crate::{LeagueKey, Result, Week};


/// `GET {base}/league/{key}/scoreboard[;week={w}]?format=json`
///
/// Without a week the upstream answers with the league's current week.
pub async fn get_scoreboard(
    client: &Client,
    base_url: &str,
    headers: HeaderMap,
    league_key: &LeagueKey,
    week: Option<Week>,
) -> Result<Value> {
    let mut url = format!("{base_url}/league/{league_key}/scoreboard");
    if let Some(w) = week {
        url.push_str(&format!(";week={w}"));
    }
    get_json(client, &url, headers).await
}

/// `GET {base}/league/{key}/standings?format=json`
pub async fn get_standings(
    client: &Client,
    base_url: &str,
    headers: HeaderMap,
    league_key: &LeagueKey,
) -> Result<Value> {
    let url = format!("{base_url}/league/{league_key}/standings");
    get_json(client, &url, headers).await
}

async fn get_json(client: &Client, url: &str, headers: HeaderMap) -> Result<Value> {
    debug!(url, "GET");

    let res = client
        .get(url)
        .headers(headers)
        .query(&[("format", "json")])
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}
