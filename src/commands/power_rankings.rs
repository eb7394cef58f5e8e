//! Power rankings command implementation

use crate::{
    insights::{
        narrative::power_ranking_lines,
        rankings::{power_rankings, PowerRanking},
    },
    Result,
};

use super::common::{emit, CommandContext};

pub async fn handle_power_rankings(ctx: &CommandContext, as_json: bool) -> Result<Vec<PowerRanking>> {
    let standings = ctx.fetch_standings().await?;
    let rankings = power_rankings(&standings);

    emit(as_json, &rankings, &power_ranking_lines(&rankings))?;
    Ok(rankings)
}
