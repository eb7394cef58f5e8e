//! Standings command implementation

use crate::{insights::narrative::standings_lines, league::TeamStanding, FflError, Result};

use super::common::{emit, CommandContext};

/// Print the standings table in upstream order.
pub async fn handle_standings(ctx: &CommandContext, as_json: bool) -> Result<Vec<TeamStanding>> {
    let standings = ctx.fetch_standings().await?;
    if standings.is_empty() {
        return Err(FflError::NoData);
    }

    emit(as_json, &standings, &standings_lines(&standings))?;
    Ok(standings)
}
