//! Scoreboard command implementation

use crate::{insights::narrative::matchup_lines, league::Matchup, Result, Week};

use super::common::{emit, CommandContext};

/// Print one week's matchups.
pub async fn handle_matchups(
    ctx: &CommandContext,
    week: Option<Week>,
    as_json: bool,
) -> Result<Vec<Matchup>> {
    let matchups = ctx.fetch_week(week).await?;
    emit(as_json, &matchups, &matchup_lines(&matchups))?;
    Ok(matchups)
}
