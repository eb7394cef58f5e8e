//! Weekly insights command implementation

use crate::{
    insights::{narrative::weekly_lines, weekly_insights},
    league::WeeklyInsights,
    Result, Week,
};

use super::common::{emit, week_label, CommandContext};

/// Derive and print team of the week, blowout, closest game and upsets.
pub async fn handle_insights(
    ctx: &CommandContext,
    week: Option<Week>,
    as_json: bool,
) -> Result<WeeklyInsights> {
    let matchups = ctx.fetch_week(week).await?;
    let standings = ctx.fetch_standings().await?;

    let insights = weekly_insights(&matchups, &standings);

    let mut lines = vec![format!("{} insights", week_label(week, &matchups))];
    lines.extend(weekly_lines(&insights));
    emit(as_json, &insights, &lines)?;

    Ok(insights)
}
