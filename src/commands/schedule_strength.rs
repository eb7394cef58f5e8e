//! Strength-of-schedule command implementation

use crate::{
    insights::{
        narrative::schedule_lines,
        schedule::{strength_of_schedule, ScheduleStrength},
    },
    Result, Week,
};

use super::common::{emit, CommandContext};

/// Grade every team's opponents from week 1 through `through_week`.
pub async fn handle_schedule_strength(
    ctx: &CommandContext,
    through_week: Week,
    as_json: bool,
) -> Result<Vec<ScheduleStrength>> {
    let matchups = ctx.fetch_matchups_through(through_week).await?;
    let standings = ctx.fetch_standings().await?;

    let strengths = strength_of_schedule(&matchups, &standings);

    let mut lines = vec![format!("Strength of schedule through week {through_week}")];
    lines.extend(schedule_lines(&strengths));
    emit(as_json, &strengths, &lines)?;

    Ok(strengths)
}
