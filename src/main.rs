//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::{Context, Result};
use clap::Parser;
use ffl_insights::{
    cli::{Commands, Ffl, LeagueArgs},
    commands::{
        common::CommandContext,
        insights::handle_insights,
        matchups::handle_matchups,
        power_rankings::handle_power_rankings,
        schedule_strength::handle_schedule_strength,
        session::{handle_login, handle_logout},
        standings::handle_standings,
    },
    core::session::session_token_path,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Ffl::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Insights { league, week } => {
            let ctx = context(&league)?;
            handle_insights(&ctx, week, league.json)
                .await
                .context("failed to build weekly insights")?;
        }

        Commands::Matchups { league, week } => {
            let ctx = context(&league)?;
            handle_matchups(&ctx, week, league.json)
                .await
                .context("failed to load matchups")?;
        }

        Commands::Standings { league } => {
            let ctx = context(&league)?;
            handle_standings(&ctx, league.json)
                .await
                .context("failed to load standings")?;
        }

        Commands::PowerRankings { league } => {
            let ctx = context(&league)?;
            handle_power_rankings(&ctx, league.json)
                .await
                .context("failed to build power rankings")?;
        }

        Commands::ScheduleStrength {
            league,
            through_week,
        } => {
            let ctx = context(&league)?;
            handle_schedule_strength(&ctx, through_week, league.json)
                .await
                .context("failed to grade schedules")?;
        }

        Commands::Login { token } => {
            handle_login(&token, &session_token_path()).context("failed to save session")?
        }

        Commands::Logout => handle_logout(&session_token_path()).context("failed to clear session")?,
    }

    Ok(())
}

fn context(league: &LeagueArgs) -> Result<CommandContext> {
    CommandContext::new(league).context("failed to set up league data source")
}

/// `RUST_LOG` wins; otherwise warnings only, or debug output with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,ffl_insights=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}
