//! Type-safe wrappers for league, team and week identifiers.

pub mod ids;
pub mod time;

pub use ids::{LeagueKey, TeamKey};
pub use time::Week;
