//! Upstream fantasy sports API: thin HTTP wrappers and payload mapping.

pub mod http;
pub mod parse;

pub use http::{get_scoreboard, get_standings};
pub use parse::{parse_scoreboard, parse_standings};
