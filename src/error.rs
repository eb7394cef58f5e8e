//! Error types for the fantasy football insights CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FflError>;

#[derive(Error, Debug)]
pub enum FflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League key not provided and {env_var} environment variable not set")]
    MissingLeagueKey { env_var: String },

    #[error("Invalid league key {key:?} (expected e.g. `nfl.l.12345`)")]
    InvalidLeagueKey { key: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("No access token: set {env_var} or sign in to create a session file")]
    MissingAccessToken { env_var: String },

    #[error("Unexpected upstream payload: {context}")]
    UnexpectedPayload { context: String },

    #[error("Invalid matchup in week {week}: {reason}")]
    InvalidMatchup { week: u16, reason: String },

    #[error("Upstream API returned no data")]
    NoData,
}

impl FflError {
    pub(crate) fn payload(context: impl Into<String>) -> Self {
        FflError::UnexpectedPayload {
            context: context.into(),
        }
    }
}
