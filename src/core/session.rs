//! Session token storage and lookup.
//!
//! The OAuth sign-in itself happens elsewhere; this module keeps the
//! resulting access token in a session file and finds it again, with the
//! environment taking precedence.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::files::{try_read_to_string, write_string};
use crate::Result;

pub const ACCESS_TOKEN_ENV_VAR: &str = "FFL_ACCESS_TOKEN";

/// An OAuth access token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Path: <config dir>/ffl-insights/token
pub fn session_token_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("ffl-insights").join("token")
}

/// Find the signed-in user's access token, or `None` when there is no session.
pub fn load_access_token() -> Option<AccessToken> {
    load_access_token_from(
        std::env::var(ACCESS_TOKEN_ENV_VAR).ok(),
        &session_token_path(),
    )
}

/// The environment value wins when non-blank; otherwise the first non-blank
/// line of the session file.
pub fn load_access_token_from(env_value: Option<String>, session_file: &Path) -> Option<AccessToken> {
    if let Some(token) = env_value.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        debug!("using access token from {}", ACCESS_TOKEN_ENV_VAR);
        return Some(AccessToken::new(token));
    }

    let contents = try_read_to_string(session_file)?;
    let token = contents.lines().map(str::trim).find(|l| !l.is_empty())?;
    debug!("using access token from {}", session_file.display());
    Some(AccessToken::new(token))
}

/// Store a token as the session, replacing any previous one.
pub fn save_access_token(token: &AccessToken, session_file: &Path) -> Result<()> {
    write_string(session_file, &format!("{}\n", token.secret()))?;
    debug!("saved access token to {}", session_file.display());
    Ok(())
}

/// Remove the session file. Returns whether one existed.
pub fn clear_access_token(session_file: &Path) -> Result<bool> {
    match std::fs::remove_file(session_file) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
