//! Login/logout commands: store or remove the session token.

use std::path::Path;

use crate::{
    core::session::{clear_access_token, save_access_token, AccessToken},
    FflError, Result, ACCESS_TOKEN_ENV_VAR,
};

/// Save an access token obtained from the platform's OAuth sign-in.
pub fn handle_login(token: &str, session_file: &Path) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Err(FflError::MissingAccessToken {
            env_var: ACCESS_TOKEN_ENV_VAR.to_string(),
        });
    }

    save_access_token(&AccessToken::new(token), session_file)?;
    println!("✓ Session saved to {}", session_file.display());
    Ok(())
}

pub fn handle_logout(session_file: &Path) -> Result<()> {
    if clear_access_token(session_file)? {
        println!("✓ Signed out");
    } else {
        println!("No session to clear");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::load_access_token_from;
    use tempfile::TempDir;

    #[test]
    fn test_login_logout_cycle() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("token");

        handle_login("  tok-1  ", &file).unwrap();
        assert_eq!(load_access_token_from(None, &file).unwrap().secret(), "tok-1");

        handle_logout(&file).unwrap();
        assert!(load_access_token_from(None, &file).is_none());
        handle_logout(&file).unwrap();
    }

    #[test]
    fn test_login_rejects_blank_token() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            handle_login("   ", &dir.path().join("token")),
            Err(FflError::MissingAccessToken { .. })
        ));
    }
}
