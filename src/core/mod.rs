//! Core utilities for the fantasy football insights CLI
//!
//! - `files`: small file read/write helpers
//! - `http`: upstream base URL and request headers
//! - `session`: access token lookup and storage

pub mod files;
pub mod http;
pub mod session;

// Re-export commonly used items for convenience
pub use http::{bearer_header_map, resolve_base_url, FANTASY_BASE_URL};
pub use session::{load_access_token, AccessToken, ACCESS_TOKEN_ENV_VAR};
