//! Session file helpers.

use std::{fs, io, path::Path};

/// Contents of the session file, or `None` when it is missing or unreadable.
/// A missing file just means nobody has signed in yet.
pub fn try_read_to_string(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// Replace the session file, creating its config directory on first use.
pub fn write_string(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, contents)
}
