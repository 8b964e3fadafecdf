use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::utils::paths::expand_tilde;

/// Environment variable that points at the archive when `--file` is absent
pub const ARCHIVE_PATH_ENV: &str = "CHAT_ARCHIVE_PATH";

/// File name looked up in the home directory as a last resort
pub const DEFAULT_ARCHIVE_NAME: &str = "conversations.json";

/// Resolve the archive location
///
/// Precedence: explicit path, then `CHAT_ARCHIVE_PATH`, then
/// `$HOME/conversations.json`.
pub fn resolve_archive_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_archive_path_from(explicit, env::var(ARCHIVE_PATH_ENV).ok(), env::var("HOME").ok())
}

pub(crate) fn resolve_archive_path_from(
    explicit: Option<PathBuf>,
    from_env: Option<String>,
    home: Option<String>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(value) = from_env
        && !value.trim().is_empty()
    {
        return Ok(expand_tilde(value.trim()));
    }

    let home = home
        .filter(|h| !h.is_empty())
        .context("HOME environment variable not set; pass --file or set CHAT_ARCHIVE_PATH")?;
    Ok(PathBuf::from(home).join(DEFAULT_ARCHIVE_NAME))
}
