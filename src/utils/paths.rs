use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Maximum archive size: 512 MiB
pub const MAX_ARCHIVE_SIZE_BYTES: u64 = 512 * 1024 * 1024;

/// Open the archive file and check its size on the open handle
///
/// Checking the handle rather than the path avoids a TOCTOU gap between the
/// size check and the read.
pub fn open_archive_file(path: &Path) -> Result<File, LoadError> {
    let file = File::open(path)
        .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    validate_file_size(&file, path, MAX_ARCHIVE_SIZE_BYTES)?;
    Ok(file)
}

/// Validates that an open file is no larger than `max` bytes
///
/// # Errors
///
/// Returns [`LoadError::Open`] if metadata cannot be read and
/// [`LoadError::TooLarge`] if the file exceeds `max`.
pub fn validate_file_size(file: &File, path: &Path, max: u64) -> Result<(), LoadError> {
    let metadata =
        file.metadata().map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;

    let size = metadata.len();
    if size > max {
        return Err(LoadError::TooLarge { path: path.to_path_buf(), size, max });
    }

    Ok(())
}

/// Expand a leading `~` or `~/` to the home directory
///
/// Paths without a tilde, and paths where no home directory is known, are
/// returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_internal(path, dirs::home_dir())
}

pub(crate) fn expand_tilde_internal(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use chat_archive_explorer::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/conversations.json");
/// // Returns "~/conversations.json" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
