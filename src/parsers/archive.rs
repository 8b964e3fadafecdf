use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::models::{Archive, Conversation};
use crate::utils::open_archive_file;

/// Load an export file into an [`Archive`]
///
/// The size limit is checked on the open handle before any bytes are read.
/// Either the whole export parses or a [`LoadError`] is returned; a partial
/// archive is never produced.
pub fn load_archive(path: &Path) -> Result<Archive, LoadError> {
    debug!(path = %path.display(), "loading archive");

    let file = open_archive_file(path)?;
    parse_archive(BufReader::new(file))
}

/// Parse an export from any reader
///
/// Records are stored oldest first in the export; the returned archive is
/// reversed so index 0 is the most recent conversation.
pub fn parse_archive<R: Read>(reader: R) -> Result<Archive, LoadError> {
    let conversations: Vec<Conversation> =
        serde_json::from_reader(reader).map_err(LoadError::from_json)?;

    info!(conversations = conversations.len(), "loaded archive");

    Ok(Archive::from_export_order(conversations))
}
