pub mod environment;
pub mod paths;
pub mod terminal;
pub mod timestamps;

pub use environment::{ARCHIVE_PATH_ENV, resolve_archive_path};
pub use paths::{
    MAX_ARCHIVE_SIZE_BYTES, expand_tilde, format_path_with_tilde, open_archive_file,
    validate_file_size,
};
pub use terminal::strip_ansi_codes;
