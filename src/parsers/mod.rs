//! Export parsing
//!
//! # Error Handling Strategy
//!
//! Parsing is all-or-nothing at the archive level and forgiving at the node
//! level:
//!
//! - **Archive failures**: an unreadable file, invalid JSON, or a top-level
//!   value of the wrong shape is a [`LoadError`](crate::error::LoadError).
//!   No partial archive is returned.
//!
//! - **Node defaults**: a missing title becomes "No Title", a missing mapping
//!   is empty, and a missing or malformed `create_time`, `message`, role, or
//!   content fragment is defaulted in [`deserializers`]. These are logged at
//!   `trace` and never surface as errors, so one odd node cannot hide a whole
//!   export.

pub mod archive;
pub mod deserializers;

pub use archive::{load_archive, parse_archive};
