//! shellac — an in-memory catalog over a directory of tagged audio files.
//!
//! The crate scans a source directory, reads each file's embedded tag into a
//! [`Song`] record, and holds the results in a [`Catalog`] that answers
//! filter and facet queries. Edits go back through [`Catalog::commit`], which
//! persists the changed fields into the file's tag, renames the file to match
//! an updated display name, and updates the in-memory entry.
//!
//! There is no front end here: a CLI or GUI is expected to own a `Catalog`
//! and drive it through the query and commit operations.

pub mod config;
pub mod library;
pub mod tags;

pub use library::{Catalog, CommitError, IngestError, Song, UnknownPath, format_duration};
pub use tags::{SongTags, TagError};
