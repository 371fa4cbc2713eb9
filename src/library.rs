//! The catalog core: song model, directory scan, query layer, edit commit.

mod catalog;
mod commit;
mod duration;
mod model;
mod scan;

pub use catalog::{Catalog, UnknownPath};
pub use commit::CommitError;
pub use duration::format_duration;
pub use model::Song;
pub use scan::IngestError;
