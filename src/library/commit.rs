use std::fs;
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::tags::{self, TagEdit, TagError};

use super::catalog::{Catalog, UnknownPath};
use super::model::Song;

/// Why a commit was rejected.
///
/// Whenever one of these comes back the catalog entry is unchanged and the
/// file keeps its previous tag and name.
#[derive(Debug, Error)]
pub enum CommitError {
    #[error("song has an empty path")]
    EmptyPath,
    #[error("song has an empty display name")]
    EmptyDisplayName,
    #[error(transparent)]
    UnknownPath(#[from] UnknownPath),
    #[error(transparent)]
    Tag(#[from] TagError),
}

impl Catalog {
    /// Persist an edited song: write its fields into the file's tag, rename
    /// the file to the (possibly changed) display name, and update the
    /// catalog entry in place.
    ///
    /// The rename is best-effort. When it fails the tag edit has already
    /// landed, so the commit still succeeds and `path` keeps the old name;
    /// the failure is only logged. A crash between tag write and rename
    /// likewise leaves the file under its old name with the new tags.
    pub fn commit(&mut self, song: Song) -> Result<(), CommitError> {
        if song.path.is_empty() {
            return Err(CommitError::EmptyPath);
        }
        if song.display_name.is_empty() {
            return Err(CommitError::EmptyDisplayName);
        }
        let index = self.index_of(&song.path).ok_or_else(|| UnknownPath {
            path: song.path.clone(),
        })?;

        let mut song = song;
        let file = self.source_dir.join(&song.path);
        tags::write(
            &file,
            TagEdit {
                artist: &song.artist,
                album: &song.album,
                genre: &song.genre,
                track_number: song.track_number,
                year: song.year,
            },
        )?;

        if song.display_name != song.path {
            self.rename_committed(&mut song, &file);
        }

        // The formatted duration is derived at ingest and never recomputed.
        song.duration_text = self.songs[index].duration_text.clone();
        self.songs[index] = song;
        Ok(())
    }

    fn rename_committed(&self, song: &mut Song, from: &Path) {
        // `path` must stay unique, and a rename onto an existing file would
        // silently replace it. Refuse and keep the old name instead.
        let target = self.source_dir.join(&song.display_name);
        if target.exists() || self.index_of(&song.display_name).is_some() {
            warn!(
                "tags for {} saved, keeping old name: {:?} already exists",
                from.display(),
                song.display_name
            );
            return;
        }
        match fs::rename(from, &target) {
            Ok(()) => {
                debug!("renamed {} -> {}", from.display(), target.display());
                song.path = song.display_name.clone();
            }
            Err(err) => {
                warn!(
                    "tags for {} saved but rename to {:?} failed: {err}",
                    from.display(),
                    song.display_name
                );
            }
        }
    }
}
