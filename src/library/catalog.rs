use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{LibrarySettings, Settings};

use super::model::Song;
use super::scan;

/// A `path` was named that no catalog entry carries.
///
/// Hitting this from [`Catalog::replace`] means the caller is holding a
/// record from a previous scan generation.
#[derive(Debug, Clone, Error)]
#[error("no catalog entry with path {path:?}")]
pub struct UnknownPath {
    pub path: String,
}

/// The in-memory catalog: an ordered list of [`Song`] records scanned from
/// one source directory.
///
/// Order is directory-listing order at scan time and stays stable across
/// edits; commits replace entries in place, never reorder, append or remove.
/// Every mutating operation takes `&mut self`, so a caller sharing the
/// catalog across threads has to provide its own lock — the crate itself
/// assumes a single caller.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(super) songs: Vec<Song>,
    pub(super) source_dir: PathBuf,
    pub(super) settings: LibrarySettings,
}

impl Catalog {
    /// Scan `dir` into a fresh catalog.
    ///
    /// Never fails: a missing or unreadable directory yields an empty
    /// catalog, and per-file failures are logged and skipped.
    pub fn build(dir: &Path, settings: &LibrarySettings) -> Self {
        Self {
            songs: scan::scan(dir, settings),
            source_dir: dir.to_path_buf(),
            settings: settings.clone(),
        }
    }

    /// Build from loaded [`Settings`], falling back to the current working
    /// directory when no `library.source_dir` is configured.
    pub fn from_settings(settings: &Settings) -> std::io::Result<Self> {
        let dir = match &settings.library.source_dir {
            Some(d) => d.clone(),
            None => std::env::current_dir()?,
        };
        Ok(Self::build(&dir, &settings.library))
    }

    /// Throw away the current records and rescan the source directory.
    pub fn rescan(&mut self) {
        self.songs = scan::scan(&self.source_dir, &self.settings);
    }

    /// Point the catalog at a new directory and rebuild from scratch.
    /// In-memory edits that were never committed are discarded.
    pub fn set_source_dir(&mut self, dir: &Path) {
        self.source_dir = dir.to_path_buf();
        self.rescan();
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// All records, in scan order.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Exact, case-sensitive album match.
    pub fn find_by_album(&self, album: &str) -> Vec<&Song> {
        self.songs.iter().filter(|s| s.album == album).collect()
    }

    /// Exact, case-sensitive artist match.
    pub fn find_by_artist(&self, artist: &str) -> Vec<&Song> {
        self.songs.iter().filter(|s| s.artist == artist).collect()
    }

    /// Exact, case-sensitive genre match.
    pub fn find_by_genre(&self, genre: &str) -> Vec<&Song> {
        self.songs.iter().filter(|s| s.genre == genre).collect()
    }

    pub fn find_by_year(&self, year: u32) -> Vec<&Song> {
        self.songs.iter().filter(|s| s.year == year).collect()
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// `None` and `Some("")` both mean "no filter requested" and return the
    /// whole catalog.
    pub fn find_by_name(&self, query: Option<&str>) -> Vec<&Song> {
        match query {
            None | Some("") => self.songs.iter().collect(),
            Some(q) => {
                let q = q.to_lowercase();
                self.songs
                    .iter()
                    .filter(|s| s.display_name.to_lowercase().contains(&q))
                    .collect()
            }
        }
    }

    /// Distinct artists, first-seen order.
    pub fn artists(&self) -> Vec<String> {
        self.distinct(|s| &s.artist)
    }

    /// Distinct albums, first-seen order.
    pub fn albums(&self) -> Vec<String> {
        self.distinct(|s| &s.album)
    }

    /// Distinct genres, first-seen order.
    pub fn genres(&self) -> Vec<String> {
        self.distinct(|s| &s.genre)
    }

    /// Distinct years, ascending, as display strings.
    pub fn years(&self) -> Vec<String> {
        let mut years: Vec<u32> = self
            .songs
            .iter()
            .map(|s| s.year)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort_unstable();
        years.into_iter().map(|y| y.to_string()).collect()
    }

    /// Overwrite the record whose `path` equals `updated.path`, keeping its
    /// position in the sequence.
    pub fn replace(&mut self, updated: Song) -> Result<(), UnknownPath> {
        let index = self.index_of(&updated.path).ok_or_else(|| UnknownPath {
            path: updated.path.clone(),
        })?;
        self.songs[index] = updated;
        Ok(())
    }

    pub(super) fn index_of(&self, path: &str) -> Option<usize> {
        self.songs.iter().position(|s| s.path == path)
    }

    fn distinct<'a>(&'a self, field: impl Fn(&'a Song) -> &'a str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for song in &self.songs {
            let value = field(song);
            if seen.insert(value) {
                out.push(value.to_string());
            }
        }
        out
    }
}
