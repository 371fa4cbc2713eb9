use std::path::Path;

use log::{debug, warn};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::tags::{self, TagError};

use super::duration::format_duration;
use super::model::Song;

/// Why a single directory entry failed to become a catalog record.
///
/// These never escape the scan: the entry is logged and skipped, the scan
/// moves on.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file name is not valid UTF-8")]
    NonUtf8Name,
    #[error(transparent)]
    Tag(#[from] TagError),
    #[error("tag field {field} is not numeric: {value:?}")]
    NonNumericField { field: &'static str, value: String },
}

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List `dir` and ingest every readable audio file, in listing order.
///
/// The order is whatever the OS returns for the directory; it is not sorted,
/// and it is the order the catalog preserves across edits. A missing or
/// unreadable directory yields an empty list.
pub(super) fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Song> {
    let mut songs: Vec<Song> = Vec::new();

    // Depth 1 = the directory's own entries only. Records are identified by
    // bare file name, so recursing would let two entries collide on `path`.
    for entry in WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if !settings.include_hidden && is_hidden(path) {
            continue;
        }
        if !is_audio_file(path, settings) {
            continue;
        }
        match ingest(path) {
            Ok(song) => songs.push(song),
            Err(err) => warn!("skipping {}: {err}", path.display()),
        }
    }

    debug!("scanned {}: {} songs", dir.display(), songs.len());
    songs
}

fn ingest(path: &Path) -> Result<Song, IngestError> {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or(IngestError::NonUtf8Name)?
        .to_string();

    let raw = tags::read(path)?;
    let track_number = numeric_field("track", &raw.track)?;
    let year = numeric_field("year", &raw.year)?;

    Ok(Song {
        display_name: name.clone(),
        artist: raw.artist,
        album: raw.album,
        genre: raw.genre,
        track_number,
        year,
        duration_text: format_duration(raw.duration_secs),
        path: name,
    })
}

/// An absent field maps to 0; a present but malformed one is an ingest error.
fn numeric_field(field: &'static str, raw: &str) -> Result<u32, IngestError> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|_| IngestError::NonNumericField {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.wav"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
    }

    #[test]
    fn is_audio_file_tolerates_dots_and_spaces_in_config() {
        let settings = LibrarySettings {
            extensions: vec![".mp3".into(), " ogg ".into(), String::new()],
            ..LibrarySettings::default()
        };
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.wav"), &settings));
    }

    #[test]
    fn is_hidden_looks_at_file_name_only() {
        assert!(is_hidden(Path::new("/music/.cover.mp3")));
        assert!(!is_hidden(Path::new("/music/.hidden-dir/track.mp3")));
    }

    #[test]
    fn numeric_field_maps_empty_to_zero_and_rejects_garbage() {
        assert_eq!(numeric_field("track", "").unwrap(), 0);
        assert_eq!(numeric_field("track", "7").unwrap(), 7);
        assert_eq!(numeric_field("year", "1999").unwrap(), 1999);

        let err = numeric_field("track", "3/12").unwrap_err();
        assert!(matches!(
            err,
            IngestError::NonNumericField { field: "track", .. }
        ));
        assert!(numeric_field("year", "next year").is_err());
    }
}
