//! Tag reading/writing boundary over `lofty`.
//!
//! The catalog treats this module as a black box: it either returns the raw
//! string fields of a file's primary tag plus the decoded duration, or it
//! fails with a [`TagError`]. No frame-level decoding happens outside lofty.

use std::path::Path;

use lofty::config::WriteOptions;
use lofty::error::LoftyError;
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::prelude::Accessor;
use lofty::read_from_path;
use lofty::tag::{ItemKey, Tag, TagType};
use thiserror::Error;

/// Failure at the tag boundary.
///
/// The catalog does not distinguish causes beyond read vs. write —
/// unreadable, corrupt, unsupported-format and locked files all surface as
/// `Read`.
#[derive(Debug, Error)]
pub enum TagError {
    #[error("failed to read tags: {0}")]
    Read(#[source] LoftyError),
    #[error("failed to write tags: {0}")]
    Write(#[source] LoftyError),
    #[error("file does not accept {0:?} tags")]
    Unsupported(TagType),
}

/// Raw tag fields as stored in the file, before any catalog-side parsing.
///
/// `track` and `year` stay strings here on purpose: the catalog decides how
/// strictly to parse them. A readable file without any tag yields all-empty
/// fields.
#[derive(Debug, Clone, Default)]
pub struct SongTags {
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub track: String,
    pub year: String,
    pub duration_secs: u64,
}

/// Edited fields to persist into a file's tag.
#[derive(Debug, Clone, Copy)]
pub struct TagEdit<'a> {
    pub artist: &'a str,
    pub album: &'a str,
    pub genre: &'a str,
    pub track_number: u32,
    pub year: u32,
}

/// Read the primary tag and audio properties of `path`.
pub fn read(path: &Path) -> Result<SongTags, TagError> {
    let tagged = read_from_path(path).map_err(TagError::Read)?;
    let duration_secs = tagged.properties().duration().as_secs();
    let tag = tagged.primary_tag().or_else(|| tagged.first_tag());

    let text = |key: ItemKey| {
        tag.and_then(|t| t.get_string(&key))
            .unwrap_or_default()
            .to_string()
    };

    Ok(SongTags {
        artist: text(ItemKey::TrackArtist),
        album: text(ItemKey::AlbumTitle),
        genre: text(ItemKey::Genre),
        track: text(ItemKey::TrackNumber),
        // Formats disagree on where the year lives (TYER vs. TDRC vs. ICRD).
        year: tag
            .and_then(|t| {
                t.get_string(&ItemKey::Year)
                    .or_else(|| t.get_string(&ItemKey::RecordingDate))
            })
            .unwrap_or_default()
            .to_string(),
        duration_secs,
    })
}

/// Persist `edit` into the primary tag of `path` (read-modify-save).
///
/// An empty string or a zero number removes the field instead of writing a
/// placeholder value, so a later [`read`] reports it as absent again.
pub fn write(path: &Path, edit: TagEdit<'_>) -> Result<(), TagError> {
    let mut tagged = read_from_path(path).map_err(TagError::Read)?;
    let tag_type = tagged.primary_tag_type();
    if tagged.tag(tag_type).is_none() {
        tagged.insert_tag(Tag::new(tag_type));
    }
    let tag = tagged
        .tag_mut(tag_type)
        .ok_or(TagError::Unsupported(tag_type))?;

    if edit.artist.is_empty() {
        tag.remove_artist();
    } else {
        tag.set_artist(edit.artist.to_string());
    }
    if edit.album.is_empty() {
        tag.remove_album();
    } else {
        tag.set_album(edit.album.to_string());
    }
    if edit.genre.is_empty() {
        tag.remove_genre();
    } else {
        tag.set_genre(edit.genre.to_string());
    }
    if edit.track_number == 0 {
        tag.remove_track();
    } else {
        tag.set_track(edit.track_number);
    }

    // Write the year under both keys so every container keeps one of them.
    // Vorbis Comments only use DATE; a second YEAR field would duplicate it.
    tag.remove_key(&ItemKey::Year);
    tag.remove_key(&ItemKey::RecordingDate);
    if edit.year != 0 {
        let year = edit.year.to_string();
        tag.insert_text(ItemKey::RecordingDate, year.clone());
        if tag_type != TagType::VorbisComments {
            tag.insert_text(ItemKey::Year, year);
        }
    }

    tagged
        .save_to_path(path, WriteOptions::default())
        .map_err(TagError::Write)?;
    Ok(())
}
