use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/shellac/config.toml` or
/// `~/.config/shellac/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SHELLAC__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory to scan into the catalog. `None` leaves the choice to the
    /// front end (current directory, a picker, a CLI argument...).
    pub source_dir: Option<PathBuf>,

    /// File extensions to treat as audio (case-insensitive, without dot).
    /// Entries outside this list are never handed to the tag reader.
    pub extensions: Vec<String>,

    /// Whether to follow symlinks when listing the source directory.
    pub follow_links: bool,

    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            source_dir: None,
            extensions: vec![
                "mp3".into(),
                "flac".into(),
                "wav".into(),
                "ogg".into(),
                "m4a".into(),
            ],
            follow_links: true,
            include_hidden: true,
        }
    }
}
