/// One successfully ingested audio file.
///
/// `path` is the record's identity: the bare file name it was scanned under,
/// unique within its catalog. `display_name` starts out equal to `path` and
/// is what the user edits; the two only differ between an edit and the commit
/// that renames the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub display_name: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    /// 0 = absent in the source tag.
    pub track_number: u32,
    /// 0 = absent in the source tag.
    pub year: u32,
    /// Formatted once at ingest; commits keep the stored value.
    pub duration_text: String,
    pub path: String,
}
