use super::model::AlbumRecord;

const ARTWORK_PREFIX: &str = "https://img.youtube.com/vi/";
const ARTWORK_SUFFIX: &str = "/hqdefault.jpg";

// ---------------------------------------------------------------------------
// PreviewData – what the preview panel shows for one album
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewData {
    pub artwork_url: String,
    /// `"{artist} – {album}"`
    pub caption: String,
    pub genre: String,
    pub era: String,
    pub link: String,
}

/// Build the preview fields for a record. Pure string work, no I/O.
pub fn derive_preview(record: &AlbumRecord) -> PreviewData {
    PreviewData {
        artwork_url: artwork_url(&record.artist, &record.album),
        caption: format!("{} – {}", record.artist, record.album),
        genre: record.genre.clone(),
        era: record.era.clone(),
        link: record.link.clone(),
    }
}

/// Thumbnail URL keyed by the "{artist} {album}" search text.
///
/// The text is quoted as a URL path segment (`/` left alone), then encoded
/// spaces become `+`. Thumbnails are keyed by video id upstream, so most of
/// these URLs will not resolve; the format is kept for compatibility.
pub fn artwork_url(artist: &str, album: &str) -> String {
    let query = format!("{artist} {album}");
    let encoded = urlencoding::encode(&query)
        .replace("%2F", "/")
        .replace("%20", "+");
    format!("{ARTWORK_PREFIX}{encoded}{ARTWORK_SUFFIX}")
}

/// First record of `view` whose album title is `title`.
pub fn select_preview<'a, I>(view: I, title: &str) -> Option<&'a AlbumRecord>
where
    I: IntoIterator<Item = &'a AlbumRecord>,
{
    view.into_iter().find(|rec| rec.album == title)
}
