use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use super::model::{AlbumRecord, Catalog};

/// Header columns every catalog file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Artist", "Album", "Genre", "Era", "Link"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal failure while reading a catalog file.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("cannot read the header row of {}", path.display())]
    Headers {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{} is missing required column(s): {}", path.display(), missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },
    #[error("{}: malformed row {row}", path.display())]
    Row {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a catalog CSV in full.
///
/// The header row must contain `Artist, Album, Genre, Era, Link` (any order,
/// extra columns are ignored). Rows keep their file order.
pub fn load_csv(path: &Path) -> Result<Catalog, DataLoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| DataLoadError::Headers {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        });
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<AlbumRecord>().enumerate() {
        let record = result.map_err(|source| DataLoadError::Row {
            path: path.to_path_buf(),
            row: row_no + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(Catalog::from_records(records))
}

// ---------------------------------------------------------------------------
// Load-once cache
// ---------------------------------------------------------------------------

/// Loads catalogs and keeps them for the lifetime of the loader.
///
/// Asking twice for the same source returns the same `Arc` without touching
/// the file again. Failed loads are not cached.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    cache: HashMap<PathBuf, Arc<Catalog>>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, path: &Path) -> Result<Arc<Catalog>, DataLoadError> {
        if let Some(catalog) = self.cache.get(path) {
            log::debug!("Catalog cache hit for {}", path.display());
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(load_csv(path)?);
        log::info!("Loaded {} albums from {}", catalog.len(), path.display());
        self.cache.insert(path.to_path_buf(), Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Whether `path` has already been loaded successfully.
    pub fn is_cached(&self, path: &Path) -> bool {
        self.cache.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::model::Facet;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file.flush().expect("flush temp file");
        file
    }

    const SAMPLE: &str = "\
Artist,Album,Genre,Era,Link
Pink Floyd,The Wall,Rock,1970s,https://music.youtube.com/a
Marvin Gaye,What's Going On,Soul,1970s,https://music.youtube.com/b
Kendrick Lamar,good kid m.A.A.d city,Hip-Hop,2010s,https://music.youtube.com/c
";

    #[test]
    fn loads_rows_in_file_order() {
        let file = write_csv(SAMPLE);
        let catalog = load_csv(file.path()).expect("load");

        assert_eq!(catalog.len(), 3);
        let albums: Vec<&str> = catalog.records().iter().map(|r| r.album.as_str()).collect();
        assert_eq!(albums, ["The Wall", "What's Going On", "good kid m.A.A.d city"]);
        assert_eq!(catalog.records()[1].link, "https://music.youtube.com/b");
        assert_eq!(catalog.domain(Facet::Era).len(), 2);
    }

    #[test]
    fn column_order_and_extra_columns_do_not_matter() {
        let file = write_csv(
            "Link,Era,Notes,Genre,Album,Artist\n\
             https://x,1960s,\"mono, stereo\",Rock,Pet Sounds,The Beach Boys\n",
        );
        let catalog = load_csv(file.path()).expect("load");
        let rec = &catalog.records()[0];
        assert_eq!(rec.artist, "The Beach Boys");
        assert_eq!(rec.album, "Pet Sounds");
        assert_eq!(rec.genre, "Rock");
        assert_eq!(rec.era, "1960s");
        assert_eq!(rec.link, "https://x");
    }

    #[test]
    fn quoted_fields_with_commas_survive() {
        let file = write_csv(
            "Artist,Album,Genre,Era,Link\n\
             \"Crosby, Stills & Nash\",Déjà Vu,Folk Rock,1970s,https://y\n",
        );
        let catalog = load_csv(file.path()).expect("load");
        assert_eq!(catalog.records()[0].artist, "Crosby, Stills & Nash");
        assert_eq!(catalog.records()[0].album, "Déjà Vu");
    }

    #[test]
    fn header_only_file_is_an_empty_catalog() {
        let file = write_csv("Artist,Album,Genre,Era,Link\n");
        let catalog = load_csv(file.path()).expect("load");
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_columns_are_reported() {
        let file = write_csv("Artist,Album,Genre\nA,B,C\n");
        let err = load_csv(file.path()).unwrap_err();
        match &err {
            DataLoadError::MissingColumns { missing, .. } => {
                assert_eq!(missing, &vec!["Era".to_string(), "Link".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("Era, Link"));
    }

    #[test]
    fn header_names_are_case_sensitive() {
        let file = write_csv("artist,album,genre,era,link\na,b,c,d,e\n");
        assert!(matches!(
            load_csv(file.path()),
            Err(DataLoadError::MissingColumns { .. })
        ));
    }

    #[test]
    fn short_row_is_a_row_error() {
        let file = write_csv("Artist,Album,Genre,Era,Link\nA,B,C\n");
        match load_csv(file.path()) {
            Err(DataLoadError::Row { row, .. }) => assert_eq!(row, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_file_fails_to_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.csv");
        assert!(matches!(load_csv(&path), Err(DataLoadError::Open { .. })));
    }

    #[test]
    fn loader_returns_the_same_catalog_for_the_same_source() {
        let file = write_csv(SAMPLE);
        let mut loader = CatalogLoader::new();
        assert!(!loader.is_cached(file.path()));

        let first = loader.load(file.path()).expect("first load");
        // Rewriting the file must not be observed: the source is read once.
        std::fs::write(file.path(), "Artist,Album,Genre,Era,Link\n").expect("rewrite");
        let second = loader.load(file.path()).expect("second load");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 3);
        assert!(loader.is_cached(file.path()));
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("later.csv");
        let mut loader = CatalogLoader::new();
        assert!(loader.load(&path).is_err());
        assert!(!loader.is_cached(&path));

        std::fs::write(&path, SAMPLE).expect("write");
        assert_eq!(loader.load(&path).expect("load").len(), 3);
    }
}
