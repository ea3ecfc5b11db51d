use std::io::Write;
use std::sync::Arc;

use concept_album_explorer::data::filter::{FacetSelection, filter};
use concept_album_explorer::data::loader::CatalogLoader;
use concept_album_explorer::data::model::{Facet, FacetChoice};
use concept_album_explorer::data::preview::derive_preview;
use concept_album_explorer::state::AppState;

const CATALOG: &str = "\
Artist,Album,Genre,Era,Link
Pink Floyd,The Wall,Rock,1970s,https://music.youtube.com/watch?v=wall
Marvin Gaye,What's Going On,Soul,1970s,https://music.youtube.com/watch?v=wgo
Kendrick Lamar,good kid m.A.A.d city,Hip-Hop,2010s,https://music.youtube.com/watch?v=gkmc
";

fn catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(CATALOG.as_bytes()).expect("write csv");
    file.flush().expect("flush csv");
    file
}

#[test]
fn load_filter_and_preview() {
    let file = catalog_file();
    let mut loader = CatalogLoader::new();
    let catalog = loader.load(file.path()).expect("load catalog");

    let rock = FacetSelection::default().with(Facet::Genre, FacetChoice::only("Rock"));
    let view = filter(catalog.records(), &rock);
    assert_eq!(view.len(), 1);

    let preview = derive_preview(view[0]);
    assert_eq!(preview.caption, "Pink Floyd – The Wall");
    assert_eq!(
        preview.artwork_url,
        "https://img.youtube.com/vi/Pink+Floyd+The+Wall/hqdefault.jpg"
    );
    assert_eq!(preview.link, "https://music.youtube.com/watch?v=wall");

    let jazz = FacetSelection::default().with(Facet::Genre, FacetChoice::only("Jazz"));
    assert!(filter(catalog.records(), &jazz).is_empty());
}

#[test]
fn app_state_reuses_cached_catalog() {
    let file = catalog_file();
    let mut state = AppState::default();
    state.open(file.path()).expect("open");
    let first = Arc::clone(state.catalog.as_ref().expect("catalog"));

    state.set_facet(Facet::Era, FacetChoice::only("1970s"));
    assert_eq!(state.visible_titles(), ["The Wall", "What's Going On"]);

    // Opening the same file again hands back the cached catalog and resets facets.
    state.open(file.path()).expect("reopen");
    let second = state.catalog.as_ref().expect("catalog");
    assert!(Arc::ptr_eq(&first, second));
    assert!(state.selection.is_unconstrained());
    assert_eq!(state.visible_indices.len(), 3);
}

#[test]
fn state_reports_missing_columns() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"Artist,Album\nA,B\n").expect("write");
    file.flush().expect("flush");

    let mut state = AppState::default();
    let err = state.open(file.path()).expect_err("missing columns");
    assert!(format!("{err:#}").contains("Genre, Era, Link"));
    assert!(state.catalog.is_none());
    assert!(state.status_message.is_some());
}
