use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::filter::{FacetSelection, filtered_indices};
use crate::data::loader::CatalogLoader;
use crate::data::model::{AlbumRecord, Catalog, Facet, FacetChoice};
use crate::data::preview::{PreviewData, derive_preview, select_preview};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Load-once cache of catalogs by path.
    pub loader: CatalogLoader,

    /// Loaded catalog (None until a file loaded successfully).
    pub catalog: Option<Arc<Catalog>>,

    /// Path the current catalog came from.
    pub source: Option<PathBuf>,

    /// Per-facet choices.
    pub selection: FacetSelection,

    /// Indices of albums passing the current facets (cached).
    pub visible_indices: Vec<usize>,

    /// Album title picked for preview; `None` once it leaves the view.
    pub selected_album: Option<String>,

    /// Colours for the genre column.
    pub genre_colors: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load `path` through the cache and make it the current catalog.
    ///
    /// On failure the previous catalog (if any) stays in place and the error
    /// is kept as the status message.
    pub fn open(&mut self, path: &Path) -> anyhow::Result<()> {
        match self.loader.load(path) {
            Ok(catalog) => {
                self.source = Some(path.to_path_buf());
                self.set_catalog(catalog);
                Ok(())
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("Failed to load catalog: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                Err(e)
            }
        }
    }

    /// Ingest a catalog, reset facets and the preview selection.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.selection = FacetSelection::default();
        self.visible_indices = (0..catalog.len()).collect();
        self.selected_album = None;
        self.genre_colors = Some(ColorMap::new(catalog.domain(Facet::Genre)));
        self.catalog = Some(catalog);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a facet change and drop the preview
    /// selection if its title is no longer visible.
    pub fn refilter(&mut self) {
        let Some(catalog) = &self.catalog else {
            return;
        };
        self.visible_indices = filtered_indices(catalog, &self.selection);

        if let Some(title) = &self.selected_album {
            if select_preview(self.visible_records(), title).is_none() {
                log::debug!("Preview selection {title:?} left the view");
                self.selected_album = None;
            }
        }
    }

    /// Replace the choice for one facet.
    pub fn set_facet(&mut self, facet: Facet, choice: FacetChoice) {
        if self.selection.get(facet) == &choice {
            return;
        }
        self.selection = self.selection.with(facet, choice);
        self.refilter();
    }

    /// Back to "All" on every facet.
    pub fn reset_filters(&mut self) {
        self.selection = FacetSelection::default();
        self.refilter();
    }

    /// Pick an album title from the current view for preview.
    pub fn select_album(&mut self, title: &str) {
        self.selected_album = Some(title.to_string());
    }

    /// Records of the current view, in catalog order.
    pub fn visible_records(&self) -> impl Iterator<Item = &AlbumRecord> + '_ {
        let records = self.catalog.as_deref().map(Catalog::records).unwrap_or(&[]);
        self.visible_indices.iter().filter_map(move |&i| records.get(i))
    }

    /// Album titles offered by the preview picker, in view order.
    pub fn visible_titles(&self) -> Vec<&str> {
        self.visible_records().map(|r| r.album.as_str()).collect()
    }

    /// The record being previewed.
    ///
    /// Without an explicit pick the first visible album is shown, like a
    /// dropdown that defaults to its first entry. Empty view → `None`.
    pub fn preview_record(&self) -> Option<&AlbumRecord> {
        match &self.selected_album {
            Some(title) => select_preview(self.visible_records(), title),
            None => self.visible_records().next(),
        }
    }

    pub fn preview(&self) -> Option<PreviewData> {
        self.preview_record().map(derive_preview)
    }
}
