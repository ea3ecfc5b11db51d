use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AlbumRecord – one row of the catalog
// ---------------------------------------------------------------------------

/// A single concept album (one row of the source CSV).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRecord {
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Album")]
    pub album: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Era")]
    pub era: String,
    /// Fully-qualified URL to a listening page.
    #[serde(rename = "Link")]
    pub link: String,
}

impl AlbumRecord {
    pub fn new(artist: &str, album: &str, genre: &str, era: &str, link: &str) -> Self {
        Self {
            artist: artist.to_string(),
            album: album.to_string(),
            genre: genre.to_string(),
            era: era.to_string(),
            link: link.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Facet – the three filterable columns
// ---------------------------------------------------------------------------

/// One of the independent filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Genre,
    Artist,
    Era,
}

impl Facet {
    /// Display order of the facet selectors.
    pub const ALL: [Facet; 3] = [Facet::Genre, Facet::Artist, Facet::Era];

    /// CSV header of the column backing this facet.
    pub fn column(self) -> &'static str {
        match self {
            Facet::Genre => "Genre",
            Facet::Artist => "Artist",
            Facet::Era => "Era",
        }
    }

    pub fn value_of(self, record: &AlbumRecord) -> &str {
        match self {
            Facet::Genre => &record.genre,
            Facet::Artist => &record.artist,
            Facet::Era => &record.era,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// FacetChoice – a selected value or the "All" sentinel
// ---------------------------------------------------------------------------

/// Label shown for the no-constraint sentinel.
pub const ALL_LABEL: &str = "All";

/// Selection state of a single facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacetChoice {
    /// No constraint on this facet.
    #[default]
    All,
    /// Keep only records whose field equals this value exactly.
    Only(String),
}

impl FacetChoice {
    pub fn only(value: impl Into<String>) -> Self {
        FacetChoice::Only(value.into())
    }

    /// Case-sensitive, exact comparison; `All` matches everything.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetChoice::All => true,
            FacetChoice::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetChoice::All)
    }
}

impl fmt::Display for FacetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetChoice::All => f.write_str(ALL_LABEL),
            FacetChoice::Only(v) => f.write_str(v),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed catalog with pre-computed facet domains.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<AlbumRecord>,
    /// For each facet the sorted set of distinct values across all records.
    unique_values: BTreeMap<Facet, BTreeSet<String>>,
}

impl Catalog {
    /// Build facet domains from the loaded records, keeping source order.
    pub fn from_records(records: Vec<AlbumRecord>) -> Self {
        let mut unique_values: BTreeMap<Facet, BTreeSet<String>> =
            Facet::ALL.iter().map(|f| (*f, BTreeSet::new())).collect();

        for rec in &records {
            for facet in Facet::ALL {
                unique_values
                    .entry(facet)
                    .or_default()
                    .insert(facet.value_of(rec).to_string());
            }
        }

        Catalog {
            records,
            unique_values,
        }
    }

    pub fn records(&self) -> &[AlbumRecord] {
        &self.records
    }

    /// Distinct values of a facet across the whole catalog, sorted.
    pub fn domain(&self, facet: Facet) -> &BTreeSet<String> {
        &self.unique_values[&facet]
    }

    /// Selectable options for a facet: the `All` sentinel, then the domain.
    pub fn facet_options(&self, facet: Facet) -> Vec<FacetChoice> {
        std::iter::once(FacetChoice::All)
            .chain(self.domain(facet).iter().cloned().map(FacetChoice::Only))
            .collect()
    }

    /// Number of albums.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
