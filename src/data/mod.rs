/// Data layer: core types, loading, filtering and preview derivation.
///
/// Architecture:
/// ```text
///  concept_albums.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse CSV → Catalog (cached per path)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Catalog  │  Vec<AlbumRecord>, facet domains
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  apply facet choices → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ preview  │  selected record → artwork URL, caption, link
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod preview;
