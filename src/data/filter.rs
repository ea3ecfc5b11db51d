use super::model::{AlbumRecord, Catalog, Facet, FacetChoice};

// ---------------------------------------------------------------------------
// Filter predicate: one choice per facet
// ---------------------------------------------------------------------------

/// Current choice for each of the three facets.
/// `FacetChoice::All` on a facet means "no constraint" (show all).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    pub genre: FacetChoice,
    pub artist: FacetChoice,
    pub era: FacetChoice,
}

impl FacetSelection {
    pub fn get(&self, facet: Facet) -> &FacetChoice {
        match facet {
            Facet::Genre => &self.genre,
            Facet::Artist => &self.artist,
            Facet::Era => &self.era,
        }
    }

    /// Returns a copy with `facet` replaced by `choice`.
    pub fn with(&self, facet: Facet, choice: FacetChoice) -> Self {
        let mut next = self.clone();
        match facet {
            Facet::Genre => next.genre = choice,
            Facet::Artist => next.artist = choice,
            Facet::Era => next.era = choice,
        }
        next
    }

    /// Whether no facet constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        Facet::ALL.iter().all(|f| self.get(*f).is_all())
    }

    /// A record passes when every facet is `All` or equals the record's field.
    pub fn matches(&self, record: &AlbumRecord) -> bool {
        Facet::ALL
            .iter()
            .all(|facet| self.get(*facet).matches(facet.value_of(record)))
    }
}

/// Keep the records that pass `selection`, in their original order.
///
/// Accepts any sequence of record references so a view can be filtered again.
pub fn filter<'a, I>(records: I, selection: &FacetSelection) -> Vec<&'a AlbumRecord>
where
    I: IntoIterator<Item = &'a AlbumRecord>,
{
    records
        .into_iter()
        .filter(|rec| selection.matches(rec))
        .collect()
}

/// Return indices of catalog records that pass all active facets.
pub fn filtered_indices(catalog: &Catalog, selection: &FacetSelection) -> Vec<usize> {
    if selection.is_unconstrained() {
        return (0..catalog.len()).collect();
    }
    catalog
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect()
}
