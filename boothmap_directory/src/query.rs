// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use boothmap_catalog::BoothEntry;

use crate::DirectoryFilter;

/// Search text plus filter mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryQuery {
    /// Free text as typed by the user.
    pub search: String,
    /// Filter mode.
    pub filter: DirectoryFilter,
}

impl DirectoryQuery {
    /// Creates a query.
    #[must_use]
    pub fn new(search: impl Into<String>, filter: DirectoryFilter) -> Self {
        Self {
            search: search.into(),
            filter,
        }
    }

    /// Returns `true` if `entry` passes both the filter and the search.
    #[must_use]
    pub fn matches(&self, entry: &BoothEntry<'_>) -> bool {
        self.filter.accepts(entry) && self.matcher().matches(entry)
    }

    pub(crate) fn matcher(&self) -> SearchMatcher {
        SearchMatcher::new(&self.search)
    }
}

/// Case-insensitive substring matcher over booth number, exhibitor name and
/// representative names.
///
/// Text that is blank after trimming matches everything. Otherwise the
/// lower-cased text, untrimmed, must occur in one of the fields.
#[derive(Clone, Debug)]
pub(crate) struct SearchMatcher {
    term: Option<String>,
}

impl SearchMatcher {
    pub(crate) fn new(search: &str) -> Self {
        let term = if search.trim().is_empty() {
            None
        } else {
            Some(search.to_lowercase())
        };
        Self { term }
    }

    pub(crate) fn matches(&self, entry: &BoothEntry<'_>) -> bool {
        let Some(term) = self.term.as_deref() else {
            return true;
        };
        if entry.booth.id.to_string().contains(term) {
            return true;
        }
        let Some(exhibitor) = entry.exhibitor else {
            return false;
        };
        exhibitor.name.to_lowercase().contains(term)
            || exhibitor
                .representatives
                .iter()
                .any(|rep| rep.to_lowercase().contains(term))
    }
}

#[cfg(test)]
mod tests {
    use boothmap_catalog::{
        BoothCatalog, BoothId, BoothRecord, BoothSize, CatalogBuilder, ExhibitorRecord, Zone,
    };

    use super::{DirectoryQuery, SearchMatcher};
    use crate::DirectoryFilter;

    fn catalog() -> BoothCatalog {
        let id = |n| BoothId::new(n).unwrap();
        let mut builder = CatalogBuilder::new();
        for n in [1, 12, 21] {
            builder.push_booth(BoothRecord::new(id(n), BoothSize::Six, Zone::MainTent, 2));
        }
        builder.assign(
            id(21),
            ExhibitorRecord::new("GreenEnergy Solutions", "", "https://example.com")
                .with_representative("Mike Johnson"),
        );
        builder.build().unwrap()
    }

    #[test]
    fn blank_search_matches_everything() {
        let catalog = catalog();
        let matcher = SearchMatcher::new("   ");
        assert!(catalog.entries().all(|e| matcher.matches(&e)));
    }

    #[test]
    fn search_covers_number_name_and_representatives() {
        let catalog = catalog();
        let hits = |text: &str| -> alloc::vec::Vec<u32> {
            let matcher = SearchMatcher::new(text);
            catalog
                .entries()
                .filter(|e| matcher.matches(e))
                .map(|e| e.booth.id.get())
                .collect()
        };
        assert_eq!(hits("1"), [1, 12, 21]);
        assert_eq!(hits("2"), [12, 21]);
        assert_eq!(hits("green"), [21]);
        assert_eq!(hits("JOHNSON"), [21]);
        assert!(hits("zzz").is_empty());
        // Surrounding whitespace is part of the term once the text is not blank.
        assert!(hits(" green").is_empty());
    }

    #[test]
    fn query_combines_filter_and_search() {
        let catalog = catalog();
        let query = DirectoryQuery::new("1", DirectoryFilter::Available);
        let ids: alloc::vec::Vec<u32> = catalog
            .entries()
            .filter(|e| query.matches(e))
            .map(|e| e.booth.id.get())
            .collect();
        assert_eq!(ids, [1, 12]);
    }
}
